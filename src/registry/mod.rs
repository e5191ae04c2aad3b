//! Element registry - the host-owned element table and lookups over it.
//!
//! The host framework keeps its UI elements in one ordered table and marks a
//! sub-range `[b, n)` of it as the currently active lookup window. This
//! module models that table and resolves the three identifier shapes callers
//! use against it:
//!
//! ```text
//! Index 0: Button  (id "ok",     value false)
//! Index 1: Radio   (id "g1",     group "g1.")
//! Index 2: Slider  (id "volume", value 0.5)
//! ```
//!
//! - a numeric index addresses the FULL table directly;
//! - a string id scans the active window; an id ending in `.` is a
//!   radio-group key and matches the group descriptor instead;
//! - an already-resolved entry passes through unchanged.
//!
//! Entries are created and destroyed by the host, never here. String id
//! uniqueness is assumed, not verified.

mod kinds;

pub use kinds::KindOps;

use serde::{Deserialize, Serialize};

use crate::search::{find_first, find_index};
use crate::types::{ElementFlags, ElementKind, ElementValue};

// =============================================================================
// Element Entry
// =============================================================================

/// One element descriptor in the registry.
///
/// The struct rendering of the host's positional tuple layout: position,
/// kind tag, id, then kind-specific fields. `radio_group` stores the group
/// key WITH its trailing dot, exactly as lookups quote it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementEntry {
    /// Position in the full registry. Assigned by [`ElementRegistry::push`].
    pub index: usize,
    /// Kind tag, dispatches value access.
    pub kind: ElementKind,
    /// Element identifier. Assumed unique; never verified.
    pub id: String,
    /// Element state bitfield.
    #[serde(default)]
    pub flags: ElementFlags,
    /// Current value; shape depends on `kind`.
    #[serde(default)]
    pub value: ElementValue,
    /// Radio-group key including the trailing dot ("g1."). Radio kind only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radio_group: Option<String>,
}

impl ElementEntry {
    /// New entry with the kind's default value. `index` is provisional until
    /// the entry is pushed into a registry.
    pub fn new(kind: ElementKind, id: impl Into<String>) -> Self {
        Self {
            index: 0,
            kind,
            id: id.into(),
            flags: ElementFlags::NONE,
            value: ElementValue::default_for(kind),
            radio_group: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<ElementValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the radio-group key. Pass it dotted ("g1."), as lookups quote it.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.radio_group = Some(group.into());
        self
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.flags.contains(ElementFlags::DISABLED)
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(ElementFlags::HIDDEN)
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.flags.contains(ElementFlags::FOCUSED)
    }
}

// =============================================================================
// Element Reference
// =============================================================================

/// The polymorphic identifier lookups accept: a numeric index into the full
/// registry, a string id (dotted form meaning radio-group key), or an
/// already-resolved entry.
#[derive(Debug, Clone, Copy)]
pub enum ElementRef<'a> {
    /// Index into the full registry. Negative resolves to absent.
    Index(i64),
    /// Element id, or radio-group key when it ends with `.`.
    Id(&'a str),
    /// Already resolved; passes through unchanged.
    Entry(&'a ElementEntry),
}

impl From<i64> for ElementRef<'_> {
    fn from(index: i64) -> Self {
        ElementRef::Index(index)
    }
}

impl From<i32> for ElementRef<'_> {
    fn from(index: i32) -> Self {
        ElementRef::Index(index as i64)
    }
}

impl From<usize> for ElementRef<'_> {
    fn from(index: usize) -> Self {
        ElementRef::Index(index as i64)
    }
}

impl<'a> From<&'a str> for ElementRef<'a> {
    fn from(id: &'a str) -> Self {
        ElementRef::Id(id)
    }
}

impl<'a> From<&'a String> for ElementRef<'a> {
    fn from(id: &'a String) -> Self {
        ElementRef::Id(id)
    }
}

impl<'a> From<&'a ElementEntry> for ElementRef<'a> {
    fn from(entry: &'a ElementEntry) -> Self {
        ElementRef::Entry(entry)
    }
}

// =============================================================================
// Element Registry
// =============================================================================

/// The host-owned element table plus its active lookup window `[b, n)`.
///
/// Without an explicit window the whole table is active. A stale window is
/// clamped to the current length rather than panicking; keeping the bounds
/// consistent during mutation is the host's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementRegistry {
    entries: Vec<ElementEntry>,
    #[serde(default)]
    active: Option<(usize, usize)>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, assigning its registry position. Returns the position.
    pub fn push(&mut self, mut entry: ElementEntry) -> usize {
        let index = self.entries.len();
        entry.index = index;
        self.entries.push(entry);
        index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[ElementEntry] {
        &self.entries
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&ElementEntry> {
        self.entries.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut ElementEntry> {
        self.entries.get_mut(index)
    }

    /// Set the active lookup window `[b, n)` for id lookups.
    pub fn set_active_range(&mut self, b: usize, n: usize) {
        self.active = Some((b, n));
    }

    /// Back to the default: the whole table is active.
    pub fn clear_active_range(&mut self) {
        self.active = None;
    }

    /// Active window clamped to the current length.
    pub fn active_bounds(&self) -> (usize, usize) {
        let len = self.entries.len();
        match self.active {
            Some((b, n)) => {
                let b = b.min(len);
                (b, n.min(len).max(b))
            }
            None => (0, len),
        }
    }

    /// The entries inside the active window.
    pub fn active_slice(&self) -> &[ElementEntry] {
        let (b, n) = self.active_bounds();
        &self.entries[b..n]
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve an identifier to its entry.
    ///
    /// - `Index`: negative is absent; otherwise direct positional access into
    ///   the full table (out of range is absent too).
    /// - `Id` ending in `.`: radio-group lookup over the active window from
    ///   `start` - matches Radio entries whose group key equals the full
    ///   dotted string.
    /// - other `Id`: exact id match over the active window from `start`.
    /// - `Entry`: returned unchanged.
    pub fn resolve<'r>(&'r self, r: ElementRef<'r>, start: usize) -> Option<&'r ElementEntry> {
        match r {
            ElementRef::Index(i) => {
                if i < 0 {
                    None
                } else {
                    self.entries.get(i as usize)
                }
            }
            ElementRef::Id(id) => {
                if id.ends_with('.') {
                    find_first(self.active_slice(), start, id, is_group_member)
                } else {
                    find_first(self.active_slice(), start, id, has_id)
                }
            }
            ElementRef::Entry(entry) => Some(entry),
        }
    }

    /// Like [`Self::resolve`], but yields the entry's position in the full
    /// table, for mutation. An `Entry` reference resolves through its stored
    /// position.
    pub fn resolve_position(&self, r: &ElementRef<'_>, start: usize) -> Option<usize> {
        match *r {
            ElementRef::Index(i) => {
                if i < 0 || i as usize >= self.entries.len() {
                    None
                } else {
                    Some(i as usize)
                }
            }
            ElementRef::Id(id) => {
                let (b, _) = self.active_bounds();
                let offset = if id.ends_with('.') {
                    find_index(self.active_slice(), start, id, is_group_member)
                } else {
                    find_index(self.active_slice(), start, id, has_id)
                }?;
                Some(b + offset)
            }
            ElementRef::Entry(entry) => {
                if entry.index < self.entries.len() {
                    Some(entry.index)
                } else {
                    None
                }
            }
        }
    }
}

fn has_id(entry: &ElementEntry, id: &str) -> bool {
    entry.id == id
}

fn is_group_member(entry: &ElementEntry, key: &str) -> bool {
    entry.kind == ElementKind::Radio && entry.radio_group.as_deref() == Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> ElementRegistry {
        let mut reg = ElementRegistry::new();
        reg.push(ElementEntry::new(ElementKind::Button, "ok"));
        reg.push(ElementEntry::new(ElementKind::Radio, "g1").with_group("g1."));
        reg.push(
            ElementEntry::new(ElementKind::Radio, "g2")
                .with_group("g1.")
                .with_value(true),
        );
        reg.push(ElementEntry::new(ElementKind::Slider, "volume").with_value(0.5f32));
        reg.push(ElementEntry::new(ElementKind::Input, "name").with_value("anna"));
        reg.push(ElementEntry::new(ElementKind::Checkbox, "mute"));
        reg
    }

    #[test]
    fn test_resolve_by_index() {
        let reg = sample_registry();
        assert!(reg.resolve(ElementRef::Index(-1), 0).is_none());
        let entry = reg.resolve(ElementRef::Index(5), 0).unwrap();
        assert_eq!(entry.id, "mute");
        // Out of range positive index is absent, not a panic.
        assert!(reg.resolve(ElementRef::Index(6), 0).is_none());
        assert!(reg.resolve(ElementRef::Index(i64::MAX), 0).is_none());
    }

    #[test]
    fn test_resolve_by_id() {
        let reg = sample_registry();
        let entry = reg.resolve("ok".into(), 0).unwrap();
        assert_eq!(entry.index, 0);
        assert_eq!(entry.kind, ElementKind::Button);
        assert!(reg.resolve("missing".into(), 0).is_none());
    }

    #[test]
    fn test_resolve_radio_group_key() {
        let reg = sample_registry();
        // Dotted key: first Radio whose group descriptor equals "g1.".
        let entry = reg.resolve("g1.".into(), 0).unwrap();
        assert_eq!(entry.index, 1);
        // A later start skips to the next group member.
        let entry = reg.resolve("g1.".into(), 2).unwrap();
        assert_eq!(entry.index, 2);
        // The plain id "g1" still finds the element itself.
        let entry = reg.resolve("g1".into(), 0).unwrap();
        assert_eq!(entry.index, 1);
        assert!(reg.resolve("g9.".into(), 0).is_none());
    }

    #[test]
    fn test_resolve_entry_passthrough() {
        let reg = sample_registry();
        let entry = reg.get(3).unwrap();
        let resolved = reg.resolve(entry.into(), 0).unwrap();
        assert!(std::ptr::eq(entry, resolved));
    }

    #[test]
    fn test_active_window_limits_id_lookups() {
        let mut reg = sample_registry();
        reg.set_active_range(1, 4);
        // "ok" sits at index 0, outside the window.
        assert!(reg.resolve("ok".into(), 0).is_none());
        assert_eq!(reg.resolve("volume".into(), 0).unwrap().index, 3);
        // Index lookups address the full table regardless of the window.
        assert_eq!(reg.resolve(ElementRef::Index(0), 0).unwrap().id, "ok");
        reg.clear_active_range();
        assert!(reg.resolve("ok".into(), 0).is_some());
    }

    #[test]
    fn test_stale_active_window_is_clamped() {
        let mut reg = sample_registry();
        reg.set_active_range(2, 50);
        assert_eq!(reg.active_bounds(), (2, 6));
        reg.set_active_range(50, 60);
        assert_eq!(reg.active_bounds(), (6, 6));
        assert!(reg.active_slice().is_empty());
        assert!(reg.resolve("ok".into(), 0).is_none());
    }

    #[test]
    fn test_resolve_position() {
        let reg = sample_registry();
        assert_eq!(reg.resolve_position(&ElementRef::Index(3), 0), Some(3));
        assert_eq!(reg.resolve_position(&ElementRef::Index(-2), 0), None);
        assert_eq!(reg.resolve_position(&"name".into(), 0), Some(4));
        let entry = reg.get(2).unwrap().clone();
        assert_eq!(reg.resolve_position(&(&entry).into(), 0), Some(2));
    }

    #[test]
    fn test_position_accounts_for_window_offset() {
        let mut reg = sample_registry();
        reg.set_active_range(3, 6);
        // "volume" is the first entry of the window; its table position is 3.
        assert_eq!(reg.resolve_position(&"volume".into(), 0), Some(3));
    }

    #[test]
    fn test_push_assigns_positions() {
        let mut reg = ElementRegistry::new();
        let a = reg.push(ElementEntry::new(ElementKind::Label, "a"));
        let b = reg.push(ElementEntry::new(ElementKind::Label, "b"));
        assert_eq!((a, b), (0, 1));
        assert_eq!(reg.get(1).unwrap().index, 1);
    }

    #[test]
    fn test_entry_from_descriptor() {
        // Entries originate in host-side descriptors.
        let entry: ElementEntry = serde_json::from_str(
            r#"{ "index": 1, "kind": "rad", "id": "g1", "value": false, "radio_group": "g1." }"#,
        )
        .unwrap();
        assert_eq!(entry.kind, ElementKind::Radio);
        assert_eq!(entry.value, ElementValue::Bool(false));
        assert_eq!(entry.radio_group.as_deref(), Some("g1."));
        assert_eq!(entry.flags, ElementFlags::NONE);
    }
}
