//! Per-kind value access.
//!
//! Every kind carries an explicit capability object, and
//! [`ElementKind::ops`] is the dispatch table: a pattern match, not the
//! tag-plus-suffix method-name lookup host frameworks tend to grow.
//!
//! Value shapes are coerced per kind. A value whose shape does not fit the
//! kind is a silent no-op, never an error - the crate-wide absent/no-op
//! failure contract.

use crate::types::{ElementKind, ElementValue};

use super::{ElementEntry, ElementRegistry};

// =============================================================================
// Capability Interface
// =============================================================================

/// Get/update capability for one element kind.
pub trait KindOps {
    /// Read the entry's current value.
    fn get(&self, registry: &ElementRegistry, entry: &ElementEntry) -> Option<ElementValue>;

    /// Write `value` into the entry at `position` in the full table.
    ///
    /// Returns true when stored state actually changed. A mismatched value
    /// shape or an out-of-range position is a no-op returning false.
    fn update(&self, registry: &mut ElementRegistry, position: usize, value: ElementValue)
        -> bool;
}

impl ElementKind {
    /// The capability object for this kind.
    pub fn ops(self) -> &'static dyn KindOps {
        match self {
            Self::Button | Self::Checkbox => &ToggleOps,
            Self::Radio => &RadioOps,
            Self::Slider => &SliderOps,
            Self::Input | Self::Label => &TextOps,
        }
    }
}

// =============================================================================
// Kind Implementations
// =============================================================================

/// Buttons and checkboxes: a plain bool.
struct ToggleOps;

impl KindOps for ToggleOps {
    fn get(&self, _registry: &ElementRegistry, entry: &ElementEntry) -> Option<ElementValue> {
        Some(entry.value.clone())
    }

    fn update(
        &self,
        registry: &mut ElementRegistry,
        position: usize,
        value: ElementValue,
    ) -> bool {
        let ElementValue::Bool(on) = value else {
            return false;
        };
        store(registry, position, ElementValue::Bool(on))
    }
}

/// Radio buttons: a bool, with group exclusivity on select.
struct RadioOps;

impl KindOps for RadioOps {
    fn get(&self, _registry: &ElementRegistry, entry: &ElementEntry) -> Option<ElementValue> {
        Some(entry.value.clone())
    }

    fn update(
        &self,
        registry: &mut ElementRegistry,
        position: usize,
        value: ElementValue,
    ) -> bool {
        let ElementValue::Bool(on) = value else {
            return false;
        };
        let Some(group) = registry.get(position).map(|e| e.radio_group.clone()) else {
            return false;
        };
        let mut changed = store(registry, position, ElementValue::Bool(on));

        // Selecting one member deselects the rest of its group, within the
        // active window.
        if on {
            if let Some(group) = group {
                let (b, n) = registry.active_bounds();
                for i in b..n {
                    if i == position {
                        continue;
                    }
                    let Some(entry) = registry.get_mut(i) else {
                        continue;
                    };
                    if entry.kind == ElementKind::Radio
                        && entry.radio_group.as_deref() == Some(&group)
                        && entry.value != ElementValue::Bool(false)
                    {
                        entry.value = ElementValue::Bool(false);
                        changed = true;
                    }
                }
            }
        }
        changed
    }
}

/// Sliders: a number.
struct SliderOps;

impl KindOps for SliderOps {
    fn get(&self, _registry: &ElementRegistry, entry: &ElementEntry) -> Option<ElementValue> {
        Some(entry.value.clone())
    }

    fn update(
        &self,
        registry: &mut ElementRegistry,
        position: usize,
        value: ElementValue,
    ) -> bool {
        let ElementValue::Number(v) = value else {
            return false;
        };
        store(registry, position, ElementValue::Number(v))
    }
}

/// Inputs and labels: text content.
struct TextOps;

impl KindOps for TextOps {
    fn get(&self, _registry: &ElementRegistry, entry: &ElementEntry) -> Option<ElementValue> {
        Some(entry.value.clone())
    }

    fn update(
        &self,
        registry: &mut ElementRegistry,
        position: usize,
        value: ElementValue,
    ) -> bool {
        let ElementValue::Text(t) = value else {
            return false;
        };
        store(registry, position, ElementValue::Text(t))
    }
}

/// Store a pre-coerced value; true when it differed from the stored one.
fn store(registry: &mut ElementRegistry, position: usize, value: ElementValue) -> bool {
    let Some(entry) = registry.get_mut(position) else {
        return false;
    };
    if entry.value == value {
        return false;
    }
    entry.value = value;
    true
}
