//! Core types for shapekit.
//!
//! These types define the foundation the registry helpers build on:
//! the widget kinds an element can be tagged with, the value shapes those
//! kinds carry, and the per-element state bitfield.

use serde::{Deserialize, Serialize};

// =============================================================================
// Element Kinds
// =============================================================================

/// Widget kinds an element registry entry can be tagged with.
///
/// Host frameworks tag entries on the wire with short strings
/// ("btn", "rad", ...). Internally the tag is an enum so that kind dispatch
/// is a pattern match instead of string concatenation; [`ElementKind::as_tag`]
/// and [`ElementKind::from_tag`] preserve the wire convention, and serde
/// serializes kinds as those tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Momentary push button.
    #[serde(rename = "btn")]
    Button,
    /// Two-state checkbox.
    #[serde(rename = "chk")]
    Checkbox,
    /// Radio button; one selected per group.
    #[serde(rename = "rad")]
    Radio,
    /// Numeric slider.
    #[serde(rename = "sld")]
    Slider,
    /// Single-line text input.
    #[serde(rename = "inp")]
    Input,
    /// Static text label.
    #[serde(rename = "lbl")]
    Label,
}

impl ElementKind {
    /// The short wire tag for this kind.
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Button => "btn",
            Self::Checkbox => "chk",
            Self::Radio => "rad",
            Self::Slider => "sld",
            Self::Input => "inp",
            Self::Label => "lbl",
        }
    }

    /// Parse a short wire tag. Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "btn" => Some(Self::Button),
            "chk" => Some(Self::Checkbox),
            "rad" => Some(Self::Radio),
            "sld" => Some(Self::Slider),
            "inp" => Some(Self::Input),
            "lbl" => Some(Self::Label),
            _ => None,
        }
    }
}

// =============================================================================
// Element Values
// =============================================================================

/// The value shapes registry entries carry, one per family of kinds.
///
/// Untagged on the wire: host descriptors carry bare scalars
/// (`true`, `0.5`, `"text"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementValue {
    /// Button pressed / checkbox checked / radio selected.
    Bool(bool),
    /// Slider position.
    Number(f32),
    /// Input or label content.
    Text(String),
}

impl ElementValue {
    /// The value a freshly created entry of `kind` starts with.
    pub fn default_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Button | ElementKind::Checkbox | ElementKind::Radio => Self::Bool(false),
            ElementKind::Slider => Self::Number(0.0),
            ElementKind::Input | ElementKind::Label => Self::Text(String::new()),
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl Default for ElementValue {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl From<bool> for ElementValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for ElementValue {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ElementValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ElementValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// =============================================================================
// Element Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Per-element state as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `ElementFlags::DISABLED | ElementFlags::HIDDEN`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ElementFlags: u8 {
        const NONE = 0;
        const DISABLED = 1 << 0;
        const HIDDEN = 1 << 1;
        const FOCUSED = 1 << 2;
        const DIRTY = 1 << 3;
    }
}
