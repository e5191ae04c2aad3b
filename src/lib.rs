//! # shapekit
//!
//! Shape vertex and element lookup helpers for canvas UI frameworks.
//!
//! Two halves, both thin glue over a host framework that owns the widgets:
//!
//! ```text
//! geometry                     registry + ext
//! ────────                     ──────────────
//! circle_vertices       →      ElementRegistry (host-owned table, [b, n) window)
//! beveled_rect_vertices        ElementRef (index | id | "group." | entry)
//! rounded_rect_vertices        UiExt::get_value / update_value (per-kind dispatch)
//! ```
//!
//! The geometry side is pure vertex math: flat `f32` polygons for the host
//! to draw, with no validation and no failure path. The registry side
//! resolves the host's polymorphic element identifiers and dispatches value
//! access through a per-kind capability table; hosts plug in by implementing
//! [`Host`] and get the [`UiExt`] mixin for free.
//!
//! Everything runs synchronously on the caller's thread. Failure is always
//! an absent value or a silent no-op, never a panic - matching the host
//! framework's contract.
//!
//! ## Modules
//!
//! - [`types`] - Element kinds, value shapes, state flags
//! - [`geometry`] - Circle / beveled / rounded polygon vertices
//! - [`search`] - Generic predicate scans with start offset and context
//! - [`registry`] - Element table, active window, identifier resolution
//! - [`ext`] - The `Host` / `UiExt` mixin traits

pub mod ext;
pub mod geometry;
pub mod registry;
pub mod search;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use ext::{Host, UiExt};

pub use geometry::{
    beveled_rect_vertices, circle_vertices, rounded_rect_vertices, CIRCLE_COARSE, CIRCLE_FINE,
    FINE_WIDTH_MIN,
};

pub use registry::{ElementEntry, ElementRef, ElementRegistry, KindOps};

pub use search::{find_first, find_index};
