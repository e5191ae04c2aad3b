//! The host mixin - resolve, get and update as an extension trait.
//!
//! Host frameworks mix helpers like these into their UI-base object so the
//! helpers see the host's merged state. Here that is a [`Host`] trait for
//! what the helpers consume (the element registry and a change-notification
//! hook) plus [`UiExt`], a blanket-implemented extension trait carrying the
//! helpers themselves. Any type that implements `Host` gets the full mixin
//! for free.
//!
//! Failure stays silent throughout: an unresolvable identifier reads as
//! `None` and updates as a no-op. Nothing here panics or logs.

use crate::registry::{ElementEntry, ElementRef, ElementRegistry};
use crate::types::ElementValue;

/// What the mixin consumes from its host.
pub trait Host {
    /// The host's element registry.
    fn registry(&self) -> &ElementRegistry;

    /// Mutable access to the registry, for updates.
    fn registry_mut(&mut self) -> &mut ElementRegistry;

    /// Change notification, invoked after a propagating update that changed
    /// stored state. Default: ignore.
    fn value_changed(&mut self, _index: usize, _value: &ElementValue) {}
}

/// The mixin: lookup and value helpers over the host's registry.
///
/// Blanket-implemented for every [`Host`]; implement `Host`, use `UiExt`.
pub trait UiExt: Host {
    /// Resolve an index, id or entry reference to a registry entry.
    ///
    /// `start` offsets id scans within the active window; pass 0 for a full
    /// scan. See [`ElementRegistry::resolve`] for the matching rules.
    fn resolve_element<'a>(
        &'a self,
        r: impl Into<ElementRef<'a>>,
        start: usize,
    ) -> Option<&'a ElementEntry> {
        self.registry().resolve(r.into(), start)
    }

    /// Value of the element `r` resolves to; `None` when it doesn't.
    fn get_value<'a>(&'a self, r: impl Into<ElementRef<'a>>) -> Option<ElementValue> {
        let registry = self.registry();
        let entry = registry.resolve(r.into(), 0)?;
        entry.kind.ops().get(registry, entry)
    }

    /// Update the element `r` resolves to with `value`.
    ///
    /// `propagate` is an explicit optional: `None` means propagate (the
    /// default), `Some(false)` suppresses the [`Host::value_changed`] hook.
    /// The hook only fires when the update actually changed stored state.
    /// An unresolvable identifier or a value shape the kind rejects is a
    /// silent no-op. Returns the host either way, for chaining.
    fn update_value<'r>(
        &mut self,
        r: impl Into<ElementRef<'r>>,
        value: impl Into<ElementValue>,
        propagate: Option<bool>,
    ) -> &mut Self {
        let r = r.into();
        let propagate = propagate.unwrap_or(true);
        let Some(position) = self.registry().resolve_position(&r, 0) else {
            return self;
        };
        let Some(kind) = self.registry().get(position).map(|e| e.kind) else {
            return self;
        };
        let value = value.into();
        let changed = kind.ops().update(self.registry_mut(), position, value.clone());
        if changed && propagate {
            self.value_changed(position, &value);
        }
        self
    }
}

impl<T: Host + ?Sized> UiExt for T {}
