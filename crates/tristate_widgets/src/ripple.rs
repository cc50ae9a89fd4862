//! Interaction ripple
//!
//! The ripple reacts to activation on its surface and mirrors it with root
//! classes. Its host supplies a [`RippleAdapter`]; the widget only depends on
//! the [`RippleEffect`] handle, so hosts may plug in their own effect.
//!
//! ```text
//! pointerdown / keydown  → surface active?  → add activation class
//! pointerup / keyup      → was activated?   → swap to deactivation class
//! ```

use std::cell::Cell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tristate_core::{event_types, Event, EventCallback, ListenerId};

const ACTIVATION_EVENTS: [&str; 2] = [event_types::POINTER_DOWN, event_types::KEY_DOWN];
const DEACTIVATION_EVENTS: [&str; 2] = [event_types::POINTER_UP, event_types::KEY_UP];

/// Host capabilities a ripple needs
pub trait RippleAdapter {
    /// Whether the ripple may extend past the surface bounds
    fn is_unbounded(&self) -> bool;

    /// Whether the surface is in its pressed/active visual state
    fn is_surface_active(&self) -> bool;

    /// Listen for an interaction event on the interactive element
    fn register_interaction_handler(&self, event: &str, handler: EventCallback) -> ListenerId;

    fn deregister_interaction_handler(&self, event: &str, id: ListenerId);

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);
}

/// A constructed ripple owned by a widget
pub trait RippleEffect {
    /// Release handlers and classes; called exactly once by the owner
    fn destroy(&mut self);

    fn is_unbounded(&self) -> bool;
}

/// Ripple class names
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RippleConfig {
    pub unbounded: String,
    pub activation: String,
    pub deactivation: String,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            unbounded: "mdc-ripple-upgraded--unbounded".to_string(),
            activation: "mdc-ripple-upgraded--foreground-activation".to_string(),
            deactivation: "mdc-ripple-upgraded--foreground-deactivation".to_string(),
        }
    }
}

/// Default ripple effect
pub struct Ripple {
    adapter: Rc<dyn RippleAdapter>,
    config: RippleConfig,
    unbounded: bool,
    active: Rc<Cell<bool>>,
    handlers: SmallVec<[(&'static str, ListenerId); 4]>,
}

impl Ripple {
    /// Register interaction handlers and apply the bounds class
    pub fn new(adapter: Rc<dyn RippleAdapter>, config: RippleConfig) -> Self {
        let unbounded = adapter.is_unbounded();
        if unbounded {
            adapter.add_class(&config.unbounded);
        }

        let active = Rc::new(Cell::new(false));
        let mut handlers = SmallVec::new();
        for event in ACTIVATION_EVENTS {
            let handler = Self::activation_handler(&adapter, &config, &active);
            handlers.push((event, adapter.register_interaction_handler(event, handler)));
        }
        for event in DEACTIVATION_EVENTS {
            let handler = Self::deactivation_handler(&adapter, &config, &active);
            handlers.push((event, adapter.register_interaction_handler(event, handler)));
        }

        Self {
            adapter,
            config,
            unbounded,
            active,
            handlers,
        }
    }

    fn activation_handler(
        adapter: &Rc<dyn RippleAdapter>,
        config: &RippleConfig,
        active: &Rc<Cell<bool>>,
    ) -> EventCallback {
        // Weak: the handler lives on an element the adapter itself points at
        let adapter: Weak<dyn RippleAdapter> = Rc::downgrade(adapter);
        let active = active.clone();
        let activation = config.activation.clone();
        let deactivation = config.deactivation.clone();
        Rc::new(move |_: &Event| {
            let Some(adapter) = adapter.upgrade() else {
                return;
            };
            if active.get() || !adapter.is_surface_active() {
                return;
            }
            adapter.remove_class(&deactivation);
            adapter.add_class(&activation);
            active.set(true);
        })
    }

    fn deactivation_handler(
        adapter: &Rc<dyn RippleAdapter>,
        config: &RippleConfig,
        active: &Rc<Cell<bool>>,
    ) -> EventCallback {
        let adapter: Weak<dyn RippleAdapter> = Rc::downgrade(adapter);
        let active = active.clone();
        let activation = config.activation.clone();
        let deactivation = config.deactivation.clone();
        Rc::new(move |_: &Event| {
            let Some(adapter) = adapter.upgrade() else {
                return;
            };
            if !active.replace(false) {
                return;
            }
            adapter.remove_class(&activation);
            adapter.add_class(&deactivation);
        })
    }

    /// Whether an activation is in progress
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl RippleEffect for Ripple {
    fn destroy(&mut self) {
        for (event, id) in self.handlers.drain(..) {
            self.adapter.deregister_interaction_handler(event, id);
        }
        self.active.set(false);
        self.adapter.remove_class(&self.config.activation);
        self.adapter.remove_class(&self.config.deactivation);
        if self.unbounded {
            self.adapter.remove_class(&self.config.unbounded);
        }
        tracing::debug!("ripple destroyed");
    }

    fn is_unbounded(&self) -> bool {
        self.unbounded
    }
}

impl std::fmt::Debug for Ripple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ripple")
            .field("unbounded", &self.unbounded)
            .field("active", &self.active.get())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
