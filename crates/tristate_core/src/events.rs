//! Event names and the payload handed to listeners

use std::rc::Rc;

/// Well-known event names
pub mod event_types {
    /// The native control committed a new checked/indeterminate state
    pub const CHANGE: &str = "change";
    /// Unprefixed CSS animation completion
    pub const ANIMATION_END: &str = "animationend";
    /// Vendor-prefixed CSS animation completion
    pub const WEBKIT_ANIMATION_END: &str = "webkitAnimationEnd";
    pub const POINTER_DOWN: &str = "pointerdown";
    pub const POINTER_UP: &str = "pointerup";
    pub const KEY_DOWN: &str = "keydown";
    pub const KEY_UP: &str = "keyup";
}

/// An event travelling through the element tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    name: String,
    bubbles: bool,
}

impl Event {
    /// Create a bubbling event
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bubbles: true,
        }
    }

    /// Create an event that is only delivered to its target
    pub fn non_bubbling(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bubbles: false,
        }
    }

    /// The event name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the event continues to ancestors after the target
    pub fn bubbles(&self) -> bool {
        self.bubbles
    }
}

/// Listener callback
///
/// Uses Rc since the element tree is single-threaded.
pub type EventCallback = Rc<dyn Fn(&Event)>;
