//! Tristate Widget Library
//!
//! An animatable tri-state checkbox layered over a native control.
//!
//! # Architecture
//!
//! ```text
//! native control mutated (click, setter, change event)
//!     ↓ change notification (native listener or intercepted setter)
//! CheckboxFoundation::handle_change
//!     ↓ diff against last committed (checked, indeterminate)
//!     ↓ SurfaceAdapter: swap animation class on the root
//! animation end
//!     ↓ CheckboxFoundation::handle_animation_end clears the class
//! ```
//!
//! - [`CheckboxFoundation`]: platform-independent transition logic
//! - [`CheckboxSurface`]: binds the foundation's adapter to an element tree
//! - [`Checkbox`]: the facade that wires events, interception and ripple
//!
//! # Example
//!
//! ```rust
//! use tristate_core::{ControlPrototype, Element};
//! use tristate_widgets::Checkbox;
//!
//! let page = Element::new("body");
//! let root = Element::with_classes("div", &["mdc-checkbox"]);
//! let input = Element::input(ControlPrototype::standard());
//! input.add_class("mdc-checkbox__native-control");
//! root.append_child(input);
//! page.append_child(root.clone());
//!
//! let mut checkbox = Checkbox::attach_to(root.clone()).unwrap();
//! checkbox.set_checked(true);
//! assert!(root.has_class("mdc-checkbox--anim-unchecked-checked"));
//!
//! checkbox.destroy().unwrap();
//! ```

pub mod checkbox;
mod error;
pub mod ripple;

pub use checkbox::{
    CheckState, Checkbox, CheckboxBuilder, CheckboxClasses, CheckboxConfig, CheckboxFoundation,
    CheckboxRippleSurface, CheckboxStrings, CheckboxSurface, RippleFactory, SharedFoundation,
    TransitionRecord, TransitionState,
};
pub use error::{CheckboxError, Result};
pub use ripple::{Ripple, RippleAdapter, RippleConfig, RippleEffect};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::checkbox::{Checkbox, CheckboxBuilder, CheckboxConfig};
    pub use crate::ripple::{RippleAdapter, RippleEffect};
    pub use tristate_core::{ControlPrototype, Element, ElementRef};
}
