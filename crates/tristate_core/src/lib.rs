//! Tristate Core
//!
//! This crate provides the leaf primitives the Tristate widgets are built on:
//!
//! - **Render Host**: An in-memory element tree with class lists, attributes,
//!   bubbling event dispatch and a layout-read counter
//! - **Native Control**: The platform input element with class-level property
//!   descriptors that can be overridden per instance
//! - **Property Interception**: Wraps the `checked`/`indeterminate` setters so
//!   programmatic writes emit the same notification as a native `change` event
//! - **Component Lifecycle**: Two-phase construct/attach with scoped listeners
//! - **Surface Adapter**: The effect boundary widget logic talks through
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tristate_core::control::ControlPrototype;
//! use tristate_core::element::Element;
//! use tristate_core::intercept::PropertyInterceptor;
//!
//! let input = Element::input(ControlPrototype::standard());
//! let control = input.control().unwrap();
//!
//! let changes = Rc::new(Cell::new(0));
//! let counter = changes.clone();
//! let mut interceptor = PropertyInterceptor::new();
//! interceptor.install(control, Rc::new(move || counter.set(counter.get() + 1)));
//!
//! control.set_checked(true);
//! assert!(control.checked());
//! assert_eq!(changes.get(), 1);
//!
//! interceptor.uninstall(control);
//! control.set_checked(false);
//! assert_eq!(changes.get(), 1);
//! ```

pub mod adapter;
pub mod control;
pub mod element;
mod error;
pub mod events;
pub mod intercept;
pub mod lifecycle;
pub mod vendor;

pub use adapter::SurfaceAdapter;
pub use control::{
    ControlPrototype, ControlPrototypeBuilder, ControlProperty, ControlState, NativeControl,
    PropertyDescriptor, PropertyExposure, PropertyGetter, PropertySetter,
};
pub use element::{Element, ElementRef, ListenerId};
pub use error::{LifecycleError, Result};
pub use events::{event_types, Event, EventCallback};
pub use intercept::{ChangeNotifier, PropertyInterceptor, INTERCEPTED_PROPERTIES};
pub use lifecycle::{ComponentLifecycle, LifecycleOp, LifecycleState};
pub use vendor::{
    animation_end_event, animation_end_event_name, init_animation_end_event, StyleSupport,
};
