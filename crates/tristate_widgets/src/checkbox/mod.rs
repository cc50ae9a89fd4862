//! Animatable tri-state checkbox
//!
//! The [`Checkbox`] facade composes:
//! - a [`CheckboxSurface`] adapter over the root and its native control
//! - a [`CheckboxFoundation`] deciding which animation class to apply
//! - a [`PropertyInterceptor`] so programmatic `checked`/`indeterminate`
//!   writes animate exactly like user clicks
//! - a ripple built from a [`CheckboxRippleSurface`]
//!
//! # Example
//!
//! ```ignore
//! use tristate_widgets::prelude::*;
//!
//! let mut checkbox = Checkbox::builder(root)
//!     .config(CheckboxConfig::from_toml_str(theme_toml)?)
//!     .build()?;
//!
//! // Subscriptions go live here
//! checkbox.attach()?;
//!
//! checkbox.set_indeterminate(true);
//! checkbox.destroy()?;
//! ```

mod config;
mod foundation;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use tristate_core::{
    event_types, vendor, ComponentLifecycle, ElementRef, Event, LifecycleOp, LifecycleState,
    ListenerId, NativeControl, PropertyInterceptor,
};

pub use config::{CheckboxClasses, CheckboxConfig, CheckboxStrings};
pub use foundation::{
    transition_class, CheckState, CheckboxFoundation, SharedFoundation, TransitionRecord,
    TransitionState,
};
pub use surface::{CheckboxRippleSurface, CheckboxSurface};

use crate::error::{CheckboxError, Result};
use crate::ripple::{Ripple, RippleAdapter, RippleEffect};

/// Builds the ripple for a checkbox from its ripple adapter
pub type RippleFactory = Box<dyn FnOnce(Rc<dyn RippleAdapter>) -> Box<dyn RippleEffect>>;

/// Animatable tri-state checkbox bound to a root element
///
/// Dropping a checkbox that was not destroyed runs [`Checkbox::destroy`], so
/// the native control's descriptors and the root's listeners never outlive it.
pub struct Checkbox {
    lifecycle: ComponentLifecycle,
    native: ElementRef,
    control: Rc<NativeControl>,
    foundation: SharedFoundation,
    ripple: Option<Box<dyn RippleEffect>>,
    interceptor: PropertyInterceptor,
    animation_end_event: String,
    change_listener: Option<ListenerId>,
    animation_end_listener: Option<ListenerId>,
}

impl Checkbox {
    /// Construct with the default config; subscriptions are not live yet
    pub fn new(root: ElementRef) -> Result<Self> {
        Self::builder(root).build()
    }

    /// Construct and attach in one step
    pub fn attach_to(root: ElementRef) -> Result<Self> {
        let mut checkbox = Self::new(root)?;
        checkbox.attach()?;
        Ok(checkbox)
    }

    /// Start building a checkbox on `root`
    pub fn builder(root: ElementRef) -> CheckboxBuilder {
        CheckboxBuilder {
            root,
            config: CheckboxConfig::default(),
            ripple_factory: None,
            animation_end_event: None,
        }
    }

    fn from_builder(builder: CheckboxBuilder) -> Result<Self> {
        let CheckboxBuilder {
            root,
            config,
            ripple_factory,
            animation_end_event,
        } = builder;

        let selector = &config.strings.native_control_selector;
        let missing = || CheckboxError::MissingNativeControl {
            selector: selector.clone(),
        };
        let native = root.query_selector(selector).ok_or_else(missing)?;
        let control = native.control().cloned().ok_or_else(missing)?;

        let ripple_adapter: Rc<dyn RippleAdapter> =
            Rc::new(CheckboxRippleSurface::new(root.clone(), native.clone()));
        let ripple: Box<dyn RippleEffect> = match ripple_factory {
            Some(factory) => factory(ripple_adapter),
            None => Box::new(Ripple::new(ripple_adapter, config.ripple.clone())),
        };

        let surface = CheckboxSurface::new(root.clone(), native.clone(), control.clone());
        let mut foundation = CheckboxFoundation::new(
            Box::new(surface),
            config.classes.clone(),
            config.strings.clone(),
        );
        foundation.init();

        let animation_end_event = animation_end_event
            .or(config.animation_end_event)
            .unwrap_or_else(|| vendor::animation_end_event().to_string());

        tracing::debug!(%animation_end_event, "checkbox constructed");
        Ok(Self {
            lifecycle: ComponentLifecycle::new(root),
            native,
            control,
            foundation: Rc::new(RefCell::new(foundation)),
            ripple: Some(ripple),
            interceptor: PropertyInterceptor::new(),
            animation_end_event,
            change_listener: None,
            animation_end_listener: None,
        })
    }

    /// Subscribe to `change` and animation end, and intercept the native
    /// control's state setters
    pub fn attach(&mut self) -> Result<()> {
        self.lifecycle.check(LifecycleOp::Attach)?;

        let foundation = Rc::downgrade(&self.foundation);
        let on_change = move |_: &Event| {
            if let Some(foundation) = foundation.upgrade() {
                foundation.borrow_mut().handle_change();
            }
        };
        self.change_listener = Some(
            self.native
                .add_event_listener(event_types::CHANGE, Rc::new(on_change)),
        );

        let foundation = Rc::downgrade(&self.foundation);
        let on_animation_end = move |_: &Event| {
            if let Some(foundation) = foundation.upgrade() {
                foundation.borrow_mut().handle_animation_end();
            }
        };
        self.animation_end_listener = Some(
            self.lifecycle
                .listen(&self.animation_end_event, Rc::new(on_animation_end)),
        );

        let foundation = Rc::downgrade(&self.foundation);
        let intercepted = self.interceptor.install(
            &self.control,
            Rc::new(move || {
                if let Some(foundation) = foundation.upgrade() {
                    foundation.borrow_mut().handle_change();
                }
            }),
        );

        self.lifecycle.attach()?;
        tracing::debug!(intercepted, "checkbox attached");
        Ok(())
    }

    /// Tear down: ripple first, then listeners, then interception
    pub fn destroy(&mut self) -> Result<()> {
        self.lifecycle.check(LifecycleOp::Destroy)?;

        if let Some(mut ripple) = self.ripple.take() {
            ripple.destroy();
        }
        if let Some(id) = self.change_listener.take() {
            self.native.remove_event_listener(event_types::CHANGE, id);
        }
        if let Some(id) = self.animation_end_listener.take() {
            self.lifecycle.unlisten(&self.animation_end_event, id);
        }
        self.interceptor.uninstall(&self.control);
        self.foundation.borrow_mut().destroy();

        self.lifecycle.destroy()?;
        Ok(())
    }

    pub fn root(&self) -> &ElementRef {
        self.lifecycle.root()
    }

    /// The native control element
    pub fn native_control(&self) -> &ElementRef {
        &self.native
    }

    /// Last committed `(checked, indeterminate)` pair
    pub fn committed(&self) -> Option<CheckState> {
        self.foundation.borrow().committed()
    }

    /// Snapshot of the transition whose animation is still running
    pub fn current_transition(&self) -> Option<TransitionRecord> {
        self.foundation.borrow().current_transition().cloned()
    }

    /// Current lifecycle phase
    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Resolved animation-end event name
    pub fn animation_end_event(&self) -> &str {
        &self.animation_end_event
    }

    pub fn checked(&self) -> bool {
        self.control.checked()
    }

    /// Write `checked` through the native property
    pub fn set_checked(&self, checked: bool) {
        self.control.set_checked(checked);
    }

    pub fn indeterminate(&self) -> bool {
        self.control.indeterminate()
    }

    /// Write `indeterminate` through the native property
    pub fn set_indeterminate(&self, indeterminate: bool) {
        self.control.set_indeterminate(indeterminate);
    }

    pub fn disabled(&self) -> bool {
        self.control.disabled()
    }

    /// Disable or enable the native control via the foundation
    pub fn set_disabled(&self, disabled: bool) {
        self.foundation.borrow_mut().set_disabled(disabled);
    }

    pub fn value(&self) -> String {
        self.control.value()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.control.set_value(value);
    }
}

impl Drop for Checkbox {
    fn drop(&mut self) {
        if self.lifecycle.state() == LifecycleState::Destroyed {
            return;
        }
        if let Err(err) = self.destroy() {
            tracing::debug!(%err, "checkbox teardown on drop failed");
        }
    }
}

impl std::fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkbox")
            .field("state", &self.lifecycle.state())
            .field("control", &self.control)
            .field("foundation", &self.foundation)
            .field("animation_end_event", &self.animation_end_event)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Checkbox`]
pub struct CheckboxBuilder {
    root: ElementRef,
    config: CheckboxConfig,
    ripple_factory: Option<RippleFactory>,
    animation_end_event: Option<String>,
}

impl CheckboxBuilder {
    /// Replace the whole config
    pub fn config(mut self, config: CheckboxConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the ripple with a custom factory
    pub fn ripple_factory<F>(mut self, factory: F) -> Self
    where
        F: FnOnce(Rc<dyn RippleAdapter>) -> Box<dyn RippleEffect> + 'static,
    {
        self.ripple_factory = Some(Box::new(factory));
        self
    }

    /// Override the animation-end event name for this instance
    pub fn animation_end_event(mut self, event: impl Into<String>) -> Self {
        self.animation_end_event = Some(event.into());
        self
    }

    /// Construct the checkbox (not yet attached)
    pub fn build(self) -> Result<Checkbox> {
        Checkbox::from_builder(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristate_core::{ControlPrototype, Element};

    fn mount() -> (ElementRef, ElementRef, ElementRef) {
        let page = Element::new("body");
        let root = Element::with_classes("div", &["mdc-checkbox"]);
        let input = Element::input(ControlPrototype::standard());
        input.add_class("mdc-checkbox__native-control");
        root.append_child(input.clone());
        page.append_child(root.clone());
        (page, root, input)
    }

    #[test]
    fn test_missing_native_control() {
        let root = Element::new("div");
        root.append_child(Element::new("span"));
        let err = Checkbox::new(root).unwrap_err();
        assert!(matches!(
            err,
            CheckboxError::MissingNativeControl { ref selector }
                if selector == ".mdc-checkbox__native-control"
        ));
    }

    #[test]
    fn test_selector_on_non_input_is_missing() {
        let root = Element::new("div");
        root.append_child(Element::with_classes(
            "span",
            &["mdc-checkbox__native-control"],
        ));
        assert!(matches!(
            Checkbox::new(root),
            Err(CheckboxError::MissingNativeControl { .. })
        ));
    }

    #[test]
    fn test_construction_initializes_foundation() {
        let (_page, root, _input) = mount();
        let checkbox = Checkbox::new(root.clone()).unwrap();
        assert_eq!(checkbox.state(), LifecycleState::Constructed);
        assert!(root.has_class("mdc-checkbox--upgraded"));
        assert!(root.has_class("mdc-ripple-upgraded--unbounded"));
        assert_eq!(checkbox.committed(), Some(CheckState::default()));
    }

    #[test]
    fn test_not_attached_ignores_changes() {
        let (_page, root, input) = mount();
        let checkbox = Checkbox::new(root.clone()).unwrap();
        input.click();
        checkbox.set_checked(false);
        assert!(checkbox.current_transition().is_none());
    }

    #[test]
    fn test_state_snapshot_does_not_block_writes() {
        let (_page, root, _input) = mount();
        let checkbox = Checkbox::attach_to(root.clone()).unwrap();

        let before = checkbox.committed();
        let transition = checkbox.current_transition();
        checkbox.set_checked(true);
        assert_eq!(before, Some(CheckState::default()));
        assert!(transition.is_none());

        let record = checkbox.current_transition().unwrap();
        checkbox.set_indeterminate(true);
        checkbox.root().dispatch_event(&Event::new(checkbox.animation_end_event()));
        assert_eq!(record.to, TransitionState::Checked);
        assert_eq!(checkbox.committed(), Some(CheckState::new(true, true)));
        assert!(checkbox.current_transition().is_none());
    }

    #[test]
    fn test_drop_without_destroy_tears_down() {
        let (_page, root, input) = mount();
        let checkbox = Checkbox::attach_to(root.clone()).unwrap();
        assert_eq!(input.listener_count(event_types::CHANGE), 1);
        drop(checkbox);

        assert_eq!(input.listener_count(event_types::CHANGE), 0);
        assert_eq!(root.listener_count(event_types::ANIMATION_END), 0);
        assert_eq!(input.listener_count(event_types::POINTER_DOWN), 0);
        assert!(!root.has_class("mdc-ripple-upgraded--unbounded"));

        let control = input.control().unwrap();
        for property in tristate_core::INTERCEPTED_PROPERTIES {
            let own = control.own_descriptor(property).unwrap();
            let proto = control.prototype().descriptor(property).unwrap();
            assert!(own.same_as(&proto));
        }
        let classes = root.classes();
        control.set_checked(true);
        assert_eq!(root.classes(), classes);
    }

    #[test]
    fn test_attach_twice_fails() {
        let (_page, root, _input) = mount();
        let mut checkbox = Checkbox::attach_to(root).unwrap();
        assert!(matches!(
            checkbox.attach(),
            Err(CheckboxError::Lifecycle(_))
        ));
    }

    #[test]
    fn test_destroy_twice_fails() {
        let (_page, root, _input) = mount();
        let mut checkbox = Checkbox::attach_to(root).unwrap();
        checkbox.destroy().unwrap();
        assert_eq!(checkbox.state(), LifecycleState::Destroyed);
        assert!(checkbox.destroy().is_err());
    }

    #[test]
    fn test_value_and_disabled_accessors() {
        let (_page, root, input) = mount();
        let checkbox = Checkbox::attach_to(root.clone()).unwrap();
        checkbox.set_value("newsletter");
        assert_eq!(checkbox.value(), "newsletter");

        checkbox.set_disabled(true);
        assert!(checkbox.disabled());
        assert!(input.control().unwrap().disabled());
        assert!(root.has_class("mdc-checkbox--disabled"));
        assert!(!input.click());
    }

    #[test]
    fn test_animation_end_event_override() {
        let (_page, root, _input) = mount();
        let checkbox = Checkbox::builder(root.clone())
            .animation_end_event("webkitAnimationEnd")
            .build()
            .unwrap();
        assert_eq!(checkbox.animation_end_event(), "webkitAnimationEnd");

        let checkbox = Checkbox::builder(root)
            .config(CheckboxConfig::new().animation_end_event("customEnd"))
            .build()
            .unwrap();
        assert_eq!(checkbox.animation_end_event(), "customEnd");
    }

    #[test]
    fn test_custom_selector() {
        let page = Element::new("body");
        let root = Element::new("div");
        let input = Element::input(ControlPrototype::standard());
        input.add_class("my-input");
        root.append_child(input.clone());
        page.append_child(root.clone());

        let mut checkbox = Checkbox::builder(root)
            .config(CheckboxConfig::new().native_control_selector(".my-input"))
            .build()
            .unwrap();
        checkbox.attach().unwrap();
        assert!(Rc::ptr_eq(checkbox.native_control(), &input));
    }
}
