//! Element-tree bindings for the checkbox adapters

use std::rc::Rc;

use tristate_core::{
    ControlState, ElementRef, EventCallback, ListenerId, NativeControl, SurfaceAdapter,
};

use crate::ripple::RippleAdapter;

/// [`SurfaceAdapter`] over a checkbox root and its native control
#[derive(Debug, Clone)]
pub struct CheckboxSurface {
    root: ElementRef,
    native: ElementRef,
    control: Rc<NativeControl>,
}

impl CheckboxSurface {
    pub fn new(root: ElementRef, native: ElementRef, control: Rc<NativeControl>) -> Self {
        Self {
            root,
            native,
            control,
        }
    }
}

impl SurfaceAdapter for CheckboxSurface {
    fn add_class(&self, class: &str) {
        self.root.add_class(class);
    }

    fn remove_class(&self, class: &str) {
        self.root.remove_class(class);
    }

    fn force_layout(&self) {
        self.root.force_layout();
    }

    fn is_attached_to_dom(&self) -> bool {
        self.root.is_connected()
    }

    fn native_control_state(&self) -> ControlState {
        self.control.snapshot()
    }

    fn set_native_control_checked(&self, checked: bool) {
        self.control.set_checked(checked);
    }

    fn set_native_control_indeterminate(&self, indeterminate: bool) {
        self.control.set_indeterminate(indeterminate);
    }

    fn set_native_control_disabled(&self, disabled: bool) {
        self.control.set_disabled(disabled);
    }

    fn set_native_control_value(&self, value: &str) {
        self.control.set_value(value);
    }

    fn set_native_control_attr(&self, attr: &str, value: &str) {
        self.native.set_attribute(attr, value);
    }

    fn remove_native_control_attr(&self, attr: &str) {
        self.native.remove_attribute(attr);
    }
}

/// [`RippleAdapter`] for a checkbox: unbounded, listening on the native
/// control, active while the control matches `:active`
#[derive(Debug, Clone)]
pub struct CheckboxRippleSurface {
    root: ElementRef,
    native: ElementRef,
}

impl CheckboxRippleSurface {
    pub fn new(root: ElementRef, native: ElementRef) -> Self {
        Self { root, native }
    }
}

impl RippleAdapter for CheckboxRippleSurface {
    fn is_unbounded(&self) -> bool {
        true
    }

    fn is_surface_active(&self) -> bool {
        self.native.matches(":active")
    }

    fn register_interaction_handler(&self, event: &str, handler: EventCallback) -> ListenerId {
        self.native.add_event_listener(event, handler)
    }

    fn deregister_interaction_handler(&self, event: &str, id: ListenerId) {
        self.native.remove_event_listener(event, id);
    }

    fn add_class(&self, class: &str) {
        self.root.add_class(class);
    }

    fn remove_class(&self, class: &str) {
        self.root.remove_class(class);
    }
}
