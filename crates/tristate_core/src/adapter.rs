//! Surface adapter
//!
//! The single effect boundary between widget logic and whatever renders it.
//! Widget foundations never touch elements directly; tests swap in a
//! recording implementation.
//!
//! Implementations are bound to their native control at construction, so
//! the control queries below cannot fail: a missing control is rejected
//! before an adapter exists.

use crate::control::ControlState;

/// Capabilities a selectable control's foundation needs from its surface
pub trait SurfaceAdapter {
    /// Add a class to the root
    fn add_class(&self, class: &str);

    /// Remove a class from the root
    fn remove_class(&self, class: &str);

    /// Force a synchronous layout read
    fn force_layout(&self);

    /// Whether the root is mounted
    fn is_attached_to_dom(&self) -> bool;

    /// Current native control fields
    fn native_control_state(&self) -> ControlState;

    fn set_native_control_checked(&self, checked: bool);

    fn set_native_control_indeterminate(&self, indeterminate: bool);

    fn set_native_control_disabled(&self, disabled: bool);

    fn set_native_control_value(&self, value: &str);

    /// Set an attribute on the native control
    fn set_native_control_attr(&self, attr: &str, value: &str);

    /// Remove an attribute from the native control
    fn remove_native_control_attr(&self, attr: &str);
}
