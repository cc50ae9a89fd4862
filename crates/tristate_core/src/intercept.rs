//! Property interception
//!
//! Programmatic writes to a native control's `checked`/`indeterminate` never
//! dispatch `change`. [`PropertyInterceptor`] closes that gap by defining an
//! instance-level descriptor over the platform one:
//!
//! ```text
//! control.set_checked(v)
//!     ↓ wrapper setter (own descriptor)
//!     ↓ original platform setter      -> field updated
//!     ↓ notify()                      -> same path as a native `change`
//! ```
//!
//! Reads go straight through to the original getter. Properties whose
//! platform descriptor is missing or has no setter are left alone; writes to
//! them keep their native behavior but are not observed.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::control::{ControlProperty, NativeControl, PropertyDescriptor};

/// Properties the interceptor wraps
pub const INTERCEPTED_PROPERTIES: [ControlProperty; 2] =
    [ControlProperty::Checked, ControlProperty::Indeterminate];

/// Callback invoked after an intercepted write
pub type ChangeNotifier = Rc<dyn Fn()>;

/// Installs and restores setter wrappers on one native control
#[derive(Debug, Default)]
pub struct PropertyInterceptor {
    saved: SmallVec<[(ControlProperty, PropertyDescriptor); 2]>,
}

impl PropertyInterceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap every interceptable property of `control`
    ///
    /// Returns the number of properties wrapped.
    pub fn install(&mut self, control: &NativeControl, notify: ChangeNotifier) -> usize {
        let mut installed = 0;
        for property in INTERCEPTED_PROPERTIES {
            let Some((original, original_set)) =
                control.prototype().descriptor(property).and_then(|descriptor| {
                    let set = descriptor.set.clone()?;
                    Some((descriptor, set))
                })
            else {
                tracing::debug!(%property, "no settable descriptor, skipping interception");
                continue;
            };

            let original_get = original.get.clone();
            let notify = notify.clone();
            let wrapper = PropertyDescriptor {
                get: Rc::new(move |control: &NativeControl| original_get(control)),
                set: Some(Rc::new(move |control: &NativeControl, value: bool| {
                    original_set(control, value);
                    notify();
                })),
                configurable: original.configurable,
                enumerable: original.enumerable,
            };
            control.define_property(property, wrapper);

            if !self.is_installed(property) {
                self.saved.push((property, original));
            }
            installed += 1;
        }
        installed
    }

    /// Restore the saved descriptors verbatim
    ///
    /// Properties never installed are untouched. Returns the number restored.
    pub fn uninstall(&mut self, control: &NativeControl) -> usize {
        let restored = self.saved.len();
        for (property, original) in self.saved.drain(..) {
            control.define_property(property, original);
        }
        restored
    }

    /// Whether `property` is currently wrapped by this interceptor
    pub fn is_installed(&self, property: ControlProperty) -> bool {
        self.saved.iter().any(|(p, _)| *p == property)
    }
}
