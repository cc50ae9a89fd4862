//! Native control model
//!
//! A [`NativeControl`] is the platform's selectable input. Its `checked` and
//! `indeterminate` fields are reached through [`PropertyDescriptor`]s:
//!
//! ```text
//! control.set_checked(v)
//!     ↓ own (instance) descriptor, if defined
//!     ↓ prototype descriptor, if the platform exposes one
//!     ↓ intrinsic field write
//! ```
//!
//! The [`ControlPrototype`] plays the role of the platform's class-level
//! descriptor table. Platforms that do not expose a settable descriptor for a
//! property are simulated with [`PropertyExposure::GetterOnly`] or
//! [`PropertyExposure::Hidden`]; writes then fall back to the intrinsic field,
//! so native behavior is preserved either way.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

/// The intercepted state properties of a native control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlProperty {
    Checked,
    Indeterminate,
}

impl ControlProperty {
    /// Property name as exposed by the platform
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for ControlProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of a native control's fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub checked: bool,
    pub indeterminate: bool,
    pub disabled: bool,
    pub value: String,
}

/// Property getter
pub type PropertyGetter = Rc<dyn Fn(&NativeControl) -> bool>;

/// Property setter
pub type PropertySetter = Rc<dyn Fn(&NativeControl, bool)>;

/// Accessor pair for one control property
///
/// Cloning shares the underlying getter/setter; [`same_as`](Self::same_as)
/// compares by identity.
#[derive(Clone)]
pub struct PropertyDescriptor {
    pub get: PropertyGetter,
    pub set: Option<PropertySetter>,
    pub configurable: bool,
    pub enumerable: bool,
}

impl PropertyDescriptor {
    /// Create a configurable, enumerable accessor descriptor
    pub fn accessor(get: PropertyGetter, set: Option<PropertySetter>) -> Self {
        Self {
            get,
            set,
            configurable: true,
            enumerable: true,
        }
    }

    /// Whether the descriptor carries a setter
    pub fn is_settable(&self) -> bool {
        self.set.is_some()
    }

    /// Identity comparison: same flags and the very same getter/setter
    pub fn same_as(&self, other: &Self) -> bool {
        let same_set = match (&self.set, &other.set) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        Rc::ptr_eq(&self.get, &other.get)
            && same_set
            && self.configurable == other.configurable
            && self.enumerable == other.enumerable
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("settable", &self.is_settable())
            .field("configurable", &self.configurable)
            .field("enumerable", &self.enumerable)
            .finish()
    }
}

/// How a platform exposes a control property on its prototype
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropertyExposure {
    /// Getter and setter are both exposed
    #[default]
    Settable,
    /// A descriptor exists but has no setter
    GetterOnly,
    /// No descriptor is exposed at all
    Hidden,
}

/// Class-level descriptor table shared by every control of a platform
#[derive(Debug, Default)]
pub struct ControlPrototype {
    descriptors: FxHashMap<ControlProperty, PropertyDescriptor>,
}

impl ControlPrototype {
    /// A prototype exposing settable descriptors for every property
    pub fn standard() -> Rc<Self> {
        Self::builder().build()
    }

    /// Start building a prototype with per-property exposure
    pub fn builder() -> ControlPrototypeBuilder {
        ControlPrototypeBuilder::default()
    }

    /// Look up the class-level descriptor for a property
    pub fn descriptor(&self, property: ControlProperty) -> Option<PropertyDescriptor> {
        self.descriptors.get(&property).cloned()
    }
}

/// Builder for [`ControlPrototype`]
#[derive(Debug, Default)]
pub struct ControlPrototypeBuilder {
    checked: PropertyExposure,
    indeterminate: PropertyExposure,
}

impl ControlPrototypeBuilder {
    /// Set how a property is exposed
    pub fn expose(mut self, property: ControlProperty, exposure: PropertyExposure) -> Self {
        match property {
            ControlProperty::Checked => self.checked = exposure,
            ControlProperty::Indeterminate => self.indeterminate = exposure,
        }
        self
    }

    /// Build the shared prototype
    pub fn build(self) -> Rc<ControlPrototype> {
        let mut descriptors = FxHashMap::default();
        for (property, exposure) in [
            (ControlProperty::Checked, self.checked),
            (ControlProperty::Indeterminate, self.indeterminate),
        ] {
            let get: PropertyGetter =
                Rc::new(move |control: &NativeControl| control.read_field(property));
            let set: PropertySetter = Rc::new(move |control: &NativeControl, value: bool| {
                control.write_field(property, value)
            });
            let descriptor = match exposure {
                PropertyExposure::Settable => PropertyDescriptor::accessor(get, Some(set)),
                PropertyExposure::GetterOnly => PropertyDescriptor::accessor(get, None),
                PropertyExposure::Hidden => continue,
            };
            descriptors.insert(property, descriptor);
        }
        Rc::new(ControlPrototype { descriptors })
    }
}

/// The platform's selectable input control
pub struct NativeControl {
    state: RefCell<ControlState>,
    prototype: Rc<ControlPrototype>,
    own: RefCell<FxHashMap<ControlProperty, PropertyDescriptor>>,
}

impl NativeControl {
    /// Create an unchecked control
    pub fn new(prototype: Rc<ControlPrototype>) -> Self {
        Self::with_state(prototype, ControlState::default())
    }

    /// Create a control with initial field values
    pub fn with_state(prototype: Rc<ControlPrototype>, state: ControlState) -> Self {
        Self {
            state: RefCell::new(state),
            prototype,
            own: RefCell::new(FxHashMap::default()),
        }
    }

    /// The class-level descriptor table
    pub fn prototype(&self) -> &Rc<ControlPrototype> {
        &self.prototype
    }

    /// Instance-level descriptor, if one was defined
    pub fn own_descriptor(&self, property: ControlProperty) -> Option<PropertyDescriptor> {
        self.own.borrow().get(&property).cloned()
    }

    /// Define (or replace) an instance-level descriptor
    pub fn define_property(&self, property: ControlProperty, descriptor: PropertyDescriptor) {
        self.own.borrow_mut().insert(property, descriptor);
    }

    fn resolve(&self, property: ControlProperty) -> Option<PropertyDescriptor> {
        self.own_descriptor(property)
            .or_else(|| self.prototype.descriptor(property))
    }

    /// Read a property through its descriptor chain
    pub fn get(&self, property: ControlProperty) -> bool {
        match self.resolve(property) {
            Some(descriptor) => (descriptor.get)(self),
            None => self.read_field(property),
        }
    }

    /// Write a property through its descriptor chain
    pub fn set(&self, property: ControlProperty, value: bool) {
        match self.resolve(property).and_then(|descriptor| descriptor.set) {
            Some(setter) => setter(self, value),
            None => self.write_field(property, value),
        }
    }

    pub fn checked(&self) -> bool {
        self.get(ControlProperty::Checked)
    }

    pub fn set_checked(&self, checked: bool) {
        self.set(ControlProperty::Checked, checked);
    }

    pub fn indeterminate(&self) -> bool {
        self.get(ControlProperty::Indeterminate)
    }

    pub fn set_indeterminate(&self, indeterminate: bool) {
        self.set(ControlProperty::Indeterminate, indeterminate);
    }

    pub fn disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    pub fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.state.borrow_mut().value = value.into();
    }

    /// Current field values, read through the descriptor chain
    pub fn snapshot(&self) -> ControlState {
        let checked = self.checked();
        let indeterminate = self.indeterminate();
        let state = self.state.borrow();
        ControlState {
            checked,
            indeterminate,
            disabled: state.disabled,
            value: state.value.clone(),
        }
    }

    /// Native activation: flips `checked` and clears `indeterminate` without
    /// going through any property setter.
    pub(crate) fn activate(&self) {
        let mut state = self.state.borrow_mut();
        state.checked = !state.checked;
        state.indeterminate = false;
    }

    fn read_field(&self, property: ControlProperty) -> bool {
        let state = self.state.borrow();
        match property {
            ControlProperty::Checked => state.checked,
            ControlProperty::Indeterminate => state.indeterminate,
        }
    }

    fn write_field(&self, property: ControlProperty, value: bool) {
        let mut state = self.state.borrow_mut();
        match property {
            ControlProperty::Checked => state.checked = value,
            ControlProperty::Indeterminate => state.indeterminate = value,
        }
    }
}

impl fmt::Debug for NativeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeControl")
            .field("state", &*self.state.borrow())
            .field("own_descriptors", &self.own.borrow().len())
            .finish()
    }
}
