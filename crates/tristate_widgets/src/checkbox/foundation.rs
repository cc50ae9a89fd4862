//! Checkbox transition foundation
//!
//! Platform-independent logic deciding which animation class the root carries.
//! It is a diff machine over the native control's `(checked, indeterminate)`
//! pair rather than an enumerated state table:
//!
//! ```text
//! handle_change
//!     ↓ read pair from the adapter
//!     ↓ unchanged? stop (no class change, no layout read)
//!     ↓ map (last committed, current) to an animation class
//!     ↓ remove in-flight class, force layout, add new class
//!     ↓ commit pair
//! handle_animation_end
//!     ↓ remove in-flight class
//! ```
//!
//! At most one animation class is applied at a time. A change arriving before
//! the previous animation ends supersedes it.

use std::cell::RefCell;
use std::rc::Rc;

use tristate_core::{ControlState, SurfaceAdapter};

use super::config::{CheckboxClasses, CheckboxStrings};

/// Foundation shared between the facade and its event handlers
pub type SharedFoundation = Rc<RefCell<CheckboxFoundation>>;

/// The native control's `(checked, indeterminate)` pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CheckState {
    pub checked: bool,
    pub indeterminate: bool,
}

impl CheckState {
    pub fn new(checked: bool, indeterminate: bool) -> Self {
        Self {
            checked,
            indeterminate,
        }
    }
}

impl From<&ControlState> for CheckState {
    fn from(state: &ControlState) -> Self {
        Self::new(state.checked, state.indeterminate)
    }
}

/// Visual state derived from a [`CheckState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionState {
    /// Nothing committed yet
    Init,
    Unchecked,
    Checked,
    Indeterminate,
}

impl TransitionState {
    /// Indeterminate takes precedence over checked
    pub fn of(state: CheckState) -> Self {
        if state.indeterminate {
            Self::Indeterminate
        } else if state.checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }

    fn of_committed(committed: Option<CheckState>) -> Self {
        committed.map_or(Self::Init, Self::of)
    }
}

/// Animation class for a visual transition, if it animates
pub fn transition_class(
    from: TransitionState,
    to: TransitionState,
    classes: &CheckboxClasses,
) -> Option<&str> {
    use TransitionState::*;

    let class = match (from, to) {
        (_, Init) | (Init, Unchecked) => return None,
        (Init | Unchecked, Checked) => &classes.anim_unchecked_checked,
        (Init | Unchecked, Indeterminate) => &classes.anim_unchecked_indeterminate,
        (Checked, Unchecked) => &classes.anim_checked_unchecked,
        (Checked, Indeterminate) => &classes.anim_checked_indeterminate,
        (Indeterminate, Checked) => &classes.anim_indeterminate_checked,
        (Indeterminate, Unchecked) => &classes.anim_indeterminate_unchecked,
        // Same-state pairs were handled above
        (Unchecked, Unchecked) | (Checked, Checked) | (Indeterminate, Indeterminate) => {
            return None
        }
    };
    Some(class.as_str())
}

/// One detected change and the class it applied
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionRecord {
    pub from: TransitionState,
    pub to: TransitionState,
    /// Class currently on the root for this transition
    pub animation_class: Option<String>,
}

/// Checkbox transition state machine
pub struct CheckboxFoundation {
    adapter: Box<dyn SurfaceAdapter>,
    classes: CheckboxClasses,
    strings: CheckboxStrings,
    committed: Option<CheckState>,
    in_flight: Option<TransitionRecord>,
}

impl CheckboxFoundation {
    pub fn new(
        adapter: Box<dyn SurfaceAdapter>,
        classes: CheckboxClasses,
        strings: CheckboxStrings,
    ) -> Self {
        Self {
            adapter,
            classes,
            strings,
            committed: None,
            in_flight: None,
        }
    }

    /// Commit the native control's current pair as the baseline
    pub fn init(&mut self) {
        let state = CheckState::from(&self.adapter.native_control_state());
        self.committed = Some(state);
        self.adapter.add_class(&self.classes.upgraded);
        self.sync_aria_checked(state);
        tracing::debug!(?state, "checkbox foundation initialized");
    }

    /// Drop any in-flight animation class
    pub fn destroy(&mut self) {
        if let Some(class) = self.in_flight.take().and_then(|r| r.animation_class) {
            self.adapter.remove_class(&class);
        }
    }

    /// Last committed pair (`None` before [`init`](Self::init))
    pub fn committed(&self) -> Option<CheckState> {
        self.committed
    }

    /// The transition whose class is currently applied
    pub fn current_transition(&self) -> Option<&TransitionRecord> {
        self.in_flight.as_ref()
    }

    /// Class currently applied to the root, if any
    pub fn current_animation_class(&self) -> Option<&str> {
        self.in_flight
            .as_ref()
            .and_then(|r| r.animation_class.as_deref())
    }

    /// A state-change notification from any channel
    pub fn handle_change(&mut self) {
        let state = CheckState::from(&self.adapter.native_control_state());
        if self.committed == Some(state) {
            tracing::trace!(?state, "change without state change");
            return;
        }

        let from = TransitionState::of_committed(self.committed);
        let to = TransitionState::of(state);
        self.committed = Some(state);
        self.sync_aria_checked(state);

        let Some(class) = transition_class(from, to, &self.classes).map(str::to_string) else {
            tracing::trace!(?from, ?to, "transition does not animate");
            return;
        };

        if let Some(previous) = self.in_flight.take().and_then(|r| r.animation_class) {
            self.adapter.remove_class(&previous);
            // Restart the animation even if the same class comes back
            self.adapter.force_layout();
        }

        let applied = if self.adapter.is_attached_to_dom() {
            self.adapter.add_class(&class);
            Some(class)
        } else {
            None
        };
        tracing::trace!(?from, ?to, class = ?applied, "checkbox transition");
        self.in_flight = Some(TransitionRecord {
            from,
            to,
            animation_class: applied,
        });
    }

    /// An animation-end notification: clears whatever class is applied
    pub fn handle_animation_end(&mut self) {
        if let Some(class) = self.in_flight.take().and_then(|r| r.animation_class) {
            self.adapter.remove_class(&class);
        }
    }

    /// Set the native control's disabled flag
    pub fn set_disabled(&mut self, disabled: bool) {
        self.adapter.set_native_control_disabled(disabled);
        if disabled {
            self.adapter.add_class(&self.classes.disabled);
        } else {
            self.adapter.remove_class(&self.classes.disabled);
        }
    }

    fn sync_aria_checked(&self, state: CheckState) {
        if state.indeterminate {
            self.adapter.set_native_control_attr(
                &self.strings.aria_checked_attr,
                &self.strings.aria_checked_indeterminate_value,
            );
        } else {
            self.adapter
                .remove_native_control_attr(&self.strings.aria_checked_attr);
        }
    }
}

impl std::fmt::Debug for CheckboxFoundation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckboxFoundation")
            .field("committed", &self.committed)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}
