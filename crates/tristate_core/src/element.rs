//! In-memory render tree
//!
//! Elements are shared as [`ElementRef`] (`Rc<Element>`). Children are owned
//! by their parent; the parent link is weak, so dropping a root releases the
//! whole subtree.
//!
//! # Event flow
//!
//! ```text
//! dispatch_event(target)
//!     ↓ listeners registered on target for the event name
//!     ↓ (bubbling events) listeners on each ancestor, nearest first
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::{IndexMap, IndexSet};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::control::{ControlPrototype, ControlState, NativeControl};
use crate::events::{event_types, Event, EventCallback};

new_key_type! {
    /// Handle to a registered event listener
    pub struct ListenerId;
}

/// Shared element handle
pub type ElementRef = Rc<Element>;

struct Listener {
    event: String,
    callback: EventCallback,
}

/// A node of the render tree
pub struct Element {
    tag: String,
    classes: RefCell<IndexSet<String>>,
    attributes: RefCell<IndexMap<String, String>>,
    children: RefCell<Vec<ElementRef>>,
    parent: RefCell<Weak<Element>>,
    listeners: RefCell<SlotMap<ListenerId, Listener>>,
    active: Cell<bool>,
    layout_reads: Cell<u64>,
    control: Option<Rc<NativeControl>>,
}

impl Element {
    fn build(tag: &str, control: Option<Rc<NativeControl>>) -> ElementRef {
        Rc::new(Self {
            tag: tag.to_string(),
            classes: RefCell::new(IndexSet::new()),
            attributes: RefCell::new(IndexMap::new()),
            children: RefCell::new(Vec::new()),
            parent: RefCell::new(Weak::new()),
            listeners: RefCell::new(SlotMap::with_key()),
            active: Cell::new(false),
            layout_reads: Cell::new(0),
            control,
        })
    }

    /// Create a plain element
    pub fn new(tag: &str) -> ElementRef {
        Self::build(tag, None)
    }

    /// Create a plain element with classes
    pub fn with_classes(tag: &str, classes: &[&str]) -> ElementRef {
        let element = Self::new(tag);
        for class in classes {
            element.add_class(class);
        }
        element
    }

    /// Create an unchecked `input` element backed by a native control
    pub fn input(prototype: Rc<ControlPrototype>) -> ElementRef {
        Self::build("input", Some(Rc::new(NativeControl::new(prototype))))
    }

    /// Create an `input` element with initial control state
    pub fn input_with_state(prototype: Rc<ControlPrototype>, state: ControlState) -> ElementRef {
        Self::build(
            "input",
            Some(Rc::new(NativeControl::with_state(prototype, state))),
        )
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The native control, for `input` elements
    pub fn control(&self) -> Option<&Rc<NativeControl>> {
        self.control.as_ref()
    }

    // =========================================================================
    // Classes and attributes
    // =========================================================================

    pub fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    pub fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().shift_remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    /// Classes in insertion order
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&self, name: &str) {
        self.attributes.borrow_mut().shift_remove(name);
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    // =========================================================================
    // Tree structure
    // =========================================================================

    /// Append a child, detaching it from any previous parent
    pub fn append_child(self: &Rc<Self>, child: ElementRef) {
        child.detach();
        *child.parent.borrow_mut() = Rc::downgrade(self);
        self.children.borrow_mut().push(child);
    }

    /// Remove this element from its parent
    pub fn detach(&self) {
        let parent = self.parent.replace(Weak::new());
        if let Some(parent) = parent.upgrade() {
            parent
                .children
                .borrow_mut()
                .retain(|c| !std::ptr::eq(Rc::as_ptr(c), self));
        }
    }

    pub fn parent(&self) -> Option<ElementRef> {
        self.parent.borrow().upgrade()
    }

    pub fn children(&self) -> Vec<ElementRef> {
        self.children.borrow().clone()
    }

    /// Whether the element is mounted under a parent
    pub fn is_connected(&self) -> bool {
        self.parent().is_some()
    }

    /// Whether the element matches a simple selector
    ///
    /// Supported forms: `.class`, `:active` and a bare tag name.
    pub fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.has_class(class)
        } else if selector == ":active" {
            self.is_active()
        } else {
            self.tag == selector
        }
    }

    /// First descendant (depth-first, document order) matching `selector`
    pub fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        for child in self.children.borrow().iter() {
            if child.matches(selector) {
                return Some(child.clone());
            }
            if let Some(found) = child.query_selector(selector) {
                return Some(found);
            }
        }
        None
    }

    // =========================================================================
    // Layout and pseudo-state
    // =========================================================================

    /// Synchronous layout read; restarts CSS animations on re-applied classes
    pub fn force_layout(&self) {
        self.layout_reads.set(self.layout_reads.get() + 1);
    }

    /// Number of forced layout reads so far
    pub fn layout_reads(&self) -> u64 {
        self.layout_reads.get()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn set_active(&self, active: bool) {
        self.active.set(active);
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Register a listener for an event name
    pub fn add_event_listener(&self, event: &str, callback: EventCallback) -> ListenerId {
        self.listeners.borrow_mut().insert(Listener {
            event: event.to_string(),
            callback,
        })
    }

    /// Remove a listener; returns false if it was not registered for `event`
    pub fn remove_event_listener(&self, event: &str, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.get(id) {
            Some(listener) if listener.event == event => {
                listeners.remove(id);
                true
            }
            _ => false,
        }
    }

    /// Number of listeners registered for an event name
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .borrow()
            .values()
            .filter(|l| l.event == event)
            .count()
    }

    fn callbacks_for(&self, event: &str) -> SmallVec<[EventCallback; 4]> {
        self.listeners
            .borrow()
            .values()
            .filter(|l| l.event == event)
            .map(|l| l.callback.clone())
            .collect()
    }

    /// Deliver an event to this element and, if it bubbles, its ancestors
    ///
    /// Returns the number of callbacks invoked.
    pub fn dispatch_event(self: &Rc<Self>, event: &Event) -> usize {
        let mut invoked = 0;
        let mut current = Some(self.clone());
        while let Some(element) = current {
            // Snapshot first so callbacks may add or remove listeners
            for callback in element.callbacks_for(event.name()) {
                callback(event);
                invoked += 1;
            }
            if !event.bubbles() {
                break;
            }
            current = element.parent();
        }
        invoked
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    /// Native activation of an input: toggles `checked`, clears
    /// `indeterminate`, then dispatches `change`.
    ///
    /// Returns false for non-inputs and disabled controls.
    pub fn click(self: &Rc<Self>) -> bool {
        let Some(control) = self.control.as_ref() else {
            return false;
        };
        if control.disabled() {
            return false;
        }
        control.activate();
        self.dispatch_event(&Event::new(event_types::CHANGE));
        true
    }

    /// Pointer pressed on the element
    pub fn press(self: &Rc<Self>) {
        self.set_active(true);
        self.dispatch_event(&Event::new(event_types::POINTER_DOWN));
    }

    /// Pointer released on the element
    pub fn release(self: &Rc<Self>) {
        self.set_active(false);
        self.dispatch_event(&Event::new(event_types::POINTER_UP));
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("classes", &*self.classes.borrow())
            .field("attributes", &*self.attributes.borrow())
            .field("children", &self.children.borrow().len())
            .field("listeners", &self.listeners.borrow().len())
            .field("control", &self.control)
            .finish()
    }
}
