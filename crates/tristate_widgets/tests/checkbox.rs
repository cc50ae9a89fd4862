use std::cell::Cell;
use std::rc::Rc;

use tristate_core::{
    event_types, ControlPrototype, ControlProperty, Element, ElementRef, Event, PropertyExposure,
    INTERCEPTED_PROPERTIES,
};
use tristate_widgets::{
    CheckState, Checkbox, CheckboxClasses, RippleAdapter, RippleEffect, TransitionState,
};

struct Mounted {
    _page: ElementRef,
    root: ElementRef,
    input: ElementRef,
}

fn mount_with(prototype: Rc<ControlPrototype>) -> Mounted {
    let page = Element::new("body");
    let root = Element::with_classes("div", &["mdc-checkbox"]);
    let input = Element::input(prototype);
    input.add_class("mdc-checkbox__native-control");
    root.append_child(input.clone());
    page.append_child(root.clone());
    Mounted {
        _page: page,
        root,
        input,
    }
}

fn mount() -> Mounted {
    mount_with(ControlPrototype::standard())
}

fn animation_end(checkbox: &Checkbox) {
    checkbox
        .root()
        .dispatch_event(&Event::new(checkbox.animation_end_event()));
}

fn animation_classes(root: &ElementRef) -> Vec<String> {
    root.classes()
        .into_iter()
        .filter(|c| c.contains("--anim-"))
        .collect()
}

struct CountingRipple {
    destroyed: Rc<Cell<u32>>,
}

impl RippleEffect for CountingRipple {
    fn destroy(&mut self) {
        self.destroyed.set(self.destroyed.get() + 1);
    }

    fn is_unbounded(&self) -> bool {
        true
    }
}

#[test]
fn test_direct_assignment_animates_like_a_click() {
    let m = mount();
    let checkbox = Checkbox::attach_to(m.root.clone()).unwrap();
    let classes = CheckboxClasses::default();

    checkbox.set_checked(true);
    assert!(m.root.has_class(&classes.anim_unchecked_checked));

    animation_end(&checkbox);
    assert!(!m.root.has_class(&classes.anim_unchecked_checked));
    assert!(checkbox.checked());
}

#[test]
fn test_class_depends_only_on_state_pair() {
    let classes = CheckboxClasses::default();

    let clicked = mount();
    let by_click = Checkbox::attach_to(clicked.root.clone()).unwrap();
    clicked.input.click();
    let after_click = animation_classes(&clicked.root);
    animation_end(&by_click);

    let assigned = mount();
    let by_setter = Checkbox::attach_to(assigned.root.clone()).unwrap();
    by_setter.set_checked(true);
    let after_setter = animation_classes(&assigned.root);
    animation_end(&by_setter);

    assert_eq!(after_click, vec![classes.anim_unchecked_checked.clone()]);
    assert_eq!(after_click, after_setter);

    // Checked -> unchecked, through the opposite channels
    by_click.set_checked(false);
    assigned.input.click();
    assert_eq!(
        animation_classes(&clicked.root),
        animation_classes(&assigned.root)
    );
    assert_eq!(
        animation_classes(&clicked.root),
        vec![classes.anim_checked_unchecked.clone()]
    );
}

#[test]
fn test_change_without_state_change_is_idempotent() {
    let m = mount();
    let checkbox = Checkbox::attach_to(m.root.clone()).unwrap();
    let classes_before = m.root.classes();
    let reads_before = m.root.layout_reads();

    m.input.dispatch_event(&Event::new(event_types::CHANGE));
    checkbox.set_checked(false);

    assert_eq!(m.root.classes(), classes_before);
    assert_eq!(m.root.layout_reads(), reads_before);
}

#[test]
fn test_supersession() {
    let m = mount();
    let checkbox = Checkbox::attach_to(m.root.clone()).unwrap();
    let classes = CheckboxClasses::default();

    checkbox.set_checked(true);
    let reads = m.root.layout_reads();
    checkbox.set_indeterminate(true);

    assert!(!m.root.has_class(&classes.anim_unchecked_checked));
    assert!(m.root.has_class(&classes.anim_checked_indeterminate));
    assert_eq!(m.root.layout_reads(), reads + 1);

    animation_end(&checkbox);
    assert!(animation_classes(&m.root).is_empty());

    // A late end notification for the superseded animation is harmless
    animation_end(&checkbox);
    assert!(animation_classes(&m.root).is_empty());
}

#[test]
fn test_destroy_restores_native_descriptors() {
    let m = mount();
    let mut checkbox = Checkbox::attach_to(m.root.clone()).unwrap();
    checkbox.destroy().unwrap();

    let control = m.input.control().unwrap();
    for property in INTERCEPTED_PROPERTIES {
        let own = control.own_descriptor(property).unwrap();
        let proto = control.prototype().descriptor(property).unwrap();
        assert!(own.same_as(&proto), "{property} not restored");
    }

    let classes_before = m.root.classes();
    control.set_checked(true);
    assert!(control.checked());
    m.input.click();
    assert_eq!(m.root.classes(), classes_before);
    assert!(checkbox.current_transition().is_none());
}

#[test]
fn test_construct_then_destroy() {
    let m = mount();
    let destroyed = Rc::new(Cell::new(0));
    let counter = destroyed.clone();
    let mut checkbox = Checkbox::builder(m.root.clone())
        .ripple_factory(move |adapter: Rc<dyn RippleAdapter>| {
            assert!(adapter.is_unbounded());
            Box::new(CountingRipple { destroyed: counter }) as Box<dyn RippleEffect>
        })
        .build()
        .unwrap();

    checkbox.destroy().unwrap();
    assert_eq!(destroyed.get(), 1);
    assert_eq!(m.input.listener_count(event_types::CHANGE), 0);
    assert_eq!(m.root.listener_count(checkbox.animation_end_event()), 0);

    m.input.click();
    assert!(checkbox.current_transition().is_none());
    assert!(checkbox.destroy().is_err());
    assert_eq!(destroyed.get(), 1);
}

#[test]
fn test_destroy_after_attach_releases_everything() {
    let m = mount();
    let mut checkbox = Checkbox::attach_to(m.root.clone()).unwrap();
    assert_eq!(m.input.listener_count(event_types::CHANGE), 1);
    assert_eq!(m.root.listener_count(checkbox.animation_end_event()), 1);
    assert_eq!(m.input.listener_count(event_types::POINTER_DOWN), 1);

    checkbox.destroy().unwrap();
    assert_eq!(m.input.listener_count(event_types::CHANGE), 0);
    assert_eq!(m.root.listener_count(checkbox.animation_end_event()), 0);
    assert_eq!(m.input.listener_count(event_types::POINTER_DOWN), 0);
    assert!(!m.root.has_class("mdc-ripple-upgraded--unbounded"));
}

#[test]
fn test_indeterminate_round_trip_commits_final_state() {
    let m = mount();
    let checkbox = Checkbox::attach_to(m.root.clone()).unwrap();

    checkbox.set_indeterminate(true);
    checkbox.set_indeterminate(false);

    assert!(!checkbox.checked());
    assert!(!checkbox.indeterminate());
    assert_eq!(checkbox.committed(), Some(CheckState::new(false, false)));
    let record = checkbox.current_transition().unwrap();
    assert_eq!(record.from, TransitionState::Indeterminate);
    assert_eq!(record.to, TransitionState::Unchecked);
    assert_eq!(
        animation_classes(&m.root),
        vec![CheckboxClasses::default().anim_indeterminate_unchecked]
    );
}

#[test]
fn test_platform_without_indeterminate_setter() {
    let prototype = ControlPrototype::builder()
        .expose(ControlProperty::Indeterminate, PropertyExposure::GetterOnly)
        .build();
    let m = mount_with(prototype);
    let checkbox = Checkbox::attach_to(m.root.clone()).unwrap();
    let classes = CheckboxClasses::default();

    checkbox.set_indeterminate(true);
    assert!(checkbox.indeterminate());
    assert!(animation_classes(&m.root).is_empty());

    m.input.dispatch_event(&Event::new(event_types::CHANGE));
    assert_eq!(
        animation_classes(&m.root),
        vec![classes.anim_unchecked_indeterminate.clone()]
    );

    // `checked` is still intercepted on this platform
    animation_end(&checkbox);
    checkbox.set_indeterminate(false);
    checkbox.set_checked(true);
    assert_eq!(
        animation_classes(&m.root),
        vec![classes.anim_indeterminate_checked.clone()]
    );
}

#[test]
fn test_aria_checked_mirrors_indeterminate() {
    let m = mount();
    let checkbox = Checkbox::attach_to(m.root.clone()).unwrap();

    checkbox.set_indeterminate(true);
    assert_eq!(m.input.attribute("aria-checked").as_deref(), Some("mixed"));

    m.input.click();
    assert!(checkbox.checked());
    assert!(m.input.attribute("aria-checked").is_none());
}

#[test]
fn test_detached_root_does_not_animate() {
    let root = Element::with_classes("div", &["mdc-checkbox"]);
    let input = Element::input(ControlPrototype::standard());
    input.add_class("mdc-checkbox__native-control");
    root.append_child(input);

    let checkbox = Checkbox::attach_to(root.clone()).unwrap();
    checkbox.set_checked(true);
    assert!(animation_classes(&root).is_empty());
    assert_eq!(checkbox.committed(), Some(CheckState::new(true, false)));
}

#[test]
fn test_ripple_follows_press() {
    let m = mount();
    let _checkbox = Checkbox::attach_to(m.root.clone()).unwrap();

    m.input.press();
    assert!(m.root.has_class("mdc-ripple-upgraded--foreground-activation"));
    m.input.release();
    assert!(!m.root.has_class("mdc-ripple-upgraded--foreground-activation"));
    assert!(m.root.has_class("mdc-ripple-upgraded--foreground-deactivation"));
}

#[test]
fn test_prefixed_animation_end() {
    let m = mount();
    let checkbox = Checkbox::builder(m.root.clone())
        .animation_end_event(event_types::WEBKIT_ANIMATION_END)
        .build()
        .and_then(|mut c| c.attach().map(|_| c))
        .unwrap();

    checkbox.set_checked(true);
    m.root
        .dispatch_event(&Event::new(event_types::ANIMATION_END));
    assert_eq!(animation_classes(&m.root).len(), 1);

    m.root
        .dispatch_event(&Event::new(event_types::WEBKIT_ANIMATION_END));
    assert!(animation_classes(&m.root).is_empty());
}
