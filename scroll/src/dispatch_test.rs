#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder(log: &Rc<RefCell<Vec<(&'static str, f64)>>>, name: &'static str) -> impl FnMut(&ScrollFrame<'_>) + 'static {
    let log = Rc::clone(log);
    move |frame: &ScrollFrame<'_>| log.borrow_mut().push((name, frame.viewport.scroll_y))
}

#[test]
fn new_dispatcher_has_no_observers() {
    let mut dispatcher = ScrollDispatcher::new();
    dispatcher.dispatch(&ScrollFrame::new(&[], Viewport::default()));
    assert!(format!("{dispatcher:?}").contains("observers: 0"));
}

#[test]
fn dispatch_reaches_observers_in_subscription_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = ScrollDispatcher::new();
    dispatcher.subscribe(recorder(&log, "first"));
    dispatcher.subscribe(recorder(&log, "second"));

    dispatcher.dispatch(&ScrollFrame::new(&[], Viewport::new(120.0, 800.0)));

    assert_eq!(*log.borrow(), [("first", 120.0), ("second", 120.0)]);
}

#[test]
fn unsubscribe_stops_delivery() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = ScrollDispatcher::new();
    let first = dispatcher.subscribe(recorder(&log, "first"));
    dispatcher.subscribe(recorder(&log, "second"));

    assert!(dispatcher.unsubscribe(first));
    dispatcher.dispatch(&ScrollFrame::new(&[], Viewport::new(5.0, 800.0)));

    assert_eq!(*log.borrow(), [("second", 5.0)]);
    assert!(format!("{dispatcher:?}").contains("observers: 1"));
}

#[test]
fn unsubscribe_twice_reports_missing() {
    let mut dispatcher = ScrollDispatcher::new();
    let id = dispatcher.subscribe(|_: &ScrollFrame<'_>| {});
    assert!(dispatcher.unsubscribe(id));
    assert!(!dispatcher.unsubscribe(id));
}

#[test]
fn subscription_ids_are_not_reused() {
    let mut dispatcher = ScrollDispatcher::new();
    let a = dispatcher.subscribe(|_: &ScrollFrame<'_>| {});
    dispatcher.unsubscribe(a);
    let b = dispatcher.subscribe(|_: &ScrollFrame<'_>| {});
    assert_ne!(a, b);
}

#[test]
fn observers_see_the_frame_sections() {
    let seen = Rc::new(RefCell::new(0_usize));
    let mut dispatcher = ScrollDispatcher::new();
    let counter = Rc::clone(&seen);
    dispatcher.subscribe(move |frame: &ScrollFrame<'_>| *counter.borrow_mut() = frame.sections.len());

    let sections = [Section::new("home", 0.0, 100.0), Section::new("about", 100.0, 100.0)];
    dispatcher.dispatch(&ScrollFrame::new(&sections, Viewport::default()));

    assert_eq!(*seen.borrow(), 2);
}

#[test]
fn debug_output_counts_observers() {
    let mut dispatcher = ScrollDispatcher::new();
    dispatcher.subscribe(|_: &ScrollFrame<'_>| {});
    let s = format!("{dispatcher:?}");
    assert!(s.contains("observers: 1"));
}
