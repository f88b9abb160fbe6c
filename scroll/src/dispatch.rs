//! Scroll-signal dispatcher.
//!
//! The host owns one [`ScrollDispatcher`] and feeds it a [`ScrollFrame`] per
//! scroll or resize tick (or per animation frame when throttled). Observers
//! subscribe once and are invoked in subscription order; dropping interest is
//! an explicit [`ScrollDispatcher::unsubscribe`] with the returned id.
//!
//! Observers see a borrowed frame only. Nothing is retained between
//! dispatches, so skipping a tick never leaves an observer in a stale state
//! once the next frame arrives.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use crate::section::{Section, Viewport};

/// One scroll signal plus the section layout measured at the same moment.
#[derive(Debug, Clone, Copy)]
pub struct ScrollFrame<'a> {
    pub sections: &'a [Section],
    pub viewport: Viewport,
}

impl<'a> ScrollFrame<'a> {
    #[must_use]
    pub fn new(sections: &'a [Section], viewport: Viewport) -> Self {
        Self { sections, viewport }
    }
}

/// Something that reacts to scroll frames.
pub trait ScrollObserver {
    fn on_scroll(&mut self, frame: &ScrollFrame<'_>);
}

impl<F> ScrollObserver for F
where
    F: FnMut(&ScrollFrame<'_>),
{
    fn on_scroll(&mut self, frame: &ScrollFrame<'_>) {
        self(frame);
    }
}

/// Handle returned by [`ScrollDispatcher::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Fan-out of scroll frames to registered observers.
#[derive(Default)]
pub struct ScrollDispatcher {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn ScrollObserver>)>,
}

impl ScrollDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. It runs after every observer registered before it.
    pub fn subscribe(&mut self, observer: impl ScrollObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Deliver `frame` to every observer.
    pub fn dispatch(&mut self, frame: &ScrollFrame<'_>) {
        for (_, observer) in &mut self.observers {
            observer.on_scroll(frame);
        }
    }
}

impl std::fmt::Debug for ScrollDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollDispatcher")
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}
