use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

/// Where an element edge meets a viewport edge, both as fractions
/// (0 = top/start, 1 = bottom/end).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    pub target: f64,
    pub container: f64,
}

impl ScrollOffset {
    pub const START_END: Self = Self::new(0.0, 1.0);
    pub const START_START: Self = Self::new(0.0, 0.0);
    pub const END_START: Self = Self::new(1.0, 0.0);

    pub const fn new(target: f64, container: f64) -> Self {
        Self { target, container }
    }

    fn remaining_scroll(self, geometry: Geometry) -> f64 {
        geometry.top + self.target * geometry.height - self.container * geometry.viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub enter: ScrollOffset,
    pub exit: ScrollOffset,
}

impl ScrollRange {
    /// From the element's top touching the viewport bottom until its bottom
    /// leaves through the viewport top.
    pub const THROUGH_VIEWPORT: Self = Self {
        enter: ScrollOffset::START_END,
        exit: ScrollOffset::END_START,
    };

    /// For tall sections with a sticky child: starts once the top is pinned.
    pub const PINNED: Self = Self {
        enter: ScrollOffset::START_START,
        exit: ScrollOffset::END_START,
    };
}

/// Bounding box of the tracked element relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

pub fn progress(range: ScrollRange, geometry: Geometry) -> f64 {
    let until_enter = range.enter.remaining_scroll(geometry);
    let until_exit = range.exit.remaining_scroll(geometry);
    let travel = until_exit - until_enter;

    if !travel.is_finite() || travel <= 0.0 {
        return if until_enter > 0.0 { 0.0 } else { 1.0 };
    }

    (-until_enter / travel).clamp(0.0, 1.0)
}

type Observer = Rc<dyn Fn(f64)>;

struct SignalInner {
    value: Cell<f64>,
    disposed: Cell<bool>,
    next_id: Cell<u64>,
    observers: RefCell<Vec<(u64, Observer)>>,
}

/// Live progress value for one tracked element.
///
/// Observers all see the same value for a given publish, including when one of
/// them subscribes or unsubscribes while being notified.
#[derive(Clone)]
pub struct ProgressSignal {
    inner: Rc<SignalInner>,
}

impl Default for ProgressSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ProgressSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ProgressSignal {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(SignalInner {
                value: Cell::new(0.0),
                disposed: Cell::new(false),
                next_id: Cell::new(0),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> f64 {
        self.inner.value.get()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Returns whether observers were notified.
    pub fn publish(&self, value: f64) -> bool {
        if self.is_disposed() || value.is_nan() {
            return false;
        }

        let value = value.clamp(0.0, 1.0);
        if self.inner.value.replace(value) == value {
            return false;
        }

        let snapshot = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect::<Vec<_>>();

        for observer in snapshot {
            if self.is_disposed() {
                break;
            }
            observer(value);
        }

        true
    }

    pub fn subscribe(&self, observer: impl Fn(f64) + 'static) -> Subscription {
        if self.is_disposed() {
            return Subscription { signal: Weak::new(), id: 0 };
        }

        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));

        Subscription {
            signal: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn dispose(&self) {
        self.inner.disposed.set(true);
        self.inner.observers.borrow_mut().clear();
    }
}

/// Keeps an observer registered; dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    signal: Weak<SignalInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            inner
                .observers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Coalesces bursts of scroll/resize events into one measurement per frame.
#[derive(Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    /// True when the caller must schedule a frame.
    pub fn request(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn complete(&self) {
        self.pending.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer_count(signal: &ProgressSignal) -> usize {
        signal.inner.observers.borrow().len()
    }

    fn geometry(top: f64, height: f64) -> Geometry {
        Geometry {
            top,
            height,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn through_viewport_runs_from_entry_to_exit() {
        let range = ScrollRange::THROUGH_VIEWPORT;

        assert_eq!(progress(range, geometry(900.0, 400.0)), 0.0);
        assert_eq!(progress(range, geometry(800.0, 400.0)), 0.0);
        assert_eq!(progress(range, geometry(200.0, 400.0)), 0.5);
        assert_eq!(progress(range, geometry(-400.0, 400.0)), 1.0);
        assert_eq!(progress(range, geometry(-2_000.0, 400.0)), 1.0);
    }

    #[test]
    fn pinned_range_starts_when_top_reaches_viewport_top() {
        let range = ScrollRange::PINNED;

        assert_eq!(progress(range, geometry(100.0, 3_200.0)), 0.0);
        assert_eq!(progress(range, geometry(-800.0, 3_200.0)), 0.25);
        assert_eq!(progress(range, geometry(-3_200.0, 3_200.0)), 1.0);
    }

    #[test]
    fn zero_travel_snaps_to_the_nearest_end() {
        let range = ScrollRange {
            enter: ScrollOffset::START_START,
            exit: ScrollOffset::START_START,
        };

        assert_eq!(progress(range, geometry(10.0, 0.0)), 0.0);
        assert_eq!(progress(range, geometry(-10.0, 0.0)), 1.0);
    }

    #[test]
    fn publish_clamps_and_skips_repeats() {
        let signal = ProgressSignal::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _subscription = signal.subscribe(move |value| sink.borrow_mut().push(value));

        assert!(signal.publish(0.4));
        assert!(!signal.publish(0.4));
        assert!(signal.publish(7.0));
        assert!(!signal.publish(f64::NAN));

        assert_eq!(*seen.borrow(), vec![0.4, 1.0]);
    }

    #[test]
    fn every_observer_sees_the_same_value_in_one_publish() {
        let signal = ProgressSignal::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscriptions = Vec::new();

        for _ in 0..3 {
            let sink = seen.clone();
            subscriptions.push(signal.subscribe(move |value| sink.borrow_mut().push(value)));
        }

        signal.publish(0.3);

        assert_eq!(*seen.borrow(), vec![0.3, 0.3, 0.3]);
    }

    #[test]
    fn dropped_subscription_stops_receiving_updates() {
        let signal = ProgressSignal::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let subscription = signal.subscribe(move |_| counter.set(counter.get() + 1));

        signal.publish(0.1);
        drop(subscription);
        signal.publish(0.2);

        assert_eq!(calls.get(), 1);
        assert_eq!(observer_count(&signal), 0);
    }

    #[test]
    fn disposing_mid_scroll_silences_remaining_observers() {
        let signal = ProgressSignal::new();
        let calls = Rc::new(Cell::new(0));

        let disposer = signal.clone();
        let first_counter = calls.clone();
        let _first = signal.subscribe(move |value| {
            first_counter.set(first_counter.get() + 1);
            if value > 0.5 {
                disposer.dispose();
            }
        });
        let second_counter = calls.clone();
        let second = signal.subscribe(move |_| second_counter.set(second_counter.get() + 1));

        for step in 1..=10 {
            signal.publish(f64::from(step) / 10.0);
        }

        // 0.1..0.5 reach both observers, 0.6 only the one that disposes.
        assert_eq!(calls.get(), 11);
        assert!(signal.is_disposed());
        assert!(!signal.publish(0.05));

        drop(second);
        let _late = signal.subscribe(|_| panic!("disposed signals never notify"));
        signal.publish(0.9);
        assert_eq!(observer_count(&signal), 0);
    }

    #[test]
    fn frame_gate_schedules_once_per_burst() {
        let gate = FrameGate::default();

        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());

        gate.complete();

        assert!(gate.request());
    }
}
