//! The breakpoint tracker itself.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::breakpoints::BreakpointSet;
use crate::classes::{ClassList, breakpoint_class};
use crate::config::TrackerConfig;
use crate::events::{EventBus, SubscriptionId, Topic, Transition, TransitionCallback};
use crate::viewport::{ViewportCallback, ViewportListenerId, ViewportSource};

/// Tracks a viewport's width against configured breakpoints and publishes
/// enter/exit notifications when the active bucket changes.
///
/// A tracker is an explicit instance owned by its creator; several trackers
/// can watch the same source independently. State lives behind
/// `Rc<RefCell<_>>` because the viewport source delivers events through a
/// callback that must share it with the owning handle; everything stays on
/// one thread.
pub struct BreakpointTracker {
    inner: Rc<RefCell<TrackerInner>>,
    source: Rc<RefCell<dyn ViewportSource>>,
    classes: Rc<RefCell<dyn ClassList>>,
}

struct TrackerInner {
    config: TrackerConfig,
    breakpoints: BreakpointSet,
    /// Active breakpoint; `None` when unconfigured, reset, or no
    /// breakpoints are configured.
    active: Option<u32>,
    last_width: u32,
    bus: EventBus,
    listener: Option<ViewportListenerId>,
    /// Still registered on the source but logically removed: teardown ran
    /// while the source was mid-delivery, so the entry could not be taken
    /// out. Reclaimed by the next bind or unbind.
    parked_listener: Option<ViewportListenerId>,
    /// Cleared before the source entry is reclaimed; the registered
    /// callback checks it, so a parked entry delivers nothing.
    armed: bool,
}

impl BreakpointTracker {
    /// A tracker bound to a viewport source and a class list, inert until
    /// [`configure`](Self::configure) is called.
    pub fn new(
        source: Rc<RefCell<dyn ViewportSource>>,
        classes: Rc<RefCell<dyn ClassList>>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TrackerInner {
                config: TrackerConfig::default(),
                breakpoints: BreakpointSet::default(),
                active: None,
                last_width: 0,
                bus: EventBus::default(),
                listener: None,
                parked_listener: None,
                armed: false,
            })),
            source,
            classes,
        }
    }

    /// Apply `settings`, subscribe to the viewport source, and fire the
    /// initial enter for the bucket the current width falls into (there is
    /// no prior bucket, so no exit).
    ///
    /// Settings are normalized into a fresh configuration; the defaults in
    /// [`TrackerConfig::default`] are never touched. Configuring an
    /// already-configured tracker performs a [`reset`](Self::reset) first.
    pub fn configure(&self, settings: TrackerConfig) {
        if self.inner.borrow().armed {
            self.reset();
        }

        let breakpoints = BreakpointSet::new(settings.breakpoints.iter().copied());
        let width = match self.source.try_borrow() {
            Ok(source) => source.width(),
            // Reconfigured from inside a delivery callback: the delivery
            // that got us here already stored the freshest width.
            Err(_) => self.inner.borrow().last_width,
        };
        {
            let mut state = self.inner.borrow_mut();
            state.config = TrackerConfig {
                class_body: settings.class_body,
                breakpoints: breakpoints.values().to_vec(),
            };
            state.breakpoints = breakpoints;
            state.active = None;
            state.last_width = width;
        }

        self.bind();
        evaluate(&self.inner, &self.classes, width);
    }

    /// An independent copy of the current configuration, breakpoints in
    /// their normalized (ascending) order. Mutating the returned value has
    /// no effect on the tracker.
    pub fn config(&self) -> TrackerConfig {
        self.inner.borrow().config.clone()
    }

    /// The breakpoint whose bucket contains the last observed width.
    ///
    /// Recomputed from that width on every call rather than read from the
    /// cached active state, so it stays answerable after a reset.
    pub fn current(&self) -> Option<u32> {
        let state = self.inner.borrow();
        state.breakpoints.bucket_for(state.last_width)
    }

    /// Unsubscribe from the viewport source, fire exit for the active
    /// bucket (if any), and clear the active state.
    ///
    /// Calling `reset` on an already-reset tracker is a no-op, and calling
    /// it from inside a subscriber callback is safe: the source entry is
    /// silenced immediately and reclaimed once delivery finishes.
    pub fn reset(&self) {
        self.unbind();
        let (exit, class_body) = {
            let mut state = self.inner.borrow_mut();
            let previous = state.active.take();
            let exit = previous
                .filter(|bp| *bp > 0)
                .map(|bp| (bp, state.bus.callbacks_for(Transition::Exit, bp)));
            (exit, state.config.class_body)
        };
        if let Some((breakpoint, callbacks)) = exit {
            apply_transition(&self.classes, class_body, Transition::Exit, breakpoint, callbacks);
        }
    }

    /// Register `callback` for a topic. Subscriptions survive `reset` and
    /// reconfiguration; remove them with [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe(&self, topic: Topic, callback: impl Fn(u32) + 'static) -> SubscriptionId {
        self.inner.borrow_mut().bus.subscribe(topic, Rc::new(callback))
    }

    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().bus.unsubscribe(id)
    }

    fn bind(&self) {
        // A parked entry still holds this tracker's callback; reclaim it
        // instead of registering a second one. This is also what keeps
        // reconfiguration from inside a delivery callback working: the
        // source cannot be re-borrowed then, but the entry is already there.
        let reusable = self.inner.borrow_mut().parked_listener.take();
        let listener = match reusable {
            Some(id) => Some(id),
            None => {
                let inner = self.inner.clone();
                let classes = self.classes.clone();
                let callback: Rc<ViewportCallback> = Rc::new(move |event| {
                    if !inner.borrow().armed {
                        return;
                    }
                    evaluate(&inner, &classes, event.width());
                });
                self.source
                    .try_borrow_mut()
                    .map(|mut source| source.add_listener(callback))
                    .ok()
            }
        };
        let mut state = self.inner.borrow_mut();
        state.listener = listener;
        state.armed = true;
    }

    fn unbind(&self) {
        let (listener, parked) = {
            let mut state = self.inner.borrow_mut();
            state.armed = false;
            (state.listener.take(), state.parked_listener.take())
        };
        if listener.is_none() && parked.is_none() {
            return;
        }
        match self.source.try_borrow_mut() {
            Ok(mut source) => {
                for id in listener.into_iter().chain(parked) {
                    source.remove_listener(id);
                }
            }
            // Torn down from inside a delivery callback. Disarming above
            // already silenced the entry; park it until the source can be
            // borrowed again.
            Err(_) => self.inner.borrow_mut().parked_listener = listener.or(parked),
        }
    }
}

impl Drop for BreakpointTracker {
    fn drop(&mut self) {
        // Also breaks the source -> callback -> inner reference cycle.
        self.unbind();
    }
}

/// Re-evaluate against `width` and, when the bucket changed, fire
/// exit(old) then enter(new). Identical buckets are a strict no-op: no
/// notifications, no class churn.
fn evaluate(inner: &Rc<RefCell<TrackerInner>>, classes: &Rc<RefCell<dyn ClassList>>, width: u32) {
    let (exit, enter, class_body) = {
        let mut state = inner.borrow_mut();
        state.last_width = width;
        let next = state.breakpoints.bucket_for(width);
        if next == state.active {
            return;
        }
        let previous = state.active;
        state.active = next;
        let exit = previous
            .filter(|bp| *bp > 0)
            .map(|bp| (bp, state.bus.callbacks_for(Transition::Exit, bp)));
        let enter = next
            .filter(|bp| *bp > 0)
            .map(|bp| (bp, state.bus.callbacks_for(Transition::Enter, bp)));
        (exit, enter, state.config.class_body)
        // Borrow ends here; callbacks below may reenter the tracker.
    };
    if let Some((breakpoint, callbacks)) = exit {
        apply_transition(classes, class_body, Transition::Exit, breakpoint, callbacks);
    }
    if let Some((breakpoint, callbacks)) = enter {
        apply_transition(classes, class_body, Transition::Enter, breakpoint, callbacks);
    }
}

fn apply_transition(
    classes: &Rc<RefCell<dyn ClassList>>,
    class_body: bool,
    kind: Transition,
    breakpoint: u32,
    callbacks: SmallVec<[Rc<TransitionCallback>; 4]>,
) {
    if class_body {
        let class = breakpoint_class(breakpoint);
        let mut classes = classes.borrow_mut();
        match kind {
            Transition::Enter => classes.add_class(&class),
            Transition::Exit => classes.remove_class(&class),
        }
    }
    for callback in callbacks {
        callback(breakpoint);
    }
}
