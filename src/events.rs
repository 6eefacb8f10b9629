//! Topic-keyed enter/exit notification registry.
//!
//! The tracker publishes through this narrow interface instead of inheriting
//! a general-purpose emitter. A listener subscribes to a [`Topic`]: either a
//! specific breakpoint's enter/exit, or the breakpoint-agnostic variant that
//! fires on every transition of that kind.

use std::rc::Rc;

use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

new_key_type! {
    /// Handle returned by [`subscribe`](crate::BreakpointTracker::subscribe),
    /// used to remove the listener again.
    pub struct SubscriptionId;
}

/// Which side of a bucket change a listener is interested in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    Enter,
    Exit,
}

/// A subscribable signal name: a transition kind plus an optional breakpoint.
///
/// `breakpoint: None` is the generic form that fires for every breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Topic {
    pub kind: Transition,
    pub breakpoint: Option<u32>,
}

impl Topic {
    pub fn enter(breakpoint: u32) -> Self {
        Self {
            kind: Transition::Enter,
            breakpoint: Some(breakpoint),
        }
    }

    pub fn exit(breakpoint: u32) -> Self {
        Self {
            kind: Transition::Exit,
            breakpoint: Some(breakpoint),
        }
    }

    pub fn any_enter() -> Self {
        Self {
            kind: Transition::Enter,
            breakpoint: None,
        }
    }

    pub fn any_exit() -> Self {
        Self {
            kind: Transition::Exit,
            breakpoint: None,
        }
    }
}

/// Callback invoked with the breakpoint value that entered or exited.
pub type TransitionCallback = dyn Fn(u32);

type ListenerList = SmallVec<[(SubscriptionId, Rc<TransitionCallback>); 2]>;

#[derive(Default)]
pub(crate) struct EventBus {
    subscriptions: SlotMap<SubscriptionId, Topic>,
    listeners: FxHashMap<Topic, ListenerList>,
}

impl EventBus {
    pub(crate) fn subscribe(
        &mut self,
        topic: Topic,
        callback: Rc<TransitionCallback>,
    ) -> SubscriptionId {
        let id = self.subscriptions.insert(topic);
        self.listeners.entry(topic).or_default().push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(topic) = self.subscriptions.remove(id) else {
            return false;
        };
        if let Some(list) = self.listeners.get_mut(&topic) {
            list.retain(|(listener, _)| *listener != id);
            if list.is_empty() {
                self.listeners.remove(&topic);
            }
        }
        true
    }

    /// Callbacks to run for a transition of `kind` at `breakpoint`: the
    /// breakpoint-specific topic's listeners first, then the generic
    /// topic's, each in registration order. Callbacks are cloned out so the
    /// caller can invoke them after releasing its borrows.
    pub(crate) fn callbacks_for(
        &self,
        kind: Transition,
        breakpoint: u32,
    ) -> SmallVec<[Rc<TransitionCallback>; 4]> {
        let mut callbacks = SmallVec::new();
        for topic in [
            Topic {
                kind,
                breakpoint: Some(breakpoint),
            },
            Topic {
                kind,
                breakpoint: None,
            },
        ] {
            if let Some(list) = self.listeners.get(&topic) {
                callbacks.extend(list.iter().map(|(_, callback)| callback.clone()));
            }
        }
        callbacks
    }
}
