//! The resize/focus notification source the tracker subscribes to.
//!
//! Real hosts adapt their window system (a browser's resize events, a native
//! window's `WindowResized`) to [`ViewportSource`]; [`HeadlessViewport`]
//! serves tests and windowless hosts.

use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle for a listener registered on a [`ViewportSource`].
    pub struct ViewportListenerId;
}

/// Width-affecting events a source delivers to its listeners.
///
/// Both variants carry the width read at delivery time. Focus carries it too
/// because the viewport may have been resized while unfocused, without any
/// resize event reaching this source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportEvent {
    Resized(u32),
    FocusGained(u32),
}

impl ViewportEvent {
    pub fn width(self) -> u32 {
        match self {
            ViewportEvent::Resized(width) | ViewportEvent::FocusGained(width) => width,
        }
    }
}

pub type ViewportCallback = dyn Fn(ViewportEvent);

/// A single-threaded push source of viewport events.
///
/// Listeners run synchronously inside `set`-style calls on the source, so an
/// implementation must not hold internal borrows across delivery that a
/// listener could need.
pub trait ViewportSource {
    /// Current viewport width in pixels.
    fn width(&self) -> u32;

    fn add_listener(&mut self, callback: Rc<ViewportCallback>) -> ViewportListenerId;

    fn remove_listener(&mut self, id: ViewportListenerId);
}

/// A [`ViewportSource`] with no window behind it: the width is whatever the
/// test (or embedding host) says it is.
pub struct HeadlessViewport {
    width: u32,
    listeners: SlotMap<ViewportListenerId, Rc<ViewportCallback>>,
}

impl HeadlessViewport {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            listeners: SlotMap::with_key(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Change the width and deliver a resize to every listener.
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
        self.emit(ViewportEvent::Resized(width));
    }

    /// Deliver a focus-gained event carrying the current width.
    pub fn focus(&mut self) {
        self.emit(ViewportEvent::FocusGained(self.width));
    }

    /// A resize that arrived while unfocused: the width changes but nothing
    /// is delivered until [`focus`](Self::focus).
    pub fn set_width_unfocused(&mut self, width: u32) {
        self.width = width;
    }

    fn emit(&self, event: ViewportEvent) {
        // Clone out first; a listener may add or remove listeners.
        let listeners: Vec<Rc<ViewportCallback>> = self.listeners.values().cloned().collect();
        for listener in listeners {
            listener(event);
        }
    }
}

impl ViewportSource for HeadlessViewport {
    fn width(&self) -> u32 {
        self.width
    }

    fn add_listener(&mut self, callback: Rc<ViewportCallback>) -> ViewportListenerId {
        self.listeners.insert(callback)
    }

    fn remove_listener(&mut self, id: ViewportListenerId) {
        self.listeners.remove(id);
    }
}
