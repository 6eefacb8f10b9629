//! # Viewport breakpoints
//!
//! Watches a viewport's width against an ascending sequence of breakpoints
//! and publishes enter/exit notifications whenever the active width bucket
//! changes, optionally mirroring the active bucket as a class (e.g.
//! `breakpoint-768`) on a host element.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use viewport_breakpoints::prelude::*;
//!
//! let viewport = Rc::new(RefCell::new(HeadlessViewport::new(600)));
//! let classes = Rc::new(RefCell::new(ClassSet::new()));
//!
//! let tracker = BreakpointTracker::new(viewport.clone(), classes.clone());
//! tracker.subscribe(Topic::any_enter(), |bp| println!("entered {bp}"));
//! tracker.configure(TrackerConfig::default());
//!
//! assert_eq!(tracker.current(), Some(480));
//! assert!(classes.borrow().contains("breakpoint-480"));
//!
//! viewport.borrow_mut().set_width(1300);
//! assert_eq!(tracker.current(), Some(1200));
//! assert!(classes.borrow().contains("breakpoint-1200"));
//! ```
//!
//! The pieces the tracker needs from its host are both traits:
//! [`ViewportSource`] delivers resize and focus events, and [`ClassList`]
//! applies the class toggling. [`HeadlessViewport`] and [`ClassSet`]
//! implement them without any real window, which is what the tests (and the
//! example above) run on.
//!
//! Resizes that land in the bucket already active produce no notifications
//! at all, so listeners never see a storm of events while a window edge is
//! dragged within one bucket.

pub mod breakpoints;
pub mod classes;
pub mod config;
pub mod events;
pub mod tracker;
pub mod viewport;

pub use breakpoints::BreakpointSet;
pub use classes::{CLASS_PREFIX, ClassList, ClassSet, breakpoint_class};
pub use config::{DEFAULT_BREAKPOINTS, TrackerConfig};
pub use events::{SubscriptionId, Topic, Transition, TransitionCallback};
pub use tracker::BreakpointTracker;
pub use viewport::{
    HeadlessViewport, ViewportCallback, ViewportEvent, ViewportListenerId, ViewportSource,
};

pub mod prelude {
    pub use crate::breakpoints::BreakpointSet;
    pub use crate::classes::{ClassList, ClassSet, breakpoint_class};
    pub use crate::config::TrackerConfig;
    pub use crate::events::{SubscriptionId, Topic, Transition};
    pub use crate::tracker::BreakpointTracker;
    pub use crate::viewport::{HeadlessViewport, ViewportEvent, ViewportSource};
}
