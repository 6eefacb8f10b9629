//! Tracker configuration.

/// Breakpoints used when a configuration does not override them.
pub const DEFAULT_BREAKPOINTS: [u32; 5] = [320, 480, 768, 992, 1200];

/// Settings accepted by [`BreakpointTracker::configure`].
///
/// Every constructed value starts from a fresh copy of the defaults, so no
/// amount of building or later mutation can leak into another tracker's
/// configuration.
///
/// ```rust
/// use viewport_breakpoints::TrackerConfig;
///
/// let config = TrackerConfig::new()
///     .breakpoints([480, 960])
///     .class_body(false);
/// assert_eq!(config.breakpoints, vec![480, 960]);
/// ```
///
/// [`BreakpointTracker::configure`]: crate::BreakpointTracker::configure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Mirror the active breakpoint as a class on the injected class list.
    pub class_body: bool,
    /// Width thresholds in pixels. Normalized (sorted ascending, deduplicated,
    /// zeroes removed) when the tracker is configured.
    pub breakpoints: Vec<u32>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            class_body: true,
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
        }
    }
}

impl TrackerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn breakpoints(mut self, breakpoints: impl IntoIterator<Item = u32>) -> Self {
        self.breakpoints = breakpoints.into_iter().collect();
        self
    }

    #[must_use]
    pub fn class_body(mut self, class_body: bool) -> Self {
        self.class_body = class_body;
        self
    }
}
