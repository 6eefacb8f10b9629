//! Breakpoint sequences and bucket determination.

/// An ascending sequence of distinct, positive width breakpoints.
///
/// Construction normalizes whatever it is given: values are sorted,
/// duplicates collapsed, and zeroes dropped. Every other part of the crate
/// relies on this, so the raw `Vec` is never exposed mutably.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreakpointSet {
    values: Vec<u32>,
}

impl BreakpointSet {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        let mut values: Vec<u32> = values.into_iter().filter(|v| *v > 0).collect();
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn contains(&self, breakpoint: u32) -> bool {
        self.values.binary_search(&breakpoint).is_ok()
    }

    /// Returns the breakpoint whose bucket contains `width`, or `None` when
    /// no breakpoints are configured.
    ///
    /// Buckets are half-open intervals between consecutive breakpoints:
    /// everything at or below the smallest breakpoint belongs to the
    /// smallest, a width in `[b, next)` belongs to `b`, and the largest
    /// breakpoint absorbs every width above it.
    pub fn bucket_for(&self, width: u32) -> Option<u32> {
        for (i, &bp) in self.values.iter().enumerate() {
            if i == 0 && width <= bp {
                return Some(bp);
            }
            match self.values.get(i + 1) {
                None => return Some(bp),
                Some(&next) => {
                    if width >= bp && width < next {
                        return Some(bp);
                    }
                }
            }
        }
        None
    }
}
