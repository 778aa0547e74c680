use std::fmt;

use crate::TripleBufferLayout;

/// The logical page shown at `offset`.
///
/// In loop mode the offset is taken relative to the middle replica and wrapped into
/// `[0, count - 1]`, which matches the `physical mod count` mapping even while a drag
/// straddles a replica boundary. Without loop mode the rounded offset is clamped.
///
/// In loop mode the page is wrapped, not clamped: an offset half a page before the middle
/// replica reports the last page, not the first.
///
/// Returns `None` for an empty layout.
pub fn logical_page_for(layout: &TripleBufferLayout, offset: f64) -> Option<usize> {
    let count = layout.logical_count();
    if count == 0 {
        return None;
    }
    if !offset.is_finite() {
        return Some(0);
    }

    // Round half up so that shifting by whole replicas never changes the result.
    let relative = (offset - layout.middle_replica_start() as f64 + 0.5).floor() as i64;
    let page = if layout.is_looped() {
        relative.rem_euclid(count as i64)
    } else {
        relative.clamp(0, count as i64 - 1)
    };
    Some(page as usize)
}

/// What the page dots and the tracker label display.
///
/// Both widgets must be driven from the same value; `Display` renders the label text
/// ("2/5"), while [`Self::dot_index`] selects the highlighted dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageIndicatorState {
    /// 0-based logical page.
    pub page: usize,
    pub count: usize,
}

impl PageIndicatorState {
    pub fn dot_index(&self) -> usize {
        self.page
    }

    /// 1-based page number for the "N of M" label.
    pub fn page_number(&self) -> usize {
        self.page + 1
    }
}

impl fmt::Display for PageIndicatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.page_number(), self.count)
    }
}

/// Remembers the last published page so changes are reported once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageIndicator {
    state: Option<PageIndicatorState>,
}

impl PageIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<PageIndicatorState> {
        self.state
    }

    /// Recomputes the page for `offset`. Returns the new state only if it changed.
    pub fn sync(&mut self, layout: &TripleBufferLayout, offset: f64) -> Option<PageIndicatorState> {
        let next = logical_page_for(layout, offset).map(|page| PageIndicatorState {
            page,
            count: layout.logical_count(),
        });
        if next == self.state {
            return None;
        }
        self.state = next;
        next
    }
}
