/// Logical page state of a carousel: how many items there are, which one is current, and
/// whether the carousel wraps around.
///
/// Loop mode is only ever active with two or more items. Requesting it with zero or one
/// item silently degrades to a plain (non-looping) carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageModel {
    count: usize,
    loop_enabled: bool,
    current: Option<usize>,
}

impl PageModel {
    pub fn configure(count: usize, requested_loop: bool) -> Self {
        let loop_enabled = requested_loop && count > 1;
        if requested_loop && !loop_enabled {
            cdebug!(count, "PageModel::configure: loop disabled for degenerate count");
        }
        Self {
            count,
            loop_enabled,
            current: if count > 0 { Some(0) } else { None },
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    /// The current logical page, or `None` for an empty carousel.
    pub fn current_page(&self) -> Option<usize> {
        self.current
    }

    /// Sets the current page, clamping out-of-range input to the last page.
    ///
    /// Returns the page actually stored. Does nothing on an empty model.
    pub fn set_current_page(&mut self, index: usize) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let page = index.min(self.count - 1);
        self.current = Some(page);
        self.current
    }

    /// Clamps a logical index into `[0, count - 1]`.
    pub fn clamp_page(&self, index: usize) -> Option<usize> {
        if self.count == 0 {
            None
        } else {
            Some(index.min(self.count - 1))
        }
    }
}
