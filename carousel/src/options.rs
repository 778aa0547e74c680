use std::sync::Arc;

use crate::{CarouselEvent, CarouselTheme, ContentMode, PageModel, TripleBufferLayout};

/// A callback fired for every [`CarouselEvent`] a carousel publishes.
pub type OnEventCallback = Arc<dyn Fn(&CarouselEvent) + Send + Sync>;

/// Configuration for a carousel.
///
/// Cheap to clone: the event callback is stored in an `Arc`, so adapters can tweak a field
/// and reconfigure without reallocating closures.
#[derive(Clone)]
pub struct CarouselOptions {
    /// Number of logical items (images or URLs).
    pub count: usize,
    /// Requests infinite scrolling. Ignored for fewer than two items.
    pub loop_enabled: bool,
    /// Logical page shown first. Clamped to the item range.
    pub initial_page: usize,
    pub theme: CarouselTheme,
    /// Duration of animated page changes (`goto_page(.., animated = true)`).
    pub page_animation_ms: u64,
    /// Cells kept alive on either side of the visible ones.
    pub overscan: usize,
    pub on_event: Option<OnEventCallback>,
}

impl std::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("loop_enabled", &self.loop_enabled)
            .field("initial_page", &self.initial_page)
            .field("theme", &self.theme)
            .field("page_animation_ms", &self.page_animation_ms)
            .field("overscan", &self.overscan)
            .field("on_event", &self.on_event.as_ref().map(|_| ".."))
            .finish()
    }
}

impl CarouselOptions {
    pub const DEFAULT_PAGE_ANIMATION_MS: u64 = 300;

    pub fn new(count: usize) -> Self {
        Self {
            count,
            loop_enabled: false,
            initial_page: 0,
            theme: CarouselTheme::default(),
            page_animation_ms: Self::DEFAULT_PAGE_ANIMATION_MS,
            overscan: 1,
            on_event: None,
        }
    }

    pub fn with_loop(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }

    pub fn with_initial_page(mut self, initial_page: usize) -> Self {
        self.initial_page = initial_page;
        self
    }

    pub fn with_theme(mut self, theme: CarouselTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_content_mode(mut self, content_mode: ContentMode) -> Self {
        self.theme.content_mode = content_mode;
        self
    }

    pub fn with_page_animation_ms(mut self, duration_ms: u64) -> Self {
        self.page_animation_ms = duration_ms;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_on_event(mut self, f: impl Fn(&CarouselEvent) + Send + Sync + 'static) -> Self {
        self.on_event = Some(Arc::new(f));
        self
    }

    /// Builds the page model these options describe (loop degraded when needed).
    pub fn page_model(&self) -> PageModel {
        let mut model = PageModel::configure(self.count, self.loop_enabled);
        model.set_current_page(self.initial_page);
        model
    }

    pub fn layout(&self) -> TripleBufferLayout {
        TripleBufferLayout::for_model(&self.page_model())
    }
}
