//! A headless engine for looping image carousels.
//!
//! For the scroll-driven controller, tweens and image cell loading, see the
//! `carousel-adapter` crate.
//!
//! The engine makes a finite strip of pages look endless: the items are laid out three times
//! and the viewport is silently moved between copies whenever it leaves the middle one. This
//! crate holds the math and state for that illusion:
//!
//! - [`PageModel`]: item count, current page, loop flag
//! - [`TripleBufferLayout`]: physical ↔ logical index mapping
//! - [`correct_offset`]: keeps the viewport inside the middle replica
//! - [`PageIndicator`]: the single page number fed to dots and the "N/M" label
//! - [`AutoAdvanceTimer`]: pausable auto-advance schedule
//!
//! It is UI-agnostic. A UI layer is expected to provide scroll offsets (in page units) and the
//! current time, and to apply the offsets it gets back.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod corrector;
mod error;
mod indicator;
mod layout;
mod model;
mod options;
mod state;
mod timer;
mod types;

#[cfg(test)]
mod tests;

pub use corrector::{Correction, correct_offset, corrected, is_in_middle_band};
pub use error::CarouselError;
pub use indicator::{PageIndicator, PageIndicatorState, logical_page_for};
pub use layout::{LOOP_REPLICAS, PhysicalCell, TripleBufferLayout};
pub use model::PageModel;
pub use options::{CarouselOptions, OnEventCallback};
pub use state::ViewportState;
pub use timer::{AutoAdvanceConfig, AutoAdvanceTimer, TimerState};
pub use types::{
    CarouselEvent, CarouselTheme, Color, ContentMode, ContextMenuAction, PageIndicatorStyle,
};
