//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate holds the layout math and state. This crate provides the
//! framework-neutral pieces an adapter needs to drive a real scroll container:
//!
//! - [`CarouselController`]: scroll events, page commands, auto-advance, events
//! - Tween-based page animations (adapter-driven)
//! - Per-item image loading state for remote sources ([`ImageCells`], [`ImageCarousel`])
//!
//! This crate is framework-agnostic (no UIKit/egui/ratatui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod cells;
mod controller;
mod image_carousel;
mod tween;


pub use cells::{CellState, ImageCells, ImageSources, LoadError, LoadRequest, RequestId};
pub use controller::{CarouselController, Phase};
pub use image_carousel::ImageCarousel;
pub use tween::{Easing, Tween};
