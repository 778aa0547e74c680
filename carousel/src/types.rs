/// How an image is fitted into its cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentMode {
    /// Scale to fit inside the cell, preserving aspect ratio.
    #[default]
    AspectFit,
    /// Scale to cover the cell, preserving aspect ratio (may crop).
    AspectFill,
    /// Stretch to the cell bounds.
    Fill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const GRAY: Self = Self::rgba(0xff, 0xff, 0xff, 0x80);
    pub const PLACEHOLDER: Self = Self::rgb(0xe5, 0xe5, 0xea);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

/// Styling of the page dots and the "N/M" tracker label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageIndicatorStyle {
    pub current_color: Color,
    pub inactive_color: Color,
    pub label_text_color: Color,
    pub label_background: Color,
    /// Hide the dots when there is only one page.
    pub hides_for_single_page: bool,
    pub shows_tracker_label: bool,
}

impl Default for PageIndicatorStyle {
    fn default() -> Self {
        Self {
            current_color: Color::WHITE,
            inactive_color: Color::GRAY,
            label_text_color: Color::WHITE,
            label_background: Color::rgba(0, 0, 0, 0x66),
            hides_for_single_page: true,
            shows_tracker_label: true,
        }
    }
}

impl PageIndicatorStyle {
    pub fn dots_visible(&self, count: usize) -> bool {
        match count {
            0 => false,
            1 => !self.hides_for_single_page,
            _ => true,
        }
    }
}

/// Visual configuration handed to a carousel at construction time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselTheme {
    pub indicator: PageIndicatorStyle,
    pub content_mode: ContentMode,
    /// Placeholder fill shown while an image loads or after it failed.
    pub placeholder: Color,
}

/// Actions offered by the long-press context menu on an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContextMenuAction {
    /// Open the item in a detail presentation owned by the caller.
    Expand,
}

/// Notifications a carousel publishes to its owner. All indexes are logical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselEvent {
    PageChanged { page: usize, count: usize },
    ItemSelected { index: usize },
    ContextMenuRequested {
        index: usize,
        action: ContextMenuAction,
    },
}
