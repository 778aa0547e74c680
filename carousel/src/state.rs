/// A lightweight, serializable snapshot of where a carousel's viewport is.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. Restoring it on a
/// carousel with a different item count is allowed; the offset is corrected on restore.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    /// Physical scroll offset in page units.
    pub offset_pages: f64,
    pub is_scrolling: bool,
}
