use crate::PageModel;

/// Number of copies of the logical sequence laid out when loop mode is active.
pub const LOOP_REPLICAS: usize = 3;

/// A physical cell in the scroll content together with the logical item it displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalCell {
    pub physical_index: usize,
    pub logical_index: usize,
}

/// Maps the replicated (physical) scroll content onto the caller's items (logical pages).
///
/// In loop mode the logical sequence is laid out three times back to back and the viewport is
/// kept inside the middle copy, so there is always a full replica of content on either side
/// of it. Without loop mode there is a single replica and the mapping is the identity.
///
/// All offsets are expressed in whole-page units: offset `3.0` means the viewport shows
/// physical cell 3 exactly, `3.5` means it straddles cells 3 and 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripleBufferLayout {
    logical_count: usize,
    replica_count: usize,
}

impl TripleBufferLayout {
    /// Creates a looping layout. Counts below two degrade to [`Self::linear`].
    pub fn looped(logical_count: usize) -> Self {
        if logical_count <= 1 {
            return Self::linear(logical_count);
        }
        Self {
            logical_count,
            replica_count: LOOP_REPLICAS,
        }
    }

    pub fn linear(logical_count: usize) -> Self {
        Self {
            logical_count,
            replica_count: 1,
        }
    }

    pub fn for_model(model: &PageModel) -> Self {
        if model.loop_enabled() {
            Self::looped(model.count())
        } else {
            Self::linear(model.count())
        }
    }

    pub fn logical_count(&self) -> usize {
        self.logical_count
    }

    pub fn replica_count(&self) -> usize {
        self.replica_count
    }

    pub fn is_looped(&self) -> bool {
        self.replica_count == LOOP_REPLICAS
    }

    pub fn is_empty(&self) -> bool {
        self.logical_count == 0
    }

    pub fn physical_count(&self) -> usize {
        self.logical_count * self.replica_count
    }

    /// Physical index of logical page 0 inside the replica the viewport rests in.
    pub fn middle_replica_start(&self) -> usize {
        if self.is_looped() {
            self.logical_count
        } else {
            0
        }
    }

    /// Physical index of `logical` inside `replica` (0-based), or `None` if either is out of
    /// range for this layout.
    pub fn physical_index_of(&self, logical: usize, replica: usize) -> Option<usize> {
        if logical >= self.logical_count || replica >= self.replica_count {
            return None;
        }
        Some(replica * self.logical_count + logical)
    }

    /// Logical page displayed by a physical cell. Indexes past the content still follow the
    /// `physical mod count` mapping.
    pub fn logical_index_of(&self, physical: usize) -> Option<usize> {
        if self.logical_count == 0 {
            return None;
        }
        Some(physical % self.logical_count)
    }

    /// Which replica a physical index belongs to.
    pub fn replica_of(&self, physical: usize) -> Option<usize> {
        if physical >= self.physical_count() {
            return None;
        }
        Some(physical / self.logical_count)
    }

    /// Resting offset of `logical` inside the middle replica.
    pub fn middle_offset_of(&self, logical: usize) -> Option<f64> {
        if logical >= self.logical_count {
            return None;
        }
        Some((self.middle_replica_start() + logical) as f64)
    }

    /// Largest offset the scroll content can reach (the last physical page).
    pub fn max_offset(&self) -> f64 {
        self.physical_count().saturating_sub(1) as f64
    }

    /// Clamps an offset to the scrollable extent `[0, max_offset]`.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if !offset.is_finite() {
            return self.middle_replica_start() as f64;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Calls `f` for every physical cell intersecting a one-page viewport at `offset`, plus
    /// `overscan` cells on each side, in ascending physical order.
    pub fn for_each_visible_cell(
        &self,
        offset: f64,
        overscan: usize,
        mut f: impl FnMut(PhysicalCell),
    ) {
        let physical_count = self.physical_count();
        if physical_count == 0 || !offset.is_finite() {
            return;
        }
        let max = (physical_count - 1) as f64;
        let first = offset.floor().clamp(0.0, max) as usize;
        let last = offset.ceil().clamp(0.0, max) as usize;

        let start = first.saturating_sub(overscan);
        let end = last.saturating_add(overscan).min(physical_count - 1);
        for physical_index in start..=end {
            f(PhysicalCell {
                physical_index,
                logical_index: physical_index % self.logical_count,
            });
        }
    }

    pub fn visible_cells(&self, offset: f64, overscan: usize) -> Vec<PhysicalCell> {
        let mut out = Vec::new();
        self.for_each_visible_cell(offset, overscan, |cell| out.push(cell));
        out
    }
}
