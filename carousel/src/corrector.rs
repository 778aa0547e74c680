use crate::TripleBufferLayout;

/// A silent offset adjustment that moves the viewport by whole replicas.
///
/// `from` and `to` display the same logical page; only the physical coordinate differs.
/// Adapters must write `to` back to their scroll container without animation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Correction {
    pub from: f64,
    pub to: f64,
    /// Whole replicas moved; positive is forward (towards larger offsets).
    pub replicas: i64,
}

impl Correction {
    pub fn delta(&self) -> f64 {
        self.to - self.from
    }
}

/// Keeps a looping carousel's viewport inside the middle replica.
///
/// Offsets at or below `count - 1` (anywhere in the first replica, frame 0 included) move
/// forward by whole replicas; offsets at or above `2 * count` (the third replica, including
/// the last physical page) move backward by whole replicas. Offsets that lie outside the
/// content entirely are folded the same way, so any value lands inside
/// `(count - 1, 2 * count)`. Non-finite offsets land on the middle replica start.
///
/// Returns `None` when no correction is needed, which is always the case for non-looping
/// layouts. Applying the result again is a no-op.
pub fn correct_offset(layout: &TripleBufferLayout, offset: f64) -> Option<Correction> {
    if !layout.is_looped() {
        return None;
    }

    let n = layout.logical_count() as f64;
    if !offset.is_finite() {
        let to = layout.middle_replica_start() as f64;
        cwarn!(offset, to, "correct_offset: non-finite offset reset to middle replica");
        return Some(Correction {
            from: offset,
            to,
            replicas: 0,
        });
    }

    let lower = n - 1.0;
    let upper = 2.0 * n;
    let replicas = if offset <= lower {
        ((lower - offset) / n).floor() as i64 + 1
    } else if offset >= upper {
        -(((offset - upper) / n).floor() as i64 + 1)
    } else {
        return None;
    };

    let to = offset + replicas as f64 * n;
    ctrace!(from = offset, to, replicas, "correct_offset");
    Some(Correction {
        from: offset,
        to,
        replicas,
    })
}

/// Applies [`correct_offset`] and returns the resulting offset.
pub fn corrected(layout: &TripleBufferLayout, offset: f64) -> f64 {
    correct_offset(layout, offset).map_or(offset, |c| c.to)
}

/// Whether `offset` lies in the band a looping viewport is allowed to occupy.
pub fn is_in_middle_band(layout: &TripleBufferLayout, offset: f64) -> bool {
    if !layout.is_looped() {
        return offset.is_finite() && offset >= 0.0 && offset <= layout.max_offset();
    }
    let n = layout.logical_count() as f64;
    offset > n - 1.0 && offset < 2.0 * n
}
