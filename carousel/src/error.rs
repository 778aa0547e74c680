/// Reasons an engine component refused a request.
///
/// None of these are fatal. The adapter-level controller logs them and leaves the carousel in
/// its previous state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("auto-advance interval must be greater than zero")]
    InvalidInterval,
    #[error("auto-advance timer was stopped and must be recreated")]
    TimerStopped,
    #[error("carousel has {count} item(s), nothing to advance to")]
    NothingToAdvance { count: usize },
}
