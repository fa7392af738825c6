//! Generation state machine
//!
//! A run moves `Start -> WroteFileA -> WroteFileB -> Done`, one step per
//! written fixture plus the final step. Failures are not a stage: they
//! propagate out of the run.

use crate::error::StageError;

/// Progress of one generator run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// Nothing written yet
    #[default]
    Start,
    /// First fixture on disk
    WroteFileA,
    /// Second fixture on disk
    WroteFileB,
    /// Run complete
    Done,
}

impl Stage {
    /// The single successor of this stage
    ///
    /// # Errors
    /// Returns [`StageError::Exhausted`] from [`Stage::Done`]
    pub fn next(self) -> Result<Self, StageError> {
        allowed_transitions(self)
            .first()
            .copied()
            .ok_or(StageError::Exhausted(self))
    }

    /// True once both fixtures have been written
    #[must_use]
    pub fn is_done(self) -> bool {
        self == Stage::Done
    }
}

/// Stages reachable from `from` in one step (empty for `Done`)
#[must_use]
pub fn allowed_transitions(from: Stage) -> &'static [Stage] {
    use Stage::*;
    match from {
        Start => &[WroteFileA],
        WroteFileA => &[WroteFileB],
        WroteFileB => &[Done],
        Done => &[],
    }
}
