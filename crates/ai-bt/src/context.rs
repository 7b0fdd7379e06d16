use std::time::Duration;

/// Bookkeeping every tree context carries.
///
/// `needs_reevaluation` starts `true` so the first tick always selects a leaf.
/// The executor only ever clears it; domain code sets it through
/// [`TreeContext::invalidate`] whenever an input that affects selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeState {
    elapsed: Duration,
    needs_reevaluation: bool,
}

impl Default for TreeState {
    fn default() -> Self {
        Self {
            elapsed: Duration::ZERO,
            needs_reevaluation: true,
        }
    }
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn needs_reevaluation(&self) -> bool {
        self.needs_reevaluation
    }

    pub fn invalidate(&mut self) {
        self.needs_reevaluation = true;
    }

    pub(crate) fn begin_evaluation(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    pub(crate) fn finish_evaluation(&mut self) {
        self.needs_reevaluation = false;
    }
}

/// Shared, mutable state handed to every node during a tick.
pub trait TreeContext {
    fn tree_state(&self) -> &TreeState;

    fn tree_state_mut(&mut self) -> &mut TreeState;

    /// Elapsed time stamped by the last reevaluation.
    fn elapsed(&self) -> Duration {
        self.tree_state().elapsed()
    }

    fn needs_reevaluation(&self) -> bool {
        self.tree_state().needs_reevaluation()
    }

    fn invalidate(&mut self) {
        self.tree_state_mut().invalidate();
    }
}

impl TreeContext for TreeState {
    fn tree_state(&self) -> &TreeState {
        self
    }

    fn tree_state_mut(&mut self) -> &mut TreeState {
        self
    }
}
