use std::time::Duration;

use tracing::{debug, trace};

use crate::{NodeId, Tree, TreeContext, TreeError, TreeEvaluator, TreeValidator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorState {
    /// No tree installed.
    Idle,
    /// The next `execute` call will walk the tree.
    PendingReevaluation,
    /// The current selection (possibly none) is reused every tick.
    Stable,
}

/// Drives a validated tree against its shared context once per host tick.
pub struct TreeExecutor<C> {
    tree: Option<Tree<C>>,
    context: C,
    evaluator: TreeEvaluator,
    validator: TreeValidator,
    evaluations: u64,
}

impl<C> TreeExecutor<C>
where
    C: TreeContext + 'static,
{
    pub fn new(context: C) -> Self {
        Self {
            tree: None,
            context,
            evaluator: TreeEvaluator::new(),
            validator: TreeValidator::new(),
            evaluations: 0,
        }
    }

    pub fn with_tree(context: C, tree: Tree<C>) -> Result<Self, TreeError> {
        let mut executor = Self::new(context);
        executor.set_tree(tree)?;
        Ok(executor)
    }

    /// Validate and install `tree`. On error the previous tree stays installed.
    ///
    /// A successful install drops the current selection; the context flag is
    /// left as is. Hosts swapping trees mid-run should call
    /// [`TreeContext::invalidate`] afterwards, otherwise nothing executes until
    /// the next invalidation.
    pub fn set_tree(&mut self, tree: Tree<C>) -> Result<(), TreeError> {
        self.validator.validate(&tree)?;
        debug!(nodes = tree.node_count(), "tree installed");
        self.tree = Some(tree);
        self.evaluator.clear();
        Ok(())
    }

    pub fn tree(&self) -> Option<&Tree<C>> {
        self.tree.as_ref()
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn current(&self) -> Option<NodeId> {
        self.evaluator.current()
    }

    /// How many times the tree has been walked.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn state(&self) -> ExecutorState {
        if self.tree.is_none() {
            ExecutorState::Idle
        } else if self.context.needs_reevaluation() {
            ExecutorState::PendingReevaluation
        } else {
            ExecutorState::Stable
        }
    }

    /// Run one tick.
    ///
    /// Reevaluates only when the context asks for it (stamping `elapsed` first),
    /// then executes the current leaf if there is one. Returns the executed leaf.
    pub fn execute(&mut self, elapsed: Duration) -> Option<NodeId> {
        let Some(tree) = self.tree.as_mut() else {
            trace!("execute called without a tree");
            return None;
        };

        if self.context.needs_reevaluation() {
            self.context.tree_state_mut().begin_evaluation(elapsed);
            let selected = self.evaluator.evaluate(&self.context, tree);
            self.evaluations += 1;
            self.context.tree_state_mut().finish_evaluation();
            debug!(
                selected = ?selected,
                current = ?self.evaluator.current(),
                evaluations = self.evaluations,
                "tree reevaluated"
            );
        }

        let current = self.evaluator.current()?;
        if let Some(node) = tree.node_mut(current) {
            node.execute(&mut self.context);
        }
        Some(current)
    }
}

impl<C> Default for TreeExecutor<C>
where
    C: TreeContext + Default + 'static,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}
