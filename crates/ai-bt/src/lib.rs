//! Behavior tree runtime built on `ai-core`.
//!
//! Trees are walked depth-first, pre-order, with an explicit stack. The first
//! leaf whose every ancestor (and itself) evaluates to `true` becomes the current
//! node; [`TreeExecutor`] keeps executing it every tick until the shared context
//! asks for reevaluation.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod context;
pub mod error;
pub mod evade;
pub mod evaluator;
pub mod executor;
pub mod node;
pub mod tree;
pub mod validator;

pub use context::{TreeContext, TreeState};
pub use error::TreeError;
pub use evade::{evade_tree, EvadeContext, EvadeNode, MoveNode};
pub use evaluator::TreeEvaluator;
pub use executor::{ExecutorState, TreeExecutor};
pub use node::{FnNode, Node, RootNode};
pub use tree::{NodeId, Tree};
pub use validator::TreeValidator;
