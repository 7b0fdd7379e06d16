//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! Enable only what you need: `bt` for the behavior-tree runtime, `nav` for
//! adjacency graphs and shortest paths, `steering` for the reference wander,
//! flee and pursue strategies.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use ai_bt as bt;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use ai_nav as nav;

#[cfg(feature = "steering")]
#[cfg_attr(docsrs, doc(cfg(feature = "steering")))]
pub use ai_steering as steering;
