//! The CSP engine: constraint graph, trail-based undo, propagation, and the
//! backtracking search driver.

pub mod constraint;
pub mod domain;
pub mod engine;
pub mod heuristics;
pub mod network;
pub mod propagation;
pub mod stats;
pub mod trail;
pub mod variable;
pub mod work_list;
