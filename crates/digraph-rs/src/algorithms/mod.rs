pub mod cycle;
pub mod dfs;
pub mod topological_sort;

pub use cycle::HasCycle;
pub use dfs::{DfsVisitor, VisitState, depth_first};
pub use topological_sort::TopologicalSort;
