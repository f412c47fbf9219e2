use thiserror::Error;

pub use types::{EdgeId, EdgeOrder, GraphConfig, VertexId};

pub mod algorithms;
pub mod builder;
pub mod graph;
pub mod types;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum GraphError {
    #[error("vertex {0} not found in graph")]
    VertexNotFound(usize),
    /// Raised at the first back edge `.0 -> .1` found by a depth-first walk.
    #[error("graph is not a DAG: back edge {0} -> {1}")]
    NotADag(VertexId, VertexId),
}

/// Operations shared by every vertex/edge store.
///
/// Vertices and edges can only be added. Identities handed out by a store stay
/// valid for its whole lifetime.
pub trait Graph: Default {
    fn num_vertices(&self) -> usize;

    fn num_edges(&self) -> usize;

    fn add_vertex(&mut self) -> VertexId;

    /// Adds the edge `u -> v`.
    ///
    /// Returns the edge and whether it was newly inserted. Adding a pair that
    /// already exists returns the existing edge and `false` and changes nothing.
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(EdgeId, bool)>;

    /// The `index`-th inserted vertex.
    fn vertex(&self, index: usize) -> Result<VertexId>;

    /// Looks up the edge `u -> v` without creating it.
    fn edge(&self, u: VertexId, v: VertexId) -> Option<EdgeId>;

    fn source(&self, edge: EdgeId) -> VertexId;

    fn target(&self, edge: EdgeId) -> VertexId;

    /// All vertices in insertion order.
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_;

    /// All edges, grouped by source vertex in vertex order.
    fn edges(&self) -> impl Iterator<Item = EdgeId> + '_;
}

pub trait DirectedGraph: Graph {
    /// Targets of the out-edges of `vertex`, in out-edge order.
    ///
    /// Must succeed for every vertex yielded by [Graph::vertices] and for
    /// every target it yields. The algorithms rely on this and treat a
    /// failed lookup as a vertex without out-edges.
    fn adjacent_vertices(&self, vertex: VertexId)
    -> Result<impl Iterator<Item = VertexId> + '_>;

    fn out_degree(&self, vertex: VertexId) -> Result<usize>;
}
