use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::{
    DirectedGraph, EdgeId, EdgeOrder, Graph, GraphConfig, GraphError, Result, VertexId,
    graph::cursor::{AdjacencyCursor, Cursor, EdgeCursor, VertexCursor, Walk},
};

/// Sparse directed graph stored as one out-edge list per vertex.
///
/// Vertices are numbered in creation order. Every ordered pair `(u, v)` is
/// stored at most once; `edge_index` maps it to its [EdgeId].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyList {
    config: GraphConfig,
    out_edges: Vec<Vec<EdgeId>>,
    edge_index: FxHashMap<(VertexId, VertexId), EdgeId>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            out_edges: Vec::with_capacity(vertices),
            ..Self::default()
        }
    }

    pub fn config(&self) -> GraphConfig {
        self.config
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.out_edges.len()
    }

    /// `(begin, end)` markers of the vertex sequence.
    pub fn vertex_markers(&self) -> (VertexCursor, VertexCursor) {
        (VertexCursor::new(0), VertexCursor::new(self.num_vertices()))
    }

    /// `(begin, end)` markers of the edge sequence.
    pub fn edge_markers(&self) -> (EdgeCursor, EdgeCursor) {
        (EdgeCursor::begin(self), EdgeCursor::end(self))
    }

    /// `(begin, end)` markers of the out-neighbours of `vertex`.
    pub fn adjacency_markers(
        &self,
        vertex: VertexId,
    ) -> Result<(AdjacencyCursor, AdjacencyCursor)> {
        let degree = self.out_degree(vertex)?;
        Ok((
            AdjacencyCursor::new(vertex, 0),
            AdjacencyCursor::new(vertex, degree),
        ))
    }

    /// Out-edges of the vertex at `index`, empty for unknown vertices.
    pub(crate) fn out_edge_list(&self, index: usize) -> &[EdgeId] {
        self.out_edges.get(index).map_or(&[], Vec::as_slice)
    }

    fn extend_to(&mut self, vertex: VertexId) {
        if self.contains_vertex(vertex) {
            return;
        }

        debug!(
            "auto-extending graph from {} to {} vertices",
            self.num_vertices(),
            vertex.index() + 1
        );
        self.out_edges.resize_with(vertex.index() + 1, Vec::new);
    }
}

impl Graph for AdjacencyList {
    fn num_vertices(&self) -> usize {
        self.out_edges.len()
    }

    fn num_edges(&self) -> usize {
        self.edge_index.len()
    }

    fn add_vertex(&mut self) -> VertexId {
        let vertex = VertexId::new(self.out_edges.len());
        self.out_edges.push(Vec::new());
        trace!("added vertex {}", vertex);

        vertex
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(EdgeId, bool)> {
        if let Some(edge) = self.edge_index.get(&(u, v)) {
            trace!("edge {} already present", edge);
            return Ok((*edge, false));
        }

        if self.config.auto_extend {
            self.extend_to(u.max(v));
        } else if let Some(missing) = [u, v].into_iter().find(|x| !self.contains_vertex(*x)) {
            return Err(GraphError::VertexNotFound(missing.index()));
        }

        let edge = EdgeId::new(self.edge_index.len(), u, v);
        let out_edges = &mut self.out_edges[u.index()];
        match self.config.edge_order {
            EdgeOrder::Insertion => out_edges.push(edge),
            EdgeOrder::Sorted => {
                let position = out_edges.partition_point(|e| e.target() < v);
                out_edges.insert(position, edge);
            }
        }
        self.edge_index.insert((u, v), edge);
        trace!("added edge {}", edge);

        Ok((edge, true))
    }

    fn vertex(&self, index: usize) -> Result<VertexId> {
        if index < self.num_vertices() {
            Ok(VertexId::new(index))
        } else {
            Err(GraphError::VertexNotFound(index))
        }
    }

    fn edge(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.edge_index.get(&(u, v)).copied()
    }

    fn source(&self, edge: EdgeId) -> VertexId {
        edge.source()
    }

    fn target(&self, edge: EdgeId) -> VertexId {
        edge.target()
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex_markers().0.walk(self)
    }

    fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_markers().0.walk(self)
    }
}

impl DirectedGraph for AdjacencyList {
    fn adjacent_vertices(
        &self,
        vertex: VertexId,
    ) -> Result<impl Iterator<Item = VertexId> + '_> {
        let (begin, _) = self.adjacency_markers(vertex)?;
        Ok(Walk::new(self, begin))
    }

    fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.out_edges
            .get(vertex.index())
            .map(Vec::len)
            .ok_or(GraphError::VertexNotFound(vertex.index()))
    }
}
