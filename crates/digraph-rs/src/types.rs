use std::fmt::Display;

/// Identity of a vertex: the position of its `add_vertex` call, starting at 0.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of an edge.
///
/// `index` counts successful insertions over the whole graph. The endpoints
/// travel with the identity, so projecting an edge back onto its source and
/// target needs no lookup.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct EdgeId {
    index: usize,
    source: VertexId,
    target: VertexId,
}

impl EdgeId {
    pub(crate) fn new(index: usize, source: VertexId, target: VertexId) -> Self {
        Self {
            index,
            source,
            target,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// Order of the out-edges of a single vertex.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default)]
pub enum EdgeOrder {
    /// Out-edges stay in the order they were added.
    #[default]
    Insertion,
    /// Out-edges are kept sorted by target vertex.
    Sorted,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct GraphConfig {
    /// Let `add_edge` create missing endpoint vertices (and every vertex in
    /// between) instead of failing.
    pub auto_extend: bool,
    pub edge_order: EdgeOrder,
}

impl GraphConfig {
    pub fn auto_extend(mut self, auto_extend: bool) -> Self {
        self.auto_extend = auto_extend;
        self
    }

    pub fn edge_order(mut self, edge_order: EdgeOrder) -> Self {
        self.edge_order = edge_order;
        self
    }
}
