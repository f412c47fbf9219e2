//! Position markers into the sequences of an [AdjacencyList].
//!
//! A cursor is a plain position and holds no borrow, so it stays usable while
//! the graph grows. Dereferencing and stepping always look at the current
//! state of the graph: an end marker taken before an insertion keeps pointing
//! at the old extent, which is exactly where an appended element lands.
//!
//! [Walk] pairs a cursor with a graph reference to get an ordinary iterator.
//! [Walk::into_cursor] gives the position back when the borrow has to end.

use std::ops::Add;

use crate::{EdgeId, Graph, VertexId, graph::adjacency_list::AdjacencyList};

pub trait Cursor: Copy + Eq {
    type Item;

    /// Element at this position, `None` past the current end.
    fn get(&self, graph: &AdjacencyList) -> Option<Self::Item>;

    fn advance(&mut self, graph: &AdjacencyList);

    fn walk(self, graph: &AdjacencyList) -> Walk<'_, Self> {
        Walk::new(graph, self)
    }
}

#[derive(Debug, Clone)]
pub struct Walk<'g, C> {
    graph: &'g AdjacencyList,
    cursor: C,
}

impl<'g, C: Cursor> Walk<'g, C> {
    pub fn new(graph: &'g AdjacencyList, cursor: C) -> Self {
        Self { graph, cursor }
    }

    /// Position of the next element.
    pub fn cursor(&self) -> C {
        self.cursor
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Walk<'_, C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.get(self.graph)?;
        self.cursor.advance(self.graph);
        Some(item)
    }
}

/// Position in the vertex sequence.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct VertexCursor {
    position: usize,
}

impl VertexCursor {
    pub(crate) fn new(position: usize) -> Self {
        Self { position }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn prev(&self) -> Option<Self> {
        self.position.checked_sub(1).map(Self::new)
    }
}

impl Add<usize> for VertexCursor {
    type Output = VertexCursor;

    fn add(self, rhs: usize) -> Self::Output {
        VertexCursor::new(self.position + rhs)
    }
}

impl Cursor for VertexCursor {
    type Item = VertexId;

    fn get(&self, graph: &AdjacencyList) -> Option<VertexId> {
        (self.position < graph.num_vertices()).then(|| VertexId::new(self.position))
    }

    fn advance(&mut self, _graph: &AdjacencyList) {
        self.position += 1;
    }
}

/// Position in the out-neighbour sequence of one vertex.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct AdjacencyCursor {
    vertex: VertexId,
    offset: usize,
}

impl AdjacencyCursor {
    pub(crate) fn new(vertex: VertexId, offset: usize) -> Self {
        Self { vertex, offset }
    }

    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The out-edge this position refers to.
    pub fn edge(&self, graph: &AdjacencyList) -> Option<EdgeId> {
        graph
            .out_edge_list(self.vertex.index())
            .get(self.offset)
            .copied()
    }
}

impl Cursor for AdjacencyCursor {
    type Item = VertexId;

    fn get(&self, graph: &AdjacencyList) -> Option<VertexId> {
        self.edge(graph).map(|e| e.target())
    }

    fn advance(&mut self, _graph: &AdjacencyList) {
        self.offset += 1;
    }
}

/// Position in the edge sequence: the `offset`-th out-edge of `source`.
///
/// The end is `(num_vertices, 0)`. A saved end marker can fall behind
/// vertices added later without edges, so reads and steps settle first:
/// they skip forward to the next vertex that has an out-edge at `offset`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct EdgeCursor {
    source: usize,
    offset: usize,
}

impl EdgeCursor {
    pub(crate) fn begin(graph: &AdjacencyList) -> Self {
        Self {
            source: 0,
            offset: 0,
        }
        .settle(graph)
    }

    pub(crate) fn end(graph: &AdjacencyList) -> Self {
        Self {
            source: graph.num_vertices(),
            offset: 0,
        }
    }

    fn settle(mut self, graph: &AdjacencyList) -> Self {
        while self.source < graph.num_vertices()
            && self.offset >= graph.out_edge_list(self.source).len()
        {
            self.source += 1;
            self.offset = 0;
        }
        self
    }
}

impl Cursor for EdgeCursor {
    type Item = EdgeId;

    fn get(&self, graph: &AdjacencyList) -> Option<EdgeId> {
        let settled = self.settle(graph);
        graph
            .out_edge_list(settled.source)
            .get(settled.offset)
            .copied()
    }

    fn advance(&mut self, graph: &AdjacencyList) {
        let mut next = self.settle(graph);
        next.offset += 1;
        *self = next.settle(graph);
    }
}
