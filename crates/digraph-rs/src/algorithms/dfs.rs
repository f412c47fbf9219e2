//! Depth-first walk shared by the cycle detector and the topological sorter.

use std::ops::ControlFlow;

use log::debug;

use crate::{DirectedGraph, VertexId};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum VisitState {
    #[default]
    Unvisited,
    /// On the current depth-first stack.
    InProgress,
    Done,
}

/// Hooks called by [depth_first]. Returning `Break` stops the walk.
pub trait DfsVisitor {
    type Break;

    /// All vertices reachable from `vertex` have been explored.
    fn finish_vertex(&mut self, _vertex: VertexId) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }

    /// `source -> target` leads to a vertex that is still in progress.
    fn back_edge(&mut self, _source: VertexId, _target: VertexId) -> ControlFlow<Self::Break> {
        ControlFlow::Continue(())
    }
}

/// Walks the whole graph depth first.
///
/// Roots are taken in vertex order, skipping vertices finished by an earlier
/// root; neighbours are explored in out-edge order. The walk keeps its own
/// stack, so long chains do not grow the call stack.
pub fn depth_first<G, V>(graph: &G, visitor: &mut V) -> ControlFlow<V::Break>
where
    G: DirectedGraph,
    V: DfsVisitor,
{
    debug!("depth-first walk over {} vertices", graph.num_vertices());

    let mut state = vec![VisitState::Unvisited; graph.num_vertices()];
    let mut stack = Vec::new();

    for root in graph.vertices() {
        if state[root.index()] != VisitState::Unvisited {
            continue;
        }

        state[root.index()] = VisitState::InProgress;
        stack.push((root, neighbours(graph, root)));

        while let Some((vertex, neighbours_left)) = stack.last_mut() {
            let vertex = *vertex;
            let next = neighbours_left.next();

            match next {
                Some(target) => match state[target.index()] {
                    VisitState::Unvisited => {
                        state[target.index()] = VisitState::InProgress;
                        stack.push((target, neighbours(graph, target)));
                    }
                    VisitState::InProgress => visitor.back_edge(vertex, target)?,
                    VisitState::Done => {}
                },
                None => {
                    stack.pop();
                    state[vertex.index()] = VisitState::Done;
                    visitor.finish_vertex(vertex)?;
                }
            }
        }
    }

    ControlFlow::Continue(())
}

fn neighbours<G: DirectedGraph>(
    graph: &G,
    vertex: VertexId,
) -> impl Iterator<Item = VertexId> + '_ {
    // Only called with vertices of `graph`; see [DirectedGraph::adjacent_vertices].
    graph.adjacent_vertices(vertex).into_iter().flatten()
}
