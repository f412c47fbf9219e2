use std::{iter, ops::ControlFlow};

use log::debug;

use crate::{
    DirectedGraph, GraphError, Result, VertexId,
    algorithms::dfs::{DfsVisitor, depth_first},
};

/// Emits each vertex when it finishes, fails on the first back edge.
struct FinishOrder<'o, O> {
    output: &'o mut O,
}

impl<O: Extend<VertexId>> DfsVisitor for FinishOrder<'_, O> {
    type Break = GraphError;

    fn finish_vertex(&mut self, vertex: VertexId) -> ControlFlow<GraphError> {
        self.output.extend(iter::once(vertex));
        ControlFlow::Continue(())
    }

    fn back_edge(&mut self, source: VertexId, target: VertexId) -> ControlFlow<GraphError> {
        ControlFlow::Break(GraphError::NotADag(source, target))
    }
}

pub trait TopologicalSort {
    /// Writes the vertices to `output` in depth-first finish order.
    ///
    /// Every vertex comes after all vertices it has an edge to, so the
    /// reversed output is a topological order. Fails with
    /// [GraphError::NotADag] at the first back edge; vertices emitted before
    /// that point stay in `output`.
    fn topological_sort<O>(&self, output: &mut O) -> Result<()>
    where
        O: Extend<VertexId>;

    /// Finish order collected into a vector. Nothing is returned on a cycle.
    fn topological_order(&self) -> Result<Vec<VertexId>> {
        let mut order = Vec::new();
        self.topological_sort(&mut order)?;
        Ok(order)
    }
}

impl<G> TopologicalSort for G
where
    G: DirectedGraph,
{
    fn topological_sort<O>(&self, output: &mut O) -> Result<()>
    where
        O: Extend<VertexId>,
    {
        match depth_first(self, &mut FinishOrder { output }) {
            ControlFlow::Continue(()) => Ok(()),
            ControlFlow::Break(error) => {
                debug!("topological sort aborted: {}", error);
                Err(error)
            }
        }
    }
}
