use log::info;

use crate::{
    EdgeOrder, Graph, GraphConfig, Result, VertexId, graph::adjacency_list::AdjacencyList,
};

pub struct Uninitialized {}

pub struct FromEdgeList {
    vertices: usize,
    edges: Vec<(usize, usize)>,
}

/// Builds an [AdjacencyList] with a given configuration.
///
/// ```
/// use digraph_rs::{Graph, builder::GraphBuilder};
///
/// let g = GraphBuilder::new()
///     .edges([(0, 1), (1, 2)])
///     .build()
///     .unwrap();
/// assert_eq!(g.num_vertices(), 3);
/// assert_eq!(g.num_edges(), 2);
/// ```
#[derive(Debug)]
pub struct GraphBuilder<State> {
    config: GraphConfig,
    state: State,
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State> GraphBuilder<State> {
    pub fn auto_extend(mut self, auto_extend: bool) -> Self {
        self.config.auto_extend = auto_extend;
        self
    }

    pub fn edge_order(mut self, edge_order: EdgeOrder) -> Self {
        self.config.edge_order = edge_order;
        self
    }
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            config: GraphConfig::default(),
            state: Uninitialized {},
        }
    }

    /// Seed the graph with `vertices` vertices and no edges.
    pub fn vertices(self, vertices: usize) -> GraphBuilder<FromEdgeList> {
        GraphBuilder {
            config: self.config,
            state: FromEdgeList {
                vertices,
                edges: Vec::new(),
            },
        }
    }

    /// Seed the graph from `(source, target)` index pairs.
    ///
    /// The graph gets as many vertices as the largest index requires. Edges are
    /// added in iteration order; repeated pairs are stored once.
    pub fn edges<I>(self, edges: I) -> GraphBuilder<FromEdgeList>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.vertices(0).edges(edges)
    }

    pub fn build(self) -> AdjacencyList {
        AdjacencyList::with_config(self.config)
    }
}

impl GraphBuilder<FromEdgeList> {
    pub fn edges<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.state.edges.extend(edges);
        self
    }

    pub fn build(self) -> Result<AdjacencyList> {
        let FromEdgeList { vertices, edges } = self.state;
        let vertices = edges
            .iter()
            .map(|(s, t)| s.max(t) + 1)
            .fold(vertices, usize::max);

        let mut graph = AdjacencyList::with_config(self.config);
        (0..vertices).for_each(|_| {
            graph.add_vertex();
        });
        for (source, target) in edges {
            graph.add_edge(VertexId::new(source), VertexId::new(target))?;
        }

        info!(
            "Created directed graph (vertex_count: {:?}, edge_count = {:?})",
            graph.num_vertices(),
            graph.num_edges()
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::DirectedGraph;

    #[test]
    fn empty_builder_keeps_config() {
        let g = GraphBuilder::new()
            .auto_extend(true)
            .edge_order(EdgeOrder::Sorted)
            .build();
        assert_eq!(g.num_vertices(), 0);
        assert!(g.config().auto_extend);
        assert_eq!(g.config().edge_order, EdgeOrder::Sorted);
    }

    #[test]
    fn isolated_vertices() {
        let g = GraphBuilder::new().vertices(4).build().unwrap();
        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn vertex_count_covers_edges() {
        let g = GraphBuilder::new()
            .vertices(2)
            .edges([(0, 4), (0, 4), (4, 4)])
            .build()
            .unwrap();
        assert_eq!(g.num_vertices(), 5);
        assert_eq!(g.num_edges(), 2);
        assert!(!g.config().auto_extend);
    }

    #[test]
    fn sorted_edges_from_list() {
        let g = GraphBuilder::new()
            .edge_order(EdgeOrder::Sorted)
            .edges([(0, 3), (0, 1), (0, 2)])
            .build()
            .unwrap();
        let adjacent: Vec<_> = g
            .adjacent_vertices(VertexId::new(0))
            .unwrap()
            .map(|v| v.index())
            .collect();
        assert_eq!(adjacent, vec![1, 2, 3]);
    }
}
