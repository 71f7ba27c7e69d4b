//! # `FlowNetwork` and `LogisticsNetwork`
//!
//! `FlowNetwork` is a DiGraph whose node is an identifier `N` and whose edge
//! is a `Capacity<F>`. Nodes are looked up by identifier.
//!
//! `LogisticsNetwork` is a FlowNetwork of the three tiers
//! * origins
//! * intermediates
//! * destinations
//! wired to a super-source and a super-sink by unbounded edges,
//! so that a single source/sink max-flow can be computed on it.
//!
use super::decompose::{self, Attribution};
use super::{max_flow, Capacity, FlowRateLike, MaxFlow};
use crate::error::{FlowError, Result};
use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Node identifier of the FlowNetwork (a name or an integer handle)
pub trait NodeId: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Ord + Debug + Display {}

/// Directed graph of nodes and capacitated edges.
///
/// Node and edge indices are assigned in insertion order and never change,
/// because nodes and edges are never removed.
#[derive(Debug, Clone)]
pub struct FlowNetwork<N, F: FlowRateLike> {
    graph: DiGraph<N, Capacity<F>>,
    indices: HashMap<N, NodeIndex>,
}

/// A view of an edge of the FlowNetwork
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkEdge<'a, N, F: FlowRateLike> {
    pub id: EdgeIndex,
    pub from: &'a N,
    pub to: &'a N,
    pub capacity: Capacity<F>,
}

impl<N: NodeId, F: FlowRateLike> Default for FlowNetwork<N, F> {
    fn default() -> Self {
        FlowNetwork {
            graph: DiGraph::new(),
            indices: HashMap::new(),
        }
    }
}

impl<N: NodeId, F: FlowRateLike> FlowNetwork<N, F> {
    pub fn new() -> FlowNetwork<N, F> {
        Self::default()
    }

    /// Build a network from an ordered list of `(from, to, capacity)`.
    /// Stops at the first invalid edge.
    pub fn from_edges<I>(edges: I) -> Result<FlowNetwork<N, F>>
    where
        I: IntoIterator<Item = (N, N, F)>,
    {
        let mut network = FlowNetwork::new();
        for (from, to, capacity) in edges {
            network.add_edge(from, to, capacity)?;
        }
        Ok(network)
    }

    /// Add a node if it does not exist yet, and return its index.
    pub fn add_node(&mut self, node: N) -> NodeIndex {
        if let Some(&index) = self.indices.get(&node) {
            return index;
        }
        let index = self.graph.add_node(node.clone());
        self.indices.insert(node, index);
        index
    }

    ///
    /// Add capacity `capacity` between `from` and `to`, creating the nodes as needed.
    ///
    /// Capacities of a repeated `(from, to)` pair are summed.
    /// A negative (or NaN) capacity is rejected and the network is left untouched.
    ///
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn add_edge(&mut self, from: N, to: N, capacity: F) -> Result<EdgeIndex> {
        // negated so that NaN is rejected too
        if !(capacity >= F::zero()) {
            tracing::warn!("rejected edge {} -> {} with capacity {}", from, to, capacity);
            return Err(FlowError::InvalidCapacity {
                from: from.to_string(),
                to: to.to_string(),
                capacity: capacity.to_string(),
            });
        }
        Ok(self.insert_edge(from, to, Capacity::Bounded(capacity)))
    }

    /// Add an edge without upper limit between `from` and `to`.
    pub fn add_unbounded_edge(&mut self, from: N, to: N) -> EdgeIndex {
        self.insert_edge(from, to, Capacity::Unbounded)
    }

    fn insert_edge(&mut self, from: N, to: N, capacity: Capacity<F>) -> EdgeIndex {
        let v = self.add_node(from);
        let w = self.add_node(to);
        match self.graph.find_edge(v, w) {
            Some(e) => {
                let merged = self.graph[e].merge(capacity);
                self.graph[e] = merged;
                e
            }
            None => self.graph.add_edge(v, w, capacity),
        }
    }

    pub fn contains(&self, node: &N) -> bool {
        self.indices.contains_key(node)
    }

    pub fn node_index(&self, node: &N) -> Option<NodeIndex> {
        self.indices.get(node).copied()
    }

    /// Identifier of the node at `index`
    pub fn node(&self, index: NodeIndex) -> Option<&N> {
        self.graph.node_weight(index)
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.graph.node_indices().map(move |v| &self.graph[v])
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = NetworkEdge<'_, N, F>> + '_ {
        self.graph.edge_references().map(move |er| self.view(er))
    }

    ///
    /// Out-going edges of `node` in insertion order.
    ///
    /// The order is stable; the solver relies on it to break ties between
    /// augmenting paths of the same length.
    /// Unknown node has no edges.
    ///
    pub fn edges_from(&self, node: &N) -> Vec<NetworkEdge<'_, N, F>> {
        self.edges_directed(node, Direction::Outgoing)
    }

    /// In-coming edges of `node` in insertion order.
    pub fn edges_into(&self, node: &N) -> Vec<NetworkEdge<'_, N, F>> {
        self.edges_directed(node, Direction::Incoming)
    }

    fn edges_directed(&self, node: &N, direction: Direction) -> Vec<NetworkEdge<'_, N, F>> {
        match self.node_index(node) {
            Some(v) => {
                // petgraph lists adjacent edges newest first
                let mut edges: Vec<_> = self
                    .graph
                    .edges_directed(v, direction)
                    .map(|er| self.view(er))
                    .collect();
                edges.sort_by_key(|edge| edge.id);
                edges
            }
            None => Vec::new(),
        }
    }

    pub fn edge(&self, e: EdgeIndex) -> Option<NetworkEdge<'_, N, F>> {
        let (v, w) = self.graph.edge_endpoints(e)?;
        Some(NetworkEdge {
            id: e,
            from: &self.graph[v],
            to: &self.graph[w],
            capacity: self.graph[e],
        })
    }

    pub fn find_edge(&self, from: &N, to: &N) -> Option<NetworkEdge<'_, N, F>> {
        let v = self.node_index(from)?;
        let w = self.node_index(to)?;
        let e = self.graph.find_edge(v, w)?;
        self.edge(e)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The underlying petgraph DiGraph (read only)
    pub fn graph(&self) -> &DiGraph<N, Capacity<F>> {
        &self.graph
    }

    fn view<'a>(&'a self, er: EdgeReference<'a, Capacity<F>>) -> NetworkEdge<'a, N, F> {
        NetworkEdge {
            id: er.id(),
            from: &self.graph[er.source()],
            to: &self.graph[er.target()],
            capacity: *er.weight(),
        }
    }
}

///
/// Three-tier network with super-source and super-sink
///
/// ```text
///                  origins   intermediates  destinations
///                     o1 ---> m1 ---> d1
///  super_source ---> o2 ---> m2 ---> d2 ---> super_sink
///              (inf)                     (inf)
/// ```
///
#[derive(Debug, Clone)]
pub struct LogisticsNetwork<N, F: FlowRateLike> {
    network: FlowNetwork<N, F>,
    origins: Vec<N>,
    destinations: Vec<N>,
    super_source: N,
    super_sink: N,
}

impl<N: NodeId, F: FlowRateLike> LogisticsNetwork<N, F> {
    ///
    /// Wire `super_source -> origin` and `destination -> super_sink` unbounded edges
    /// into `network`.
    ///
    /// * origins and destinations must be nodes of `network`
    /// * super_source and super_sink must be new nodes
    ///
    pub fn new(
        mut network: FlowNetwork<N, F>,
        origins: Vec<N>,
        destinations: Vec<N>,
        super_source: N,
        super_sink: N,
    ) -> Result<LogisticsNetwork<N, F>> {
        for node in [&super_source, &super_sink] {
            if network.contains(node) {
                return Err(FlowError::NodeCollision {
                    node: node.to_string(),
                });
            }
        }
        if super_source == super_sink {
            return Err(FlowError::NodeCollision {
                node: super_sink.to_string(),
            });
        }
        if let Some(node) = origins
            .iter()
            .chain(destinations.iter())
            .find(|node| !network.contains(node))
        {
            return Err(FlowError::unknown_node(node));
        }

        for origin in origins.iter() {
            network.add_unbounded_edge(super_source.clone(), origin.clone());
        }
        for destination in destinations.iter() {
            network.add_unbounded_edge(destination.clone(), super_sink.clone());
        }
        tracing::debug!(
            "wired {} origins and {} destinations (V={}, E={})",
            origins.len(),
            destinations.len(),
            network.node_count(),
            network.edge_count()
        );

        Ok(LogisticsNetwork {
            network,
            origins,
            destinations,
            super_source,
            super_sink,
        })
    }

    pub fn network(&self) -> &FlowNetwork<N, F> {
        &self.network
    }
    pub fn origins(&self) -> &[N] {
        &self.origins
    }
    pub fn destinations(&self) -> &[N] {
        &self.destinations
    }
    pub fn super_source(&self) -> &N {
        &self.super_source
    }
    pub fn super_sink(&self) -> &N {
        &self.super_sink
    }

    /// true if `node` is the super-source or the super-sink
    pub fn is_synthetic(&self, node: &N) -> bool {
        node == &self.super_source || node == &self.super_sink
    }

    /// Edges of the real network, i.e. not touching the super-source/sink
    pub fn real_edges(&self) -> impl Iterator<Item = NetworkEdge<'_, N, F>> + '_ {
        self.network
            .edges()
            .filter(move |edge| !self.is_synthetic(edge.from) && !self.is_synthetic(edge.to))
    }

    /// Maximum flow from the super-source to the super-sink
    pub fn solve(&self) -> Result<MaxFlow<F>> {
        max_flow(&self.network, &self.super_source, &self.super_sink)
    }

    /// Flow from each origin to each destination, see `decompose::attribute`
    pub fn attribute(&self, solution: &MaxFlow<F>) -> Result<Attribution<N, F>> {
        decompose::attribute(
            &self.network,
            &self.origins,
            &self.destinations,
            solution.flow(),
        )
    }

    /// Total flow leaving each origin, in the order of `origins()`
    pub fn shipped_by_origin(&self, solution: &MaxFlow<F>) -> Vec<(N, F)> {
        decompose::shipped_by(&self.network, &self.origins, solution.flow())
    }

    /// Total flow arriving at each destination, in the order of `destinations()`
    pub fn received_by_destination(&self, solution: &MaxFlow<F>) -> Vec<(N, F)> {
        decompose::received_by(&self.network, &self.destinations, solution.flow())
    }

    /// Real edges whose flow fills their capacity
    pub fn saturated_edges(&self, solution: &MaxFlow<F>) -> Vec<NetworkEdge<'_, N, F>> {
        self.real_edges()
            .filter(|edge| edge.capacity.has_room())
            .filter(|edge| edge.capacity.is_saturated_by(solution.flow()[edge.id]))
            .collect()
    }

    /// Real edges with the lowest bounded capacity, in edge order
    pub fn narrowest_edges(&self) -> Vec<NetworkEdge<'_, N, F>> {
        let Some(lowest) = self
            .real_edges()
            .filter_map(|edge| edge.capacity.bounded())
            .reduce(|a, b| a.smaller(b))
        else {
            return Vec::new();
        };
        self.real_edges()
            .filter(|edge| edge.capacity.bounded().is_some_and(|u| u.sim_eq(lowest)))
            .collect()
    }
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::mocks::{mock_logistics_network, mock_two_tier_network};
    use super::*;

    #[test]
    fn add_edge_creates_nodes_in_order() {
        let mut n: FlowNetwork<&str, usize> = FlowNetwork::new();
        n.add_edge("a", "b", 3).unwrap();
        n.add_edge("b", "c", 5).unwrap();
        n.add_edge("a", "c", 1).unwrap();
        assert_eq!(n.nodes().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(n.node_count(), 3);
        assert_eq!(n.edge_count(), 3);
        assert!(n.contains(&"c"));
        assert!(!n.contains(&"d"));
    }

    #[test]
    fn duplicate_edges_are_summed() {
        let mut n: FlowNetwork<&str, usize> = FlowNetwork::new();
        let e1 = n.add_edge("a", "b", 3).unwrap();
        let e2 = n.add_edge("a", "b", 4).unwrap();
        assert_eq!(e1, e2);
        assert_eq!(n.edge_count(), 1);
        assert_eq!(n.find_edge(&"a", &"b").unwrap().capacity, Capacity::Bounded(7));

        n.add_unbounded_edge("a", "b");
        assert_eq!(n.find_edge(&"a", &"b").unwrap().capacity, Capacity::Unbounded);
        n.add_edge("a", "b", 1).unwrap();
        assert_eq!(n.find_edge(&"a", &"b").unwrap().capacity, Capacity::Unbounded);
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let mut n: FlowNetwork<&str, f64> = FlowNetwork::new();
        n.add_edge("a", "b", 1.0).unwrap();
        let r = n.add_edge("b", "c", -2.0);
        assert!(matches!(r, Err(FlowError::InvalidCapacity { .. })));
        // edge and its new endpoint are not created
        assert!(!n.contains(&"c"));
        assert_eq!(n.edge_count(), 1);

        let r = n.add_edge("b", "c", f64::NAN);
        assert!(matches!(r, Err(FlowError::InvalidCapacity { .. })));

        // zero capacity is allowed
        assert!(n.add_edge("b", "c", 0.0).is_ok());
    }

    #[test]
    fn edges_from_is_in_insertion_order() {
        let mut n: FlowNetwork<u32, usize> = FlowNetwork::new();
        n.add_edge(0, 3, 1).unwrap();
        n.add_edge(1, 2, 1).unwrap();
        n.add_edge(0, 1, 1).unwrap();
        n.add_edge(0, 2, 1).unwrap();
        let targets: Vec<u32> = n.edges_from(&0).iter().map(|e| *e.to).collect();
        assert_eq!(targets, vec![3, 1, 2]);
        let sources: Vec<u32> = n.edges_into(&2).iter().map(|e| *e.from).collect();
        assert_eq!(sources, vec![1, 0]);
        assert!(n.edges_from(&9).is_empty());
    }

    #[test]
    fn logistics_wiring() {
        let ln = mock_logistics_network();
        let n = ln.network();
        for origin in ln.origins() {
            let e = n.find_edge(ln.super_source(), origin).unwrap();
            assert_eq!(e.capacity, Capacity::Unbounded);
        }
        for destination in ln.destinations() {
            let e = n.find_edge(destination, ln.super_sink()).unwrap();
            assert_eq!(e.capacity, Capacity::Unbounded);
        }
        assert!(ln.real_edges().all(|e| !e.capacity.is_unbounded()));
        assert_eq!(ln.real_edges().count(), 6);
    }

    #[test]
    fn narrowest_edges_keep_ties() {
        let ln = mock_logistics_network();
        let narrowest: Vec<_> = ln
            .narrowest_edges()
            .iter()
            .map(|e| (*e.from, *e.to, e.capacity))
            .collect();
        // unbounded super-source/sink edges are never the narrowest
        assert_eq!(
            narrowest,
            vec![
                ("M2", "D1", Capacity::Bounded(3)),
                ("M2", "D2", Capacity::Bounded(3)),
            ]
        );

        let empty: LogisticsNetwork<&str, usize> =
            LogisticsNetwork::new(FlowNetwork::new(), vec![], vec![], "S", "T").unwrap();
        assert!(empty.narrowest_edges().is_empty());
    }

    #[test]
    fn logistics_wiring_errors() {
        let n = mock_two_tier_network();
        let r = LogisticsNetwork::new(n.clone(), vec!["O1"], vec!["D1"], "O1", "T");
        assert!(matches!(r, Err(FlowError::NodeCollision { .. })));

        let r = LogisticsNetwork::new(n.clone(), vec!["O1"], vec!["D1"], "S", "S");
        assert!(matches!(r, Err(FlowError::NodeCollision { .. })));

        let r = LogisticsNetwork::new(n, vec!["O9"], vec!["D1"], "S", "T");
        assert!(matches!(r, Err(FlowError::UnknownNode { .. })));
    }
}
