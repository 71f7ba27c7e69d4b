//! Residue graph related definitions
//! - ResidueEdge
//! - ResidueGraph
//! - ResidueDirection
//!
use super::flow::Flow;
use super::network::{FlowNetwork, NodeId};
use super::{Capacity, FlowRateLike};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use std::collections::VecDeque;

// basic definitions

/// Edge attributes used in ResidueGraph
#[derive(Debug, Copy, Clone)]
pub struct ResidueEdge<F: FlowRateLike> {
    /// The movable amount of the flow
    pub count: Capacity<F>,
    /// Original edge index of the source network
    pub target: EdgeIndex,
    /// +1 or -1
    pub direction: ResidueDirection,
}

impl<F: FlowRateLike> ResidueEdge<F> {
    pub fn new(
        count: Capacity<F>,
        target: EdgeIndex,
        direction: ResidueDirection,
    ) -> ResidueEdge<F> {
        ResidueEdge {
            count,
            target,
            direction,
        }
    }
}

/// Residue direction enum
/// residue edge has two types
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResidueDirection {
    /// Up edge: it can increase(+1) flow
    Up,
    /// Down edge: it can decrease(-1) flow
    Down,
}

impl std::fmt::Display for ResidueDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ResidueDirection::Up => write!(f, "+"),
            ResidueDirection::Down => write!(f, "-"),
        }
    }
}

///
/// ResidueGraph definition
///
/// For each edge `e = v -> w` of the FlowNetwork with capacity `u` and flow `f`,
/// it has two residue edges created side by side
///
/// ```text
/// v -> w  (u - f, Up)   index 2e
/// w -> v  (f, Down)     index 2e+1
/// ```
///
/// so the paired edge of a residue edge `r` is `r ^ 1`.
///
/// Out-going residue edges of each node are kept in the order of creation,
/// which follows the edge order of the FlowNetwork.
///
#[derive(Debug, Clone)]
pub struct ResidueGraph<F: FlowRateLike> {
    graph: DiGraph<(), ResidueEdge<F>>,
    outgoing: Vec<Vec<EdgeIndex>>,
}

impl<F: FlowRateLike> ResidueGraph<F> {
    /// Residue graph of the zero flow on the network
    pub fn from_network<N: NodeId>(network: &FlowNetwork<N, F>) -> ResidueGraph<F> {
        let n = network.node_count();
        let mut graph: DiGraph<(), ResidueEdge<F>> =
            DiGraph::with_capacity(n, 2 * network.edge_count());
        let mut outgoing = vec![Vec::new(); n];
        for _ in 0..n {
            graph.add_node(());
        }

        let source_graph = network.graph();
        for edge in network.edges() {
            let Some((v, w)) = source_graph.edge_endpoints(edge.id) else {
                continue;
            };
            let up = graph.add_edge(
                v,
                w,
                ResidueEdge::new(edge.capacity, edge.id, ResidueDirection::Up),
            );
            let down = graph.add_edge(
                w,
                v,
                ResidueEdge::new(Capacity::Bounded(F::zero()), edge.id, ResidueDirection::Down),
            );
            outgoing[v.index()].push(up);
            outgoing[w.index()].push(down);
        }

        ResidueGraph { graph, outgoing }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_weight(&self, e: EdgeIndex) -> Option<&ResidueEdge<F>> {
        self.graph.edge_weight(e)
    }

    /// The paired residue edge of `e` (Up <-> Down of the same original edge)
    pub fn pair(e: EdgeIndex) -> EdgeIndex {
        EdgeIndex::new(e.index() ^ 1)
    }

    ///
    /// Breadth first search from `source` along residue edges with positive count.
    ///
    /// Each node remembers the residue edge it was first discovered by.
    /// The search ends as soon as `sink` is discovered.
    ///
    pub fn search(&self, source: NodeIndex, sink: NodeIndex) -> Reachability {
        let n = self.node_count();
        let mut reachability = Reachability {
            visited: vec![false; n],
            predecessor: vec![None; n],
        };
        let mut queue = VecDeque::new();
        reachability.visited[source.index()] = true;
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            for &e in self.outgoing[v.index()].iter() {
                let ew = &self.graph[e];
                if !ew.count.has_room() {
                    continue;
                }
                let Some((_, w)) = self.graph.edge_endpoints(e) else {
                    continue;
                };
                if reachability.visited[w.index()] {
                    continue;
                }
                reachability.visited[w.index()] = true;
                reachability.predecessor[w.index()] = Some(e);
                if w == sink {
                    return reachability;
                }
                queue.push_back(w);
            }
        }

        reachability
    }

    ///
    /// Minimum count along the path, ignoring unbounded edges.
    ///
    /// `None` if all edges of the path are unbounded.
    ///
    pub fn bottleneck(&self, path: &[EdgeIndex]) -> Option<F> {
        path.iter()
            .filter_map(|&e| self.graph[e].count.bounded())
            .reduce(|a, b| a.smaller(b))
    }

    ///
    /// Push `amount` along the path:
    /// decrease the count of each residue edge and increase the count of its pair.
    ///
    pub fn augment(&mut self, path: &[EdgeIndex], amount: F) {
        for &e in path {
            let count = self.graph[e].count;
            self.graph[e].count = count.decrease(amount);
            let pair = Self::pair(e);
            let pair_count = self.graph[pair].count;
            self.graph[pair].count = pair_count.increase(amount);
        }
    }

    ///
    /// Convert back to the flow on the original network.
    ///
    /// The count of the Down edge is the amount sent along its target edge,
    /// for bounded and unbounded edges alike.
    ///
    pub fn to_flow<N: NodeId>(&self, network: &FlowNetwork<N, F>) -> Flow<F> {
        let mut flow = Flow::zero(network);
        for ew in self.graph.edge_weights() {
            if ew.direction != ResidueDirection::Down {
                continue;
            }
            if let Some(sent) = ew.count.bounded() {
                flow[ew.target] = sent;
            }
        }
        flow
    }

    /// Human readable form of a path, `v0 -> v1 -> ...`, used in logs and errors
    pub fn format_path<N: NodeId>(&self, network: &FlowNetwork<N, F>, path: &[EdgeIndex]) -> String {
        use itertools::Itertools;
        let name = |v: NodeIndex| {
            network
                .node(v)
                .map(|n| n.to_string())
                .unwrap_or_else(|| format!("#{}", v.index()))
        };
        let mut nodes = Vec::with_capacity(path.len() + 1);
        for (i, &e) in path.iter().enumerate() {
            if let Some((v, w)) = self.graph.edge_endpoints(e) {
                if i == 0 {
                    nodes.push(name(v));
                }
                nodes.push(name(w));
            }
        }
        nodes.into_iter().join(" -> ")
    }
}

/// Result of the breadth first search on the ResidueGraph
#[derive(Debug, Clone)]
pub struct Reachability {
    visited: Vec<bool>,
    predecessor: Vec<Option<EdgeIndex>>,
}

impl Reachability {
    pub fn is_reached(&self, v: NodeIndex) -> bool {
        self.visited.get(v.index()).copied().unwrap_or(false)
    }

    /// Nodes marked as reached
    pub fn visited(&self) -> &[bool] {
        &self.visited
    }

    ///
    /// Trace predecessors back from `sink` to the root of the search.
    /// The path is returned in the order from the root to `sink`.
    ///
    pub fn path_to<F: FlowRateLike>(
        &self,
        rg: &ResidueGraph<F>,
        sink: NodeIndex,
    ) -> Option<Vec<EdgeIndex>> {
        if !self.is_reached(sink) {
            return None;
        }
        let mut path = Vec::new();
        let mut v = sink;
        while let Some(e) = self.predecessor[v.index()] {
            path.push(e);
            let (u, _) = rg.graph.edge_endpoints(e)?;
            v = u;
        }
        path.reverse();
        Some(path)
    }
}
