pub mod capacity;
pub mod decompose;
pub mod flow;
pub mod flow_rate;
#[cfg(test)]
pub mod mocks;
pub mod network;
pub mod residue;
pub mod utils;

pub use capacity::Capacity;
pub use flow::Flow;
pub use flow_rate::FlowRateLike;
pub use network::{FlowNetwork, LogisticsNetwork, NetworkEdge, NodeId};

use crate::error::{FlowError, Result};
use flow::is_valid_flow;
use residue::ResidueGraph;

//
// public functions
//

///
/// Find maximum flow from `source` to `sink` on the FlowNetwork
/// by Edmonds-Karp algorithm (shortest augmenting paths).
///
/// * `UnknownNode` if `source` or `sink` is not in the network
/// * `UnboundedFlow` if an augmenting path has no bounded edge
///
/// The result is deterministic: ties between shortest paths are broken by
/// the insertion order of edges (`FlowNetwork::edges_from`).
///
pub fn max_flow<N: NodeId, F: FlowRateLike>(
    network: &FlowNetwork<N, F>,
    source: &N,
    sink: &N,
) -> Result<MaxFlow<F>> {
    let s = network
        .node_index(source)
        .ok_or_else(|| FlowError::unknown_node(source))?;
    let t = network
        .node_index(sink)
        .ok_or_else(|| FlowError::unknown_node(sink))?;

    if s == t {
        let mut source_side = vec![false; network.node_count()];
        source_side[s.index()] = true;
        return Ok(MaxFlow {
            value: F::zero(),
            flow: Flow::zero(network),
            source_side,
            augmentations: 0,
        });
    }

    let mut rg = ResidueGraph::from_network(network);
    let mut value = F::zero();
    let mut augmentations = 0;

    let source_side = loop {
        let reachability = rg.search(s, t);
        let path = match reachability.path_to(&rg, t) {
            Some(path) => path,
            None => break reachability.visited().to_vec(),
        };
        let bottleneck = match rg.bottleneck(&path) {
            Some(bottleneck) => bottleneck,
            None => {
                return Err(FlowError::UnboundedFlow {
                    path: rg.format_path(network, &path),
                })
            }
        };
        tracing::debug!(
            "augmenting {} along {} (length {})",
            bottleneck,
            rg.format_path(network, &path),
            path.len()
        );
        rg.augment(&path, bottleneck);
        value += bottleneck;
        augmentations += 1;
    };

    let flow = rg.to_flow(network);
    debug_assert!(is_valid_flow(&flow, network, source, sink));
    tracing::info!(
        "max flow {} -> {} = {} ({} augmentations)",
        source,
        sink,
        value,
        augmentations
    );

    Ok(MaxFlow {
        value,
        flow,
        source_side,
        augmentations,
    })
}

///
/// Result of `max_flow`
///
/// * `value`: total flow from source to sink
/// * `flow`: flow of each edge of the network
/// * `source_side`: nodes reachable from source in the final residue graph
///
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlow<F: FlowRateLike> {
    value: F,
    flow: Flow<F>,
    source_side: Vec<bool>,
    augmentations: usize,
}

impl<F: FlowRateLike> MaxFlow<F> {
    pub fn value(&self) -> F {
        self.value
    }
    pub fn flow(&self) -> &Flow<F> {
        &self.flow
    }
    /// number of augmenting paths used
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }
    /// Flow on the edge `from -> to`
    pub fn flow_between<N: NodeId>(
        &self,
        network: &FlowNetwork<N, F>,
        from: &N,
        to: &N,
    ) -> Option<F> {
        self.flow.between(network, from, to)
    }
    /// Nested map `from -> (to -> flow)` of every edge
    pub fn flow_map<N: NodeId>(
        &self,
        network: &FlowNetwork<N, F>,
    ) -> std::collections::BTreeMap<N, std::collections::BTreeMap<N, F>> {
        self.flow.to_map(network)
    }
    ///
    /// Minimum cut derived from the final residue graph.
    ///
    /// Source side is the set of nodes reachable from the source,
    /// and the cut edges are the edges leaving it.
    /// Its capacity equals `value()`.
    ///
    pub fn min_cut<'a, N: NodeId>(&self, network: &'a FlowNetwork<N, F>) -> MinCut<'a, N, F> {
        let in_source_side = |v: &N| {
            network
                .node_index(v)
                .and_then(|i| self.source_side.get(i.index()).copied())
                .unwrap_or(false)
        };
        let source_side: Vec<&N> = network.nodes().filter(|&v| in_source_side(v)).collect();
        let edges: Vec<NetworkEdge<'a, N, F>> = network
            .edges()
            .filter(|edge| in_source_side(edge.from) && !in_source_side(edge.to))
            .collect();
        let capacity = edges
            .iter()
            .fold(Capacity::Bounded(F::zero()), |acc, edge| acc.merge(edge.capacity));
        MinCut {
            source_side,
            edges,
            capacity,
        }
    }
}

/// A source-sink cut of the FlowNetwork
#[derive(Debug, Clone)]
pub struct MinCut<'a, N, F: FlowRateLike> {
    pub source_side: Vec<&'a N>,
    pub edges: Vec<NetworkEdge<'a, N, F>>,
    pub capacity: Capacity<F>,
}
