//! Flow definitions
//! - Flow
//! - validity checks of a Flow on a FlowNetwork
use super::network::{FlowNetwork, NodeId};
use super::FlowRateLike;
use petgraph::graph::EdgeIndex;
use std::collections::BTreeMap;

/// Flow definitions
///
/// Flow f is a mapping of amount f(e) to each edge e of the FlowNetwork,
/// stored densely by edge index.
#[derive(PartialEq, Debug, Clone)]
pub struct Flow<F: FlowRateLike>(Vec<F>);

impl<F: FlowRateLike> Flow<F> {
    pub fn zero<N: NodeId>(network: &FlowNetwork<N, F>) -> Flow<F> {
        Flow(vec![F::zero(); network.edge_count()])
    }
    pub fn from_vec(vec: Vec<F>) -> Flow<F> {
        Flow(vec)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, e: EdgeIndex) -> Option<F> {
        self.0.get(e.index()).copied()
    }
    /// iterator of `(edge, flow)`
    pub fn iter(&self) -> impl Iterator<Item = (EdgeIndex, F)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &f)| (EdgeIndex::new(i), f))
    }
    /// Flow on the edge `from -> to` if the edge exists
    pub fn between<N: NodeId>(&self, network: &FlowNetwork<N, F>, from: &N, to: &N) -> Option<F> {
        network.find_edge(from, to).and_then(|edge| self.get(edge.id))
    }
    ///
    /// Nested map `from -> (to -> flow)` covering every edge of the network,
    /// including edges without flow.
    ///
    pub fn to_map<N: NodeId>(&self, network: &FlowNetwork<N, F>) -> BTreeMap<N, BTreeMap<N, F>> {
        let mut map: BTreeMap<N, BTreeMap<N, F>> = BTreeMap::new();
        for node in network.nodes() {
            map.entry(node.clone()).or_default();
        }
        for edge in network.edges() {
            let f = self.get(edge.id).unwrap_or_else(F::zero);
            map.entry(edge.from.clone())
                .or_default()
                .insert(edge.to.clone(), f);
        }
        map
    }
}

impl<F: FlowRateLike> std::ops::Index<EdgeIndex> for Flow<F> {
    type Output = F;
    fn index(&self, e: EdgeIndex) -> &F {
        &self.0[e.index()]
    }
}

impl<F: FlowRateLike> std::ops::IndexMut<EdgeIndex> for Flow<F> {
    fn index_mut(&mut self, e: EdgeIndex) -> &mut F {
        &mut self.0[e.index()]
    }
}

///
/// Check if the flow is valid, i.e. it satisfies
/// - flows of all edges are defined
/// - capacity constraint
/// - flow constraint (except on `source` and `sink`)
///
pub fn is_valid_flow<N: NodeId, F: FlowRateLike>(
    flow: &Flow<F>,
    network: &FlowNetwork<N, F>,
    source: &N,
    sink: &N,
) -> bool {
    is_defined_for_all_edges(flow, network)
        && is_in_capacity(flow, network)
        && is_satisfying_flow_constraint(flow, network, source, sink)
}

///
/// Check if the flow contains all edges
///
pub fn is_defined_for_all_edges<N: NodeId, F: FlowRateLike>(
    flow: &Flow<F>,
    network: &FlowNetwork<N, F>,
) -> bool {
    flow.len() == network.edge_count()
}

///
/// For each edge, the flow must satisfy `0 <= flow <= capacity`.
/// This function checks it
///
pub fn is_in_capacity<N: NodeId, F: FlowRateLike>(
    flow: &Flow<F>,
    network: &FlowNetwork<N, F>,
) -> bool {
    network.edges().all(|edge| match flow.get(edge.id) {
        Some(f) => (f >= F::zero() || f.sim_eq(F::zero())) && edge.capacity.admits(f),
        None => false,
    })
}

///
/// For each node except source and sink,
/// (the sum of out-going flows) should be equal to (the sum of in-coming flows).
///
pub fn is_satisfying_flow_constraint<N: NodeId, F: FlowRateLike>(
    flow: &Flow<F>,
    network: &FlowNetwork<N, F>,
    source: &N,
    sink: &N,
) -> bool {
    network
        .nodes()
        .filter(|&v| v != source && v != sink)
        .all(|v| {
            let in_flow: F = network
                .edges_into(v)
                .iter()
                .filter_map(|edge| flow.get(edge.id))
                .sum();
            let out_flow: F = network
                .edges_from(v)
                .iter()
                .filter_map(|edge| flow.get(edge.id))
                .sum();
            in_flow.sim_eq(out_flow)
        })
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::mocks::mock_flow_network1;
    use super::*;

    #[test]
    fn flow_valid_tests() {
        // s -> a -> b -> t with capacities 5, 10, 5
        let g = mock_flow_network1();
        let (s, t) = ("s", "t");

        // this is valid flow
        let f1 = Flow::from_vec(vec![5, 5, 5]);
        assert!(is_defined_for_all_edges(&f1, &g));
        assert!(is_in_capacity(&f1, &g));
        assert!(is_satisfying_flow_constraint(&f1, &g, &s, &t));
        assert!(is_valid_flow(&f1, &g, &s, &t));

        // this flow overs the capacity
        let f2 = Flow::from_vec(vec![100, 100, 100]);
        assert!(is_defined_for_all_edges(&f2, &g));
        assert!(!is_in_capacity(&f2, &g));
        assert!(is_satisfying_flow_constraint(&f2, &g, &s, &t));
        assert!(!is_valid_flow(&f2, &g, &s, &t));

        // this is a flow which not satisfies the flow constraint
        let f3 = Flow::from_vec(vec![1, 5, 1]);
        assert!(is_defined_for_all_edges(&f3, &g));
        assert!(is_in_capacity(&f3, &g));
        assert!(!is_satisfying_flow_constraint(&f3, &g, &s, &t));
        assert!(!is_valid_flow(&f3, &g, &s, &t));

        // this is a partial flow
        let f4 = Flow::from_vec(vec![1]);
        assert!(!is_defined_for_all_edges(&f4, &g));
        assert!(!is_valid_flow(&f4, &g, &s, &t));
    }

    #[test]
    fn flow_map_covers_all_edges() {
        let g = mock_flow_network1();
        let f = Flow::from_vec(vec![3, 3, 3]);
        let map = f.to_map(&g);
        assert_eq!(map.len(), 4);
        assert_eq!(map["s"]["a"], 3);
        assert_eq!(map["b"]["t"], 3);
        assert!(map["t"].is_empty());
        assert_eq!(f.between(&g, &"a", &"b"), Some(3));
        assert_eq!(f.between(&g, &"a", &"t"), None);

        let zero = Flow::zero(&g);
        assert!(zero.iter().all(|(_, v)| v == 0));
        assert_eq!(zero.to_map(&g)["a"]["b"], 0);
    }
}
