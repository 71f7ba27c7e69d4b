//!
//! Attribution of a solved flow to origin-destination pairs.
//!
//! For each origin `o` and destination `d`, the attributed flow is
//!
//! ```text
//! sum over m with o -> m -> d of min(f(o, m), f(m, d))
//! ```
//!
//! This is not a path decomposition of the flow. Flow through an intermediate
//! `m` serving several destinations can be counted more than once, and flow
//! split over several intermediates can be counted less than it is.
//! Totals per origin/destination are given by `shipped_by`/`received_by`.
//!
use super::flow::Flow;
use super::network::{FlowNetwork, NodeId};
use super::FlowRateLike;
use crate::error::{FlowError, Result};
use std::collections::BTreeMap;

/// `(origin, destination) -> attributed flow`
pub type Attribution<N, F> = BTreeMap<(N, N), F>;

///
/// Attribute the flow to `(origin, destination)` pairs
/// through the intermediate tier.
///
/// Only pairs with nonzero attribution are in the result.
/// `UnknownNode` if an origin or a destination is not in the network.
///
pub fn attribute<N: NodeId, F: FlowRateLike>(
    network: &FlowNetwork<N, F>,
    origins: &[N],
    destinations: &[N],
    flow: &Flow<F>,
) -> Result<Attribution<N, F>> {
    if let Some(node) = origins
        .iter()
        .chain(destinations.iter())
        .find(|node| !network.contains(node))
    {
        return Err(FlowError::unknown_node(node));
    }

    let mut attribution: Attribution<N, F> = BTreeMap::new();

    for origin in origins {
        for first in network.edges_from(origin) {
            let f_first = flow.get(first.id).unwrap_or_else(F::zero);
            for destination in destinations {
                let Some(second) = network.find_edge(first.to, destination) else {
                    continue;
                };
                let f_second = flow.get(second.id).unwrap_or_else(F::zero);
                *attribution
                    .entry((origin.clone(), destination.clone()))
                    .or_insert_with(F::zero) += f_first.smaller(f_second);
            }
        }
    }

    attribution.retain(|_, f| f.is_movable());
    Ok(attribution)
}

/// Sum of out-going flow of each node
pub fn shipped_by<N: NodeId, F: FlowRateLike>(
    network: &FlowNetwork<N, F>,
    nodes: &[N],
    flow: &Flow<F>,
) -> Vec<(N, F)> {
    nodes
        .iter()
        .map(|node| {
            let total: F = network
                .edges_from(node)
                .iter()
                .filter_map(|edge| flow.get(edge.id))
                .sum();
            (node.clone(), total)
        })
        .collect()
}

/// Sum of in-coming flow of each node
pub fn received_by<N: NodeId, F: FlowRateLike>(
    network: &FlowNetwork<N, F>,
    nodes: &[N],
    flow: &Flow<F>,
) -> Vec<(N, F)> {
    nodes
        .iter()
        .map(|node| {
            let total: F = network
                .edges_into(node)
                .iter()
                .filter_map(|edge| flow.get(edge.id))
                .sum();
            (node.clone(), total)
        })
        .collect()
}
