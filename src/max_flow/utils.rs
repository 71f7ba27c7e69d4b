//!
//! utils
//!
use super::flow::Flow;
use super::network::{FlowNetwork, NodeId};
use super::FlowRateLike;
use petgraph::dot::Dot;

///
/// Graphviz DOT of the network, edges labeled by `flow/capacity`
///
pub fn draw_with_flow<N: NodeId, F: FlowRateLike>(
    network: &FlowNetwork<N, F>,
    flow: &Flow<F>,
) -> String {
    let labeled = network.graph().map(
        |_, node| node.to_string(),
        |e, capacity| {
            let f = flow.get(e).unwrap_or_else(F::zero);
            format!("{}/{}", f, capacity)
        },
    );
    format!("{}", Dot::with_config(&labeled, &[]))
}
