//!
//! Reporting of a solved network.
//!
//! `FlowReport` collects what the solver and the decomposer produced;
//! a `ReportGenerator` decides how it is presented.
//!
use crate::error::Result;
use crate::max_flow::decompose::Attribution;
use crate::max_flow::{Capacity, FlowRateLike, LogisticsNetwork, MaxFlow, NetworkEdge, NodeId};
use itertools::Itertools;
use std::io::Write;

/// Everything a report needs, detached from the network
#[derive(Debug, Clone)]
pub struct FlowReport<N, F: FlowRateLike> {
    pub total_flow: F,
    pub attribution: Attribution<N, F>,
    /// `(from, to, capacity)` of the min-cut edges
    pub min_cut: Vec<(N, N, Capacity<F>)>,
    /// `(from, to, capacity)` of the real edges used to their capacity
    pub saturated: Vec<(N, N, Capacity<F>)>,
    /// `(from, to, capacity)` of the real edges with the lowest capacity
    pub narrowest: Vec<(N, N, Capacity<F>)>,
    pub shipped: Vec<(N, F)>,
    pub received: Vec<(N, F)>,
}

impl<N: NodeId, F: FlowRateLike> FlowReport<N, F> {
    pub fn new(network: &LogisticsNetwork<N, F>, solution: &MaxFlow<F>) -> Result<Self> {
        let cut = solution.min_cut(network.network());
        Ok(FlowReport {
            total_flow: solution.value(),
            attribution: network.attribute(solution)?,
            min_cut: cut.edges.iter().map(edge_triple).collect(),
            saturated: network.saturated_edges(solution).iter().map(edge_triple).collect(),
            narrowest: network.narrowest_edges().iter().map(edge_triple).collect(),
            shipped: network.shipped_by_origin(solution),
            received: network.received_by_destination(solution),
        })
    }

    /// Origin shipping the most, first one on ties
    pub fn busiest_origin(&self) -> Option<&(N, F)> {
        self.shipped
            .iter()
            .reduce(|best, x| if x.1 > best.1 { x } else { best })
    }

    /// Destinations receiving the least, in the order given
    pub fn least_served(&self) -> Vec<&N> {
        let Some(least) = self.received.iter().map(|(_, f)| *f).reduce(|a, b| a.smaller(b)) else {
            return Vec::new();
        };
        self.received
            .iter()
            .filter(|(_, f)| f.sim_eq(least))
            .map(|(n, _)| n)
            .collect()
    }
}

fn edge_triple<N: NodeId, F: FlowRateLike>(edge: &NetworkEdge<'_, N, F>) -> (N, N, Capacity<F>) {
    (edge.from.clone(), edge.to.clone(), edge.capacity)
}

/// Presentation of a FlowReport
pub trait ReportGenerator<N, F: FlowRateLike> {
    fn generate(&self, report: &FlowReport<N, F>, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Plain text report, one fact per line
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl<N: NodeId, F: FlowRateLike> ReportGenerator<N, F> for TextReport {
    fn generate(&self, report: &FlowReport<N, F>, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Maximum flow: {}", report.total_flow)?;

        writeln!(out)?;
        writeln!(out, "Flow from origins to destinations:")?;
        for ((origin, destination), flow) in report.attribution.iter() {
            writeln!(out, "  {} -> {}: {}", origin, destination, flow)?;
        }

        writeln!(out)?;
        writeln!(out, "Shipped by origin:")?;
        for (origin, flow) in report.shipped.iter() {
            writeln!(out, "  {}: {}", origin, flow)?;
        }
        if let Some((origin, flow)) = report.busiest_origin() {
            writeln!(out, "  busiest: {} ({})", origin, flow)?;
        }

        writeln!(out)?;
        writeln!(out, "Received by destination:")?;
        for (destination, flow) in report.received.iter() {
            writeln!(out, "  {}: {}", destination, flow)?;
        }
        let least = report.least_served();
        if !least.is_empty() {
            writeln!(out, "  least served: {}", least.iter().join(", "))?;
        }

        writeln!(out)?;
        writeln!(out, "Minimum cut:")?;
        for (from, to, capacity) in report.min_cut.iter() {
            writeln!(out, "  {} -> {} ({})", from, to, capacity)?;
        }

        writeln!(out)?;
        writeln!(out, "Saturated edges:")?;
        for (from, to, capacity) in report.saturated.iter() {
            writeln!(out, "  {} -> {} ({})", from, to, capacity)?;
        }

        writeln!(out)?;
        writeln!(out, "Narrowest route:")?;
        for (from, to, capacity) in report.narrowest.iter() {
            writeln!(out, "  {} -> {} ({})", from, to, capacity)?;
        }
        Ok(())
    }
}
