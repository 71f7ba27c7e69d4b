//!
//! Edge capacity `Capacity<F>`: either a bounded amount or unbounded.
//!
use super::FlowRateLike;

/// Capacity of an edge of the FlowNetwork, or the remaining movable amount
/// of an edge of the ResidueGraph.
///
/// * `Bounded(u)`: at most `u` (`u >= 0`)
/// * `Unbounded`: no upper limit (used by super-source/super-sink wiring)
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Capacity<F: FlowRateLike> {
    Bounded(F),
    Unbounded,
}

impl<F: FlowRateLike> Capacity<F> {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Capacity::Unbounded)
    }
    /// the amount if bounded
    pub fn bounded(&self) -> Option<F> {
        match *self {
            Capacity::Bounded(u) => Some(u),
            Capacity::Unbounded => None,
        }
    }
    /// true if some positive amount can still pass
    pub fn has_room(&self) -> bool {
        match *self {
            Capacity::Bounded(u) => u.is_movable(),
            Capacity::Unbounded => true,
        }
    }
    /// `self + amount`. Unbounded absorbs any amount.
    pub fn increase(self, amount: F) -> Capacity<F> {
        match self {
            Capacity::Bounded(u) => Capacity::Bounded(u + amount),
            Capacity::Unbounded => Capacity::Unbounded,
        }
    }
    /// `self - amount`. Unbounded absorbs any amount.
    pub fn decrease(self, amount: F) -> Capacity<F> {
        match self {
            Capacity::Bounded(u) => Capacity::Bounded(u - amount),
            Capacity::Unbounded => Capacity::Unbounded,
        }
    }
    /// sum of two capacities (merging of parallel edges)
    pub fn merge(self, other: Capacity<F>) -> Capacity<F> {
        match other {
            Capacity::Bounded(u) => self.increase(u),
            Capacity::Unbounded => Capacity::Unbounded,
        }
    }
    /// true if `flow` fills the capacity
    pub fn is_saturated_by(&self, flow: F) -> bool {
        match *self {
            Capacity::Bounded(u) => flow.sim_eq(u),
            Capacity::Unbounded => false,
        }
    }
    /// true if `flow` does not exceed the capacity
    pub fn admits(&self, flow: F) -> bool {
        match *self {
            Capacity::Bounded(u) => flow <= u || flow.sim_eq(u),
            Capacity::Unbounded => true,
        }
    }
}

impl<F: FlowRateLike> std::fmt::Display for Capacity<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capacity::Bounded(u) => write!(f, "{}", u),
            Capacity::Unbounded => write!(f, "inf"),
        }
    }
}
