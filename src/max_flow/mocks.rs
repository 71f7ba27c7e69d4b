//! mock graph generation functions
use super::network::{FlowNetwork, LogisticsNetwork};
use crate::config::network::{REFERENCE_DESTINATIONS, REFERENCE_EDGES, REFERENCE_ORIGINS};

/// s -> a -> b -> t with capacities 5, 10, 5
pub fn mock_flow_network1() -> FlowNetwork<&'static str, usize> {
    FlowNetwork::from_edges(vec![("s", "a", 5), ("a", "b", 10), ("b", "t", 5)]).unwrap()
}

/// S -(inf)-> A -(7)-> T
pub fn mock_unbounded_network() -> FlowNetwork<&'static str, usize> {
    let mut graph = FlowNetwork::new();
    graph.add_unbounded_edge("S", "A");
    graph.add_edge("A", "T", 7).unwrap();
    graph
}

/// S -> A (10), A -> T (4), A -> U (10), U -> T (10)
pub fn mock_worked_example() -> FlowNetwork<&'static str, usize> {
    FlowNetwork::from_edges(vec![
        ("S", "A", 10),
        ("A", "T", 4),
        ("A", "U", 10),
        ("U", "T", 10),
    ])
    .unwrap()
}

///
/// The only shortest path s -> a -> b -> t has to be undone on a -> b
/// to reach the maximum flow 2.
///
/// ```text
/// s -> a -> b -> t
///      |    ^
///      v    |
///      c    f
///      |    ^
///      v    |
///      e    d
///      |    ^
///      v    |
///      t    s
/// ```
///
pub fn mock_cancellation_network() -> FlowNetwork<&'static str, usize> {
    FlowNetwork::from_edges(vec![
        ("s", "a", 1),
        ("a", "b", 1),
        ("b", "t", 1),
        ("a", "c", 1),
        ("c", "e", 1),
        ("e", "t", 1),
        ("s", "d", 1),
        ("d", "f", 1),
        ("f", "b", 1),
    ])
    .unwrap()
}

/// origins O1, O2 / intermediates M1, M2 / destinations D1, D2
pub fn mock_two_tier_network() -> FlowNetwork<&'static str, usize> {
    FlowNetwork::from_edges(vec![
        ("O1", "M1", 4),
        ("O1", "M2", 5),
        ("O2", "M2", 6),
        ("M1", "D1", 4),
        ("M2", "D1", 3),
        ("M2", "D2", 3),
    ])
    .unwrap()
}

/// `mock_two_tier_network` wired to super-source `S` and super-sink `T`
pub fn mock_logistics_network() -> LogisticsNetwork<&'static str, usize> {
    LogisticsNetwork::new(
        mock_two_tier_network(),
        vec!["O1", "O2"],
        vec!["D1", "D2"],
        "S",
        "T",
    )
    .unwrap()
}

/// terminals/warehouses/shops reference network with integer capacities
pub fn mock_reference_network() -> LogisticsNetwork<&'static str, usize> {
    let network = FlowNetwork::from_edges(
        REFERENCE_EDGES
            .iter()
            .map(|&(from, to, capacity)| (from, to, capacity as usize)),
    )
    .unwrap();
    LogisticsNetwork::new(
        network,
        REFERENCE_ORIGINS.to_vec(),
        REFERENCE_DESTINATIONS.to_vec(),
        "Super Source",
        "Super Sink",
    )
    .unwrap()
}
