use super::Validate;
use crate::error::{FlowError, Result};
use crate::max_flow::{FlowNetwork, LogisticsNetwork};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Edges of the reference terminals -> warehouses -> shops network
pub const REFERENCE_EDGES: [(&str, &str, u32); 20] = [
    ("Terminal 1", "Warehouse 1", 25),
    ("Terminal 1", "Warehouse 2", 20),
    ("Terminal 1", "Warehouse 3", 15),
    ("Terminal 2", "Warehouse 3", 15),
    ("Terminal 2", "Warehouse 4", 30),
    ("Terminal 2", "Warehouse 2", 10),
    ("Warehouse 1", "Shop 1", 15),
    ("Warehouse 1", "Shop 2", 10),
    ("Warehouse 1", "Shop 3", 20),
    ("Warehouse 2", "Shop 4", 15),
    ("Warehouse 2", "Shop 5", 10),
    ("Warehouse 2", "Shop 6", 25),
    ("Warehouse 3", "Shop 7", 20),
    ("Warehouse 3", "Shop 8", 15),
    ("Warehouse 3", "Shop 9", 10),
    ("Warehouse 4", "Shop 10", 20),
    ("Warehouse 4", "Shop 11", 10),
    ("Warehouse 4", "Shop 12", 15),
    ("Warehouse 4", "Shop 13", 5),
    ("Warehouse 4", "Shop 14", 10),
];

pub const REFERENCE_ORIGINS: [&str; 2] = ["Terminal 1", "Terminal 2"];

pub const REFERENCE_DESTINATIONS: [&str; 14] = [
    "Shop 1", "Shop 2", "Shop 3", "Shop 4", "Shop 5", "Shop 6", "Shop 7", "Shop 8", "Shop 9",
    "Shop 10", "Shop 11", "Shop 12", "Shop 13", "Shop 14",
];

fn default_super_source() -> String {
    "Super Source".to_string()
}

fn default_super_sink() -> String {
    "Super Sink".to_string()
}

/// Network description file
///
/// ```toml
/// origins = ["Terminal 1"]
/// destinations = ["Shop 1"]
///
/// [[edges]]
/// from = "Terminal 1"
/// to = "Shop 1"
/// capacity = 25
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    #[serde(default = "default_super_source")]
    pub super_source: String,
    #[serde(default = "default_super_sink")]
    pub super_sink: String,
    pub edges: Vec<EdgeConfig>,
}

/// An edge; without `capacity` it is unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    pub capacity: Option<f64>,
}

impl NetworkConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: NetworkConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// The terminals -> warehouses -> shops reference network
    pub fn reference() -> Self {
        NetworkConfig {
            origins: REFERENCE_ORIGINS.iter().map(|s| s.to_string()).collect(),
            destinations: REFERENCE_DESTINATIONS.iter().map(|s| s.to_string()).collect(),
            super_source: default_super_source(),
            super_sink: default_super_sink(),
            edges: REFERENCE_EDGES
                .iter()
                .map(|&(from, to, capacity)| EdgeConfig {
                    from: from.to_string(),
                    to: to.to_string(),
                    capacity: Some(f64::from(capacity)),
                })
                .collect(),
        }
    }

    ///
    /// Validate and build the network wired to the super-source and super-sink.
    ///
    /// Edges are inserted in file order, which fixes the tie-breaking order of the solver.
    ///
    pub fn build(&self) -> Result<LogisticsNetwork<String, f64>> {
        self.validate()?;

        let mut network = FlowNetwork::new();
        for edge in self.edges.iter() {
            match edge.capacity {
                Some(capacity) => {
                    network.add_edge(edge.from.clone(), edge.to.clone(), capacity)?;
                }
                None => {
                    network.add_unbounded_edge(edge.from.clone(), edge.to.clone());
                }
            }
        }
        tracing::debug!(
            "built network with {} nodes and {} edges",
            network.node_count(),
            network.edge_count()
        );

        LogisticsNetwork::new(
            network,
            self.origins.clone(),
            self.destinations.clone(),
            self.super_source.clone(),
            self.super_sink.clone(),
        )
    }
}

impl Validate for NetworkConfig {
    fn validate(&self) -> Result<()> {
        if self.edges.is_empty() {
            return Err(config_error("network has no edges"));
        }
        if self.origins.is_empty() {
            return Err(config_error("at least one origin is required"));
        }
        if self.destinations.is_empty() {
            return Err(config_error("at least one destination is required"));
        }

        let origins: HashSet<&str> = self.origins.iter().map(|s| s.as_str()).collect();
        if let Some(node) = self.destinations.iter().find(|d| origins.contains(d.as_str())) {
            return Err(config_error(&format!(
                "{} is both an origin and a destination",
                node
            )));
        }

        if self.super_source == self.super_sink {
            return Err(config_error("super_source and super_sink must differ"));
        }
        for edge in self.edges.iter() {
            for node in [&edge.from, &edge.to] {
                if node == &self.super_source || node == &self.super_sink {
                    return Err(FlowError::NodeCollision { node: node.clone() });
                }
            }
        }

        Ok(())
    }
}

fn config_error(message: &str) -> FlowError {
    FlowError::Config {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::max_flow::FlowRateLike;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL: &str = r#"
origins = ["O1"]
destinations = ["D1", "D2"]

[[edges]]
from = "O1"
to = "M"
capacity = 5

[[edges]]
from = "M"
to = "D1"
capacity = 3

[[edges]]
from = "M"
to = "D2"
capacity = 1.5
"#;

    #[test]
    fn parse_basic_network() {
        let config = NetworkConfig::from_toml_str(SMALL).unwrap();
        assert_eq!(config.origins, vec!["O1"]);
        assert_eq!(config.destinations, vec!["D1", "D2"]);
        assert_eq!(config.super_source, "Super Source");
        assert_eq!(config.super_sink, "Super Sink");
        assert_eq!(config.edges.len(), 3);
        assert_eq!(config.edges[0].capacity, Some(5.0));
        assert_eq!(config.edges[2].capacity, Some(1.5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn build_and_solve() {
        let ln = NetworkConfig::from_toml_str(SMALL).unwrap().build().unwrap();
        let mf = ln.solve().unwrap();
        assert!(mf.value().sim_eq(4.5));
        let a = ln.attribute(&mf).unwrap();
        assert!(a[&("O1".to_string(), "D1".to_string())].sim_eq(3.0));
        assert!(a[&("O1".to_string(), "D2".to_string())].sim_eq(1.5));
    }

    #[test]
    fn missing_capacity_is_unbounded() {
        let toml = r#"
origins = ["O"]
destinations = ["D"]
super_source = "SRC"
super_sink = "SNK"

[[edges]]
from = "O"
to = "M"

[[edges]]
from = "M"
to = "D"
capacity = 2
"#;
        let ln = NetworkConfig::from_toml_str(toml).unwrap().build().unwrap();
        assert_eq!(ln.super_source(), "SRC");
        let e = ln.network().find_edge(&"O".to_string(), &"M".to_string()).unwrap();
        assert!(e.capacity.is_unbounded());
        assert!(ln.solve().unwrap().value().sim_eq(2.0));
    }

    #[test]
    fn negative_capacity_aborts_build() {
        let toml = r#"
origins = ["O"]
destinations = ["D"]

[[edges]]
from = "O"
to = "D"
capacity = -1
"#;
        let r = NetworkConfig::from_toml_str(toml).unwrap().build();
        assert!(matches!(r, Err(FlowError::InvalidCapacity { .. })));
    }

    #[test]
    fn validation_errors() {
        let mut config = NetworkConfig::from_toml_str(SMALL).unwrap();
        config.destinations.push("O1".to_string());
        assert!(matches!(config.validate(), Err(FlowError::Config { .. })));

        let mut config = NetworkConfig::from_toml_str(SMALL).unwrap();
        config.origins.clear();
        assert!(matches!(config.validate(), Err(FlowError::Config { .. })));

        let mut config = NetworkConfig::from_toml_str(SMALL).unwrap();
        config.super_sink = "M".to_string();
        assert!(matches!(
            config.validate(),
            Err(FlowError::NodeCollision { node }) if node == "M"
        ));

        let mut config = NetworkConfig::from_toml_str(SMALL).unwrap();
        config.destinations.push("D9".to_string());
        assert!(matches!(config.build(), Err(FlowError::UnknownNode { .. })));
    }

    #[test]
    fn malformed_toml() {
        let r = NetworkConfig::from_toml_str("origins = [");
        assert!(matches!(r, Err(FlowError::Toml(_))));
    }

    #[test]
    fn config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SMALL.as_bytes()).unwrap();
        let config = NetworkConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.edges.len(), 3);
    }

    #[test]
    fn reference_network() {
        let config = NetworkConfig::reference();
        assert!(config.validate().is_ok());
        let ln = config.build().unwrap();
        assert_eq!(ln.network().node_count(), 2 + 4 + 14 + 2);
        let mf = ln.solve().unwrap();
        assert!(mf.value().sim_eq(115.0));
    }
}
