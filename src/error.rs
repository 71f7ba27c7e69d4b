use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("invalid capacity {capacity} on edge {from} -> {to}: capacity must be non-negative")]
    InvalidCapacity {
        from: String,
        to: String,
        capacity: String,
    },

    #[error("unknown node: {node}")]
    UnknownNode { node: String },

    #[error("node {node} already exists in the network")]
    NodeCollision { node: String },

    #[error("augmenting path {path} has no bounded edge: maximum flow is unbounded")]
    UnboundedFlow { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl FlowError {
    pub fn unknown_node<N: std::fmt::Display>(node: &N) -> FlowError {
        FlowError::UnknownNode {
            node: node.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
