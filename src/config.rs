pub mod cli;
pub mod network;

pub use cli::CliConfig;
pub use network::{EdgeConfig, NetworkConfig};

use crate::error::Result;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}
