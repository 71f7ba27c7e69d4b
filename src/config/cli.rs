use super::network::NetworkConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "logiflow")]
#[command(about = "Maximum flow and origin-destination attribution of a logistics network")]
pub struct CliConfig {
    #[arg(
        long,
        short,
        help = "TOML network description (defaults to the built-in reference network)"
    )]
    pub network: Option<PathBuf>,

    #[arg(long, help = "Print the solved network in Graphviz DOT format")]
    pub dot: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Network described by `--network`, or the reference network
    pub fn load_network(&self) -> Result<NetworkConfig> {
        match &self.network {
            Some(path) => {
                tracing::info!("loading network from {}", path.display());
                NetworkConfig::from_file(path)
            }
            None => {
                tracing::info!("using the built-in reference network");
                Ok(NetworkConfig::reference())
            }
        }
    }
}
