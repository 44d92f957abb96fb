//! Command-line and environment configuration.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "inventory", about = "Inventory product service")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "INVENTORY_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// JSON file the product collection is loaded from and flushed to.
    #[arg(long, env = "INVENTORY_DATA_FILE", default_value = "data/product.json")]
    pub data_file: PathBuf,

    /// Bound of the product actor's request queue.
    #[arg(
        long,
        env = "INVENTORY_CHANNEL_CAPACITY",
        default_value_t = 32,
        value_parser = parse_capacity
    )]
    pub channel_capacity: usize,
}

fn parse_capacity(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
