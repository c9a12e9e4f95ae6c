use clap::{Parser, Subcommand};

use crate::catalog::Catalog;
use crate::error::{Result, StockError};
use crate::packer::{PoolEntry, MAX_PROPORTION};
use crate::session::DEFAULT_DAILY_CALORIES;

/// Survival stock calculator: sizes, auto-packs, and prices a long-term food supply.
#[derive(Parser, Debug)]
#[command(name = "survival_stock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a catalog JSON file (defaults to the built-in catalog).
    #[arg(short, long)]
    pub catalog: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive planning session.
    Plan,

    /// One-shot automatic packing run.
    Auto {
        /// Stock duration in days.
        #[arg(long, default_value_t = 30)]
        days: u32,

        /// Number of people to feed.
        #[arg(long, default_value_t = 1)]
        people: u32,

        /// Daily caloric target per person.
        #[arg(long, default_value_t = DEFAULT_DAILY_CALORIES)]
        daily_calories: u32,

        /// Container type id to fill.
        #[arg(long, default_value = "box")]
        container: String,

        /// Pool entries as id=proportion, e.g. buckwheat=10,rice=5.
        #[arg(long, value_delimiter = ',', required = true)]
        pool: Vec<String>,

        /// Interleave packet types across containers.
        #[arg(long)]
        mix: bool,
    },

    /// Print the food packet and container catalog.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}

/// Parse `id=proportion` pool arguments against the catalog.
pub fn parse_pool(catalog: &Catalog, raw: &[String]) -> Result<Vec<PoolEntry>> {
    let mut pool = Vec::with_capacity(raw.len());

    for arg in raw {
        let (id, proportion) = match arg.split_once('=') {
            Some((id, value)) => {
                let proportion: u32 = value.trim().parse().map_err(|_| {
                    StockError::InvalidInput(format!("invalid proportion in '{}'", arg))
                })?;
                (id.trim(), proportion)
            }
            // Bare id defaults to full proportion.
            None => (arg.trim(), MAX_PROPORTION),
        };

        if proportion > MAX_PROPORTION {
            return Err(StockError::InvalidInput(format!(
                "proportion in '{}' exceeds {}",
                arg, MAX_PROPORTION
            )));
        }

        let packet = catalog
            .get_packet(id)
            .ok_or_else(|| StockError::UnknownPacket(id.to_string()))?;

        if pool.iter().any(|e: &PoolEntry| e.packet_id == packet.id) {
            return Err(StockError::InvalidInput(format!(
                "duplicate pool entry: {}",
                packet.id
            )));
        }
        pool.push(PoolEntry::new(&packet.id, proportion));
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_pool() {
        let catalog = Catalog::builtin();
        let pool = parse_pool(&catalog, &args(&["buckwheat=10", "rice=5", "salt"])).unwrap();

        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0], PoolEntry::new("buckwheat", 10));
        assert_eq!(pool[1], PoolEntry::new("rice", 5));
        // Bare id defaults to the maximum proportion.
        assert_eq!(pool[2], PoolEntry::new("salt", MAX_PROPORTION));
    }

    #[test]
    fn test_parse_pool_rejects_bad_input() {
        let catalog = Catalog::builtin();

        assert!(parse_pool(&catalog, &args(&["caviar=10"])).is_err());
        assert!(parse_pool(&catalog, &args(&["buckwheat=eleven"])).is_err());
        assert!(parse_pool(&catalog, &args(&["buckwheat=11"])).is_err());
        assert!(parse_pool(&catalog, &args(&["buckwheat=5", "buckwheat=5"])).is_err());
    }
}
