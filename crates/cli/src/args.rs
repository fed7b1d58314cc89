use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockroom_infra::DEFAULT_INVENTORY_PATH;
use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, ZeroStockPolicy};

/// stockroom - minimal inventory tracker
#[derive(Parser, Debug, Clone)]
#[command(name = "stockroom")]
#[command(about = "Track item quantities in a JSON file", long_about = None)]
pub struct Cli {
    /// Inventory data file (or set STOCKROOM_DATA_FILE env var)
    #[arg(short, long, global = true, env = "STOCKROOM_DATA_FILE", default_value = DEFAULT_INVENTORY_PATH)]
    pub data_file: PathBuf,

    /// What add does with entries that end at zero or below: retain or prune
    #[arg(long, global = true, env = "STOCKROOM_ZERO_POLICY", default_value_t = ZeroStockPolicy::Retain)]
    pub zero_policy: ZeroStockPolicy,

    /// Log level (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Runs the demonstration sequence when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the demonstration sequence against the data file
    Demo,
    /// Add stock for an item
    Add {
        item: String,
        /// Integer quantity (may be negative)
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Remove stock for an item; unknown items are ignored
    Remove {
        item: String,
        #[arg(allow_hyphen_values = true)]
        qty: String,
    },
    /// Print the quantity of one item
    Qty { item: String },
    /// Print every item and its quantity
    Report,
    /// List items below a threshold
    Low {
        #[arg(
            short,
            long,
            env = "STOCKROOM_LOW_THRESHOLD",
            default_value_t = DEFAULT_LOW_STOCK_THRESHOLD,
            allow_negative_numbers = true
        )]
        threshold: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_demo_and_inventory_json() {
        let cli = Cli::try_parse_from(["stockroom"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.data_file, PathBuf::from("inventory.json"));
        assert_eq!(cli.zero_policy, ZeroStockPolicy::Retain);
    }

    #[test]
    fn negative_quantities_are_positional_values() {
        let cli = Cli::try_parse_from(["stockroom", "add", "banana", "-2"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Add {
                item: "banana".to_string(),
                qty: "-2".to_string()
            })
        );
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "stockroom",
            "low",
            "--threshold",
            "10",
            "--data-file",
            "stock.json",
            "--zero-policy",
            "prune",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Command::Low { threshold: 10 }));
        assert_eq!(cli.data_file, PathBuf::from("stock.json"));
        assert_eq!(cli.zero_policy, ZeroStockPolicy::Prune);
    }

    #[test]
    fn unknown_policy_is_a_usage_error() {
        assert!(Cli::try_parse_from(["stockroom", "--zero-policy", "clamp"]).is_err());
    }
}
