use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "wallet-explorer", about = "Find block-explorer links for a wallet address")]
pub struct Opt {
    #[arg(
        long = "data-dir",
        global = true,
        help = "Directory for local data (defaults to $WALLET_EXPLORER_DATA_DIR or ./data)"
    )]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "lookup", about = "List explorer links for an address")]
    Lookup {
        #[arg(help = "The wallet address")]
        address: String,
    },
    #[command(name = "favorites", about = "List saved favorites")]
    Favorites {
        #[arg(long = "clear", help = "Remove every favorite")]
        clear: bool,
    },
    #[command(name = "add", about = "Save an address/network pair as a favorite")]
    Add {
        #[arg(help = "The wallet address")]
        address: String,
        #[arg(help = "Network tag, e.g. eth, arb, btc, solana, tron")]
        network: String,
    },
    #[command(name = "remove", about = "Remove a favorite")]
    Remove {
        #[arg(help = "The wallet address")]
        address: String,
        #[arg(help = "Network tag")]
        network: String,
    },
    #[command(name = "toggle", about = "Add the favorite if missing, remove it otherwise")]
    Toggle {
        #[arg(help = "The wallet address")]
        address: String,
        #[arg(help = "Network tag")]
        network: String,
    },
    #[command(name = "check", about = "Tell whether an address/network pair is a favorite")]
    Check {
        #[arg(help = "The wallet address")]
        address: String,
        #[arg(help = "Network tag")]
        network: String,
    },
    #[command(name = "url", about = "Print the explorer URL for an address on one network")]
    Url {
        #[arg(help = "The wallet address")]
        address: String,
        #[arg(help = "Network tag")]
        network: String,
    },
    #[command(name = "networks", about = "List supported networks and explorers")]
    Networks,
}
