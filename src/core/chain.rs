// The explorer table. Candidate generation and favorite display both read
// from CHAIN_LINKS so the two can't drift apart.

use crate::core::classifier::AddressFormat;
use crate::core::link::ChainLink;

const ADDRESS_PLACEHOLDER: &str = "{address}";

/// One explorer for one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainLinkTemplate {
    pub network: &'static str,
    pub title: &'static str,
    pub explorer: &'static str,
    pub url_template: &'static str,
    pub icon: &'static str,
    pub format: AddressFormat,
}

impl ChainLinkTemplate {
    pub fn url_for(&self, address: &str) -> String {
        self.url_template.replace(ADDRESS_PLACEHOLDER, address)
    }

    pub fn link_for(&self, address: &str) -> ChainLink {
        ChainLink {
            address: address.to_string(),
            network: self.network.to_string(),
            title: self.title.to_string(),
            url: self.url_for(address),
            icon: self.icon.to_string(),
        }
    }
}

const fn evm(
    network: &'static str,
    title: &'static str,
    explorer: &'static str,
    url_template: &'static str,
    icon: &'static str,
) -> ChainLinkTemplate {
    ChainLinkTemplate {
        network,
        title,
        explorer,
        url_template,
        icon,
        format: AddressFormat::Evm,
    }
}

/// Every supported explorer. EVM entries come first, in display order.
#[rustfmt::skip]
pub static CHAIN_LINKS: &[ChainLinkTemplate] = &[
    evm("eth", "View on Etherscan", "Etherscan", "https://etherscan.io/address/{address}", "ethereum.png"),
    evm("debank", "View on Debank", "Debank", "https://debank.com/profile/{address}", "debank.png"),
    evm("arb", "View on Arbiscan", "Arbiscan", "https://arbiscan.io/address/{address}", "arbitrum.png"),
    evm("zksync", "View on Zkscan", "Zkscan", "https://explorer.zksync.io/address/{address}", "zksync.png"),
    evm("optimism", "View on Optimism", "Optimism", "https://optimistic.etherscan.io/address/{address}", "optimism.png"),
    evm("base", "View on Base", "Base", "https://basescan.org/address/{address}", "base.png"),
    evm("bsc", "View on BscScan", "BscScan", "https://bscscan.com/address/{address}", "bsc.png"),
    evm("avax", "View on Snowtrace", "Snowtrace", "https://snowtrace.io/address/{address}", "avax.png"),
    evm("matic", "View on Polygonscan", "Polygonscan", "https://polygonscan.com/address/{address}", "matic.png"),
    evm("ftm", "View on FtmScan", "FtmScan", "https://ftmscan.com/address/{address}", "ftm.png"),
    evm("inj", "View on Injective", "Injective", "https://explorer.injective.network/account/{address}", "inj.png"),
    evm("mnt", "View on Mantle", "Mantle", "https://explorer.mantle.xyz/address/{address}", "mnt.png"),
    evm("manta", "View on Manta", "Manta", "https://manta.socialscan.io/address/{address}", "manta.png"),
    evm("linea", "View on Linea", "Linea", "https://explorer.linea.build/address/{address}", "linea.png"),
    evm("scroll", "View on Scroll", "Scroll", "https://scrollscan.com/address/{address}", "scroll.png"),
    evm("blast", "View on Blast", "Blast", "https://blastscan.io/address/{address}", "blast.png"),
    ChainLinkTemplate {
        network: "btc",
        title: "View on Blockchain.com",
        explorer: "Blockchain.com",
        url_template: "https://www.blockchain.com/btc/address/{address}",
        icon: "bitcoin.png",
        format: AddressFormat::Bitcoin,
    },
    ChainLinkTemplate {
        network: "solana",
        title: "View on Solscan",
        explorer: "Solscan",
        url_template: "https://solscan.io/account/{address}",
        icon: "solana.png",
        format: AddressFormat::Solana,
    },
    ChainLinkTemplate {
        network: "tron",
        title: "View on Tronscan",
        explorer: "Tronscan",
        url_template: "https://tronscan.org/#/address/{address}",
        icon: "tron.png",
        format: AddressFormat::Tron,
    },
];

pub fn template_for(network: &str) -> Option<&'static ChainLinkTemplate> {
    CHAIN_LINKS.iter().find(|t| t.network == network)
}

pub fn templates_for(format: AddressFormat) -> impl Iterator<Item = &'static ChainLinkTemplate> {
    CHAIN_LINKS.iter().filter(move |t| t.format == format)
}
