//! Address classification
//!
//! Each chain family is a plain regex predicate. The predicates are run
//! independently, so one input can produce candidates for several families.
//! Nothing here decodes or checksums an address.

use crate::core::chain::templates_for;
use crate::core::link::ChainLink;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EVM_ADDRESS: Lazy<Regex> = Lazy::new(|| compile(r"^0x[a-fA-F0-9]{40}$"));

// Legacy/P2SH and short bech32, then long bech32. The class only drops
// uppercase I and O, so it is looser than real base58.
static BITCOIN_ADDRESS: Lazy<Regex> =
    Lazy::new(|| compile(r"^(1|3|bc1)[a-zA-HJ-NP-Z0-9]{25,39}$"));
static BITCOIN_BECH32_ADDRESS: Lazy<Regex> =
    Lazy::new(|| compile(r"^(bc1)[a-zA-HJ-NP-Z0-9]{39,59}$"));

static SOLANA_ADDRESS: Lazy<Regex> =
    Lazy::new(|| compile(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$"));

static TRON_ADDRESS: Lazy<Regex> = Lazy::new(|| compile(r"^T[a-zA-Z0-9]{33}$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("address pattern must compile")
}

/// Address families we know how to recognise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFormat {
    Evm,
    Bitcoin,
    Solana,
    Tron,
}

impl AddressFormat {
    /// Order in which candidates are emitted
    pub const ALL: [AddressFormat; 4] = [
        AddressFormat::Evm,
        AddressFormat::Bitcoin,
        AddressFormat::Solana,
        AddressFormat::Tron,
    ];

    pub fn matches(&self, address: &str) -> bool {
        match self {
            AddressFormat::Evm => EVM_ADDRESS.is_match(address),
            AddressFormat::Bitcoin => {
                BITCOIN_ADDRESS.is_match(address) || BITCOIN_BECH32_ADDRESS.is_match(address)
            }
            AddressFormat::Solana => SOLANA_ADDRESS.is_match(address),
            AddressFormat::Tron => TRON_ADDRESS.is_match(address),
        }
    }
}

impl fmt::Display for AddressFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressFormat::Evm => "evm",
            AddressFormat::Bitcoin => "bitcoin",
            AddressFormat::Solana => "solana",
            AddressFormat::Tron => "tron",
        };
        f.pad(name)
    }
}

/// All families whose pattern accepts `address`
pub fn detect_formats(address: &str) -> Vec<AddressFormat> {
    AddressFormat::ALL
        .iter()
        .copied()
        .filter(|format| format.matches(address))
        .collect()
}

/// Build one explorer link per matching chain.
///
/// An empty result means the input is not a wallet address we support.
pub fn classify(address: &str) -> Vec<ChainLink> {
    let links: Vec<ChainLink> = detect_formats(address)
        .into_iter()
        .flat_map(templates_for)
        .map(|template| template.link_for(address))
        .collect();

    log::debug!("Classified {address:?} into {} candidate(s)", links.len());
    links
}
