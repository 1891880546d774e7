//! Wallet explorer integration tests
//!
//! Exercises the public API end to end: classification, the favorites
//! store on disk, and a session driving both.

use tempfile::tempdir;
use wallet_explorer::{
    classify, template_for, Action, FavoritesStore, Session, WalletFavorite, CHAIN_LINKS,
};

const DEAD_ADDRESS: &str = "0x000000000000000000000000000000000000dEaD";
const TRON_ADDRESS: &str = "TXYZabc123defghjkmnpqrstuvwxyz4567";
const GENESIS_ADDRESS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";

#[test]
fn test_evm_address_gets_every_evm_explorer() {
    let links = classify(DEAD_ADDRESS);
    assert_eq!(links.len(), 16);

    let networks: Vec<&str> = links.iter().map(|l| l.network.as_str()).collect();
    assert_eq!(
        networks,
        vec![
            "eth", "debank", "arb", "zksync", "optimism", "base", "bsc", "avax", "matic", "ftm",
            "inj", "mnt", "manta", "linea", "scroll", "blast"
        ]
    );

    let eth = &links[0];
    assert_eq!(
        eth.url,
        "https://etherscan.io/address/0x000000000000000000000000000000000000dEaD"
    );
    assert!(links.iter().all(|l| l.url.contains(DEAD_ADDRESS)));
}

#[test]
fn test_tron_address_gets_tronscan() {
    assert_eq!(TRON_ADDRESS.len(), 34);
    let links = classify(TRON_ADDRESS);
    let tron: Vec<_> = links.iter().filter(|l| l.network == "tron").collect();

    assert_eq!(tron.len(), 1);
    assert_eq!(
        tron[0].url,
        format!("https://tronscan.org/#/address/{TRON_ADDRESS}")
    );
}

#[test]
fn test_base58_bitcoin_address_also_fits_solana() {
    // Independent checks: a 34-char P2PKH address is valid base58 of Solana length
    let links = classify(GENESIS_ADDRESS);
    let networks: Vec<&str> = links.iter().map(|l| l.network.as_str()).collect();
    assert_eq!(networks, vec!["btc", "solana"]);
}

#[test]
fn test_unmatched_input_is_empty() {
    assert!(classify("").is_empty());
    assert!(classify("not-an-address").is_empty());
}

#[test]
fn test_candidates_and_favorites_share_one_table() {
    for link in classify(DEAD_ADDRESS) {
        let fav = link.to_favorite();
        let resolved = fav.resolve_link();
        assert_eq!(resolved.url, link.url);
        assert_eq!(resolved.icon, link.icon);
        assert_eq!(resolved.title, link.title);
    }
    assert!(CHAIN_LINKS
        .iter()
        .all(|t| template_for(t.network) == Some(t)));
}

#[test]
fn test_favorites_persist_across_sessions() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("favorites");

    {
        let store = FavoritesStore::open(&db_path).unwrap();
        let mut session = Session::new(store);
        session.set_search_text(DEAD_ADDRESS);
        let eth = session.require_candidate("eth").unwrap();
        let arb = session.require_candidate("arb").unwrap();
        session.toggle_favorite(&eth).unwrap();
        session.toggle_favorite(&arb).unwrap();
    }

    let store = FavoritesStore::open(&db_path).unwrap();
    let session = Session::new(store);
    let networks: Vec<&str> = session
        .favorites()
        .iter()
        .map(|f| f.network.as_str())
        .collect();
    assert_eq!(networks, vec!["eth", "arb"]);

    let view = session.view();
    assert_eq!(view[0].title, "Favorites");
    assert_eq!(view[0].items.len(), 2);
    assert_eq!(view[0].items[1].accessory.as_deref(), Some("View on Arbiscan"));
}

#[test]
fn test_add_is_idempotent_and_remove_clears() {
    let temp_dir = tempdir().unwrap();
    let store = FavoritesStore::open(temp_dir.path().join("favorites")).unwrap();

    let entry = classify(TRON_ADDRESS)
        .into_iter()
        .find(|l| l.network == "tron")
        .unwrap()
        .to_favorite();

    let mut favorites: Vec<WalletFavorite> = store.list();
    for _ in 0..5 {
        favorites = store.add(&entry, &favorites).unwrap();
    }
    assert_eq!(store.list().len(), 1);

    store.remove(&entry, &favorites).unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn test_search_result_actions_follow_membership() {
    let temp_dir = tempdir().unwrap();
    let store = FavoritesStore::open(temp_dir.path().join("favorites")).unwrap();
    let mut session = Session::new(store);
    session.set_search_text(DEAD_ADDRESS);

    let section = session.search_results_section();
    let add = section.items[0].actions[1].clone();
    assert!(matches!(add, Action::AddToFavorites(_)));
    session.apply(&add).unwrap();

    let section = session.search_results_section();
    assert!(matches!(
        section.items[0].actions[1],
        Action::RemoveFromFavorites(_)
    ));
    assert_eq!(
        section.items[0].actions[2],
        Action::CopyAddress(DEAD_ADDRESS.to_string())
    );
}
