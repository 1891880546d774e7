// This is my entry point for the wallet explorer CLI
use clap::Parser;
use log::{debug, error, LevelFilter};
use std::process;
use wallet_explorer::{
    Action, ActionOutcome, Command, FavoritesStore, LookupError, Opt, Session, CHAIN_LINKS,
    GLOBAL_CONFIG,
};

fn main() {
    // I log at Info by default, RUST_LOG still wins when set
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let opt = Opt::parse();

    // I apply --data-dir before anything opens the store
    if let Some(dir) = opt.data_dir {
        GLOBAL_CONFIG.set_data_dir(dir);
    }

    if let Err(e) = run_command(opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

// Each subcommand opens its own session over the favorites store
fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // I print every explorer candidate for the address
        Command::Lookup { address } => {
            let mut session = open_session()?;
            session.set_search_text(address.trim());

            let section = session.search_results_section();
            print!("{section}");

            // With no candidates I run the item's "Show Error" action so it surfaces as a failure
            if session.candidates().is_empty() {
                if let Some(action) = section.items.first().and_then(|item| item.primary_action()) {
                    if let ActionOutcome::Failure(message) = session.apply(action)? {
                        error!("{message}");
                    }
                }
                return Err(LookupError::InvalidAddress(address).into());
            }
        }
        // I list the saved favorites, or wipe them with --clear
        Command::Favorites { clear } => {
            let mut session = open_session()?;
            if clear {
                session.clear_favorites()?;
                println!("Favorites cleared");
                return Ok(());
            }

            if session.favorites().is_empty() {
                println!("No favorites yet");
            } else {
                print!("{}", session.favorites_section());
            }
        }
        // I only save a network the address actually classifies into
        Command::Add { address, network } => {
            let mut session = open_session()?;
            session.set_search_text(address.trim());
            let link = session.require_candidate(&network)?;
            session.add_favorite(&link.to_favorite())?;
            println!("Added {} on {} to favorites", link.address, link.network);
        }
        // Removing works on the stored pair, so no classification is needed
        Command::Remove { address, network } => {
            let mut session = open_session()?;
            let address = address.trim();
            match session.find_favorite(address, &network).cloned() {
                Some(favorite) => {
                    session.remove_favorite(&favorite)?;
                    println!("Removed {address} on {network} from favorites");
                }
                None => println!("{address} on {network} is not a favorite"),
            }
        }
        // I flip membership for one candidate
        Command::Toggle { address, network } => {
            let mut session = open_session()?;
            session.set_search_text(address.trim());
            let link = session.require_candidate(&network)?;
            if session.toggle_favorite(&link)? {
                println!("Added {} on {} to favorites", link.address, link.network);
            } else {
                println!("Removed {} on {} from favorites", link.address, link.network);
            }
        }
        Command::Check { address, network } => {
            let session = open_session()?;
            let address = address.trim();
            if session.find_favorite(address, &network).is_some() {
                println!("{address} on {network} is a favorite");
            } else {
                println!("{address} on {network} is not a favorite");
            }
        }
        // I print the URL instead of opening a browser
        Command::Url { address, network } => {
            let mut session = open_session()?;
            session.set_search_text(address.trim());
            let link = session.require_candidate(&network)?;
            let action = Action::OpenInBrowser {
                title: link.title,
                url: link.url,
            };
            if let ActionOutcome::Open(url) = session.apply(&action)? {
                println!("{url}");
            }
        }
        // I dump the explorer table I support
        Command::Networks => {
            for template in CHAIN_LINKS {
                println!(
                    "{:<10} {:<8} {:<16} {}",
                    template.network, template.format, template.explorer, template.url_template
                );
            }
        }
    }
    Ok(())
}

// I open the store under the configured data directory and load favorites from it
fn open_session() -> Result<Session, Box<dyn std::error::Error>> {
    let store = FavoritesStore::open_default()?;
    debug!("Using favorites store at {}", store.get_db_path().display());
    Ok(Session::new(store))
}
