use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

use listkeep::core::config::{self, CliOverrides, ListkeepConfig};
use listkeep::core::persist::{self, Persister};
use listkeep::core::state::App;
use listkeep::storage::{FileStore, KeyValueStore, MemoryStore};
use listkeep::tui;

#[derive(Parser)]
#[command(name = "listkeep", about = "Keep a list: add, edit, delete, saved between runs")]
struct Args {
    /// Store file holding the list (default: ~/.listkeep/store.json)
    #[arg(short, long)]
    store: Option<String>,

    /// Slot the list is saved under (default: items)
    #[arg(short, long)]
    key: Option<String>,

    /// Keep the list in memory only; nothing is read from or written to disk
    #[arg(long)]
    ephemeral: bool,

    /// Config file to use instead of ~/.listkeep/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = loaded.unwrap_or_else(|e| {
        eprintln!("listkeep: {e}; using defaults");
        ListkeepConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            store_path: args.store,
            store_key: args.key,
            ephemeral: args.ephemeral,
        },
    );

    // File logger: stdout belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    let store: Arc<dyn KeyValueStore> = if resolved.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::new(resolved.store_path.clone()))
    };
    log::info!(
        "listkeep starting: {} store, slot '{}', path {}",
        store.name(),
        resolved.store_key,
        resolved.store_path.display()
    );

    let items = persist::load_items(store.as_ref(), &resolved.store_key).await;
    let persister = Persister::spawn(store, resolved.store_key.clone());

    let result = tui::run(App::new(resolved.store_key), items, &persister);

    // Let queued writes land before exiting
    persister.shutdown().await;
    log::info!("listkeep shut down");

    result
}
