use crate::portal;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub assets_dir: PathBuf,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    if !args.assets_dir.join(portal::INDEX_FILE).is_file() {
        warn!(
            assets_dir = %args.assets_dir.display(),
            "index.html not found, build the web bundle with `trunk build --release` first"
        );
    }

    portal::new(args.port, args.assets_dir).await
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        ("assets_dir", args.assets_dir.display().to_string()),
    ];
    info!("{}", startup_message("Startup configuration", &entries));
}

fn startup_message(title: &str, entries: &[(&str, String)]) -> String {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let mut message = format!("{}\n\n{title}:", banner());
    for (key, value) in entries {
        let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
        let _ =
            std::fmt::Write::write_fmt(&mut message, format_args!("\n  {key}:{padding} {value}"));
    }
    message
}

fn banner() -> String {
    let short_hash = short_commit(crate::GIT_COMMIT_HASH);
    BANNER.replace(
        "{VERSION}",
        &format!(" - {} - {}", env!("CARGO_PKG_VERSION"), short_hash),
    )
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    trimmed.chars().take(7).collect()
}

const BANNER: &str = r"
      _______
     /      /|
    /______/ |
    |      | |
    |  S   | /   S C H O L A R I S {VERSION}
    |______|/";
