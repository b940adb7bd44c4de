use anyhow::Result;
use clap::Parser;
use term_shortcuts::cli::{self, Cli};

fn main() -> Result<()> {
    // Parse CLI arguments first (before logging init for cleaner output)
    let cli = Cli::parse();

    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config.
    term_shortcuts::debug::init_log_bridge(cli.log_level);
    log::info!("Starting term-shortcuts {}", term_shortcuts::VERSION);

    let config = cli.load_config()?;
    term_shortcuts::debug::set_level(config.log_level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::run(&cli, &config, &mut out) {
        eprintln!("term-shortcuts: error: {e:#}");
        return Err(e);
    }
    Ok(())
}
