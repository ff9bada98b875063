use anyhow::{Context, Result};
use clap::Parser;

use npub::cli::{Args, Workflow};
use npub::config;
use npub::delay::ThreadPause;
use npub::runner::SystemRunner;
use npub::ui;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("npub")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .context("failed to initialize logger")?;

    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version land here too and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprint!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = initialize_logger(args.debug) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    if let Err(err) = run(args) {
        ui::display_error(&err.to_string());
        if let Some(hint) = err.hint() {
            ui::display_hint(&hint);
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> npub::Result<()> {
    let config_path = args.config.clone();
    let options = args.into_options()?;
    let config = config::load_config(config_path.as_deref())?;

    let root = std::env::current_dir()?;
    let runner = SystemRunner::new(&root);

    Workflow::new(&config, &runner, &ThreadPause, root).run(&options)?;
    Ok(())
}
