mod app;
mod cli;
mod config;
mod output;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use cli::Cli;
use config::Config;

fn init_logging(cli: &Cli) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!cli.no_color)
                .with_target(false)
                .with_filter(LevelFilter::from_level(cli.log_level())),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load();
    let cli = cli.with_config(&config);

    init_logging(&cli);
    if let Some(path) = &config.source {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    if let Err(e) = app::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
