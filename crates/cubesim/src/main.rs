//! Terminal front end for the `cubesim_core` cube model.

mod cli;
mod config;
mod controller;
mod net;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    color_eyre::install()?;

    cli::exec(args)
}
