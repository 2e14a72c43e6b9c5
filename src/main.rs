//! trr-routes - inspect and build admin dashboard URLs.

mod cli;
mod config;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, output::render};
use config::RoutesConfig;
use trr_routes::logger::set_verbose;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = RoutesConfig::load(&cli)?;
    set_verbose(config.log.verbose);

    let rendered = match &cli.command {
        Commands::Parse { url } => render(&cli::parse::parse_url(url), &config.output)?,
        Commands::Build { target } => render(&cli::build::build_url(target), &config.output)?,
        Commands::Slug { name, id } => {
            render(&cli::slug::person_slug(name, id.as_deref()), &config.output)?
        }
    };
    println!("{rendered}");
    Ok(())
}
