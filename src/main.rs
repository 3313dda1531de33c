// src/main.rs
use yokai_scrape::cli;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
