// src/bin/collect.rs
use laptop_market::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::collect()?;
    Ok(())
}
