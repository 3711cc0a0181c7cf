use anyhow::{Context, Result};
use clap::CommandFactory;
use colored::Colorize;

use crate::cli::Cli;
use crate::error::GenerateError;
use crate::generate::{generate_with, GenerateOptions};

pub fn run(cli: &Cli) -> Result<()> {
    let options = GenerateOptions {
        assets_dir: cli.assets_dir.clone(),
        font: cli.font.clone(),
        ..Default::default()
    };

    println!("Creating example icons for: {}", cli.client.bold());
    println!("{} These are placeholder icons for demos.", "!".yellow());
    println!("  Use professionally designed icons for production builds.");
    println!();

    let icons = match generate_with(&cli.client, &options) {
        Ok(icons) => icons,
        Err(err) => {
            if matches!(err, GenerateError::InvalidInput(_)) {
                eprintln!("{}", Cli::command().render_usage());
            }
            return Err(err).context("Failed to create example icons");
        }
    };

    if icons.font.is_builtin() {
        println!(
            "{} Could not load a system font, using the {}",
            "!".yellow(),
            icons.font
        );
    }
    println!(
        "{} Primary icon created: {}",
        "✓".green(),
        icons.primary.display()
    );
    println!(
        "{} Adaptive icon created: {}",
        "✓".green(),
        icons.adaptive.display()
    );

    let client = icons.brand.key();
    println!();
    println!("Next steps for {}:", icons.brand);
    println!("  1. Run: ./scripts/generate_icons.sh {client}");
    println!("  2. Run: ./scripts/prepare_build.sh {client}");
    println!();
    println!("For professional icons:");
    println!("  - Replace the files in {}", cli.assets_dir.display());
    println!("  - Use a resolution of at least 1024x1024");
    println!("  - Keep the design simple and recognizable");

    Ok(())
}
