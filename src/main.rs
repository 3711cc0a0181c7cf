use anyhow::Result;
use brand_icons::cli::Cli;
use brand_icons::commands;
use clap::Parser;

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    commands::create::run(&cli)
}
