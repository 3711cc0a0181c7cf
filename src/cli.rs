use std::path::PathBuf;

use clap::Parser;

use crate::generate::DEFAULT_ASSETS_DIR;

#[derive(Parser)]
#[command(
    name = "brand-icons",
    version,
    about = "Generate placeholder app icons for a client brand"
)]
pub struct Cli {
    /// Client to generate icons for (guara or vale_das_minas)
    pub client: String,

    /// Root directory for generated icons
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// Font file to render the letter with (defaults to a system font for this platform)
    #[arg(long)]
    pub font: Option<PathBuf>,
}
