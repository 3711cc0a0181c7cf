use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::brand::Brand;
use crate::error::GenerateError;
use crate::font::{system_font_path, FontSource, IconFont, Platform};
use crate::render;

pub const DEFAULT_ASSETS_DIR: &str = "assets/icons";
pub const PRIMARY_FILE_NAME: &str = "icon.png";
pub const ADAPTIVE_FILE_NAME: &str = "adaptive_icon.png";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root that per-brand icon directories are created under.
    pub assets_dir: PathBuf,
    /// Font file to use instead of the platform default.
    pub font: Option<PathBuf>,
    pub platform: Platform,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            font: None,
            platform: Platform::current(),
        }
    }
}

impl GenerateOptions {
    fn font_path(&self) -> &Path {
        self.font
            .as_deref()
            .unwrap_or_else(|| system_font_path(self.platform))
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedIcons {
    pub brand: Brand,
    pub dir: PathBuf,
    pub primary: PathBuf,
    pub adaptive: PathBuf,
    pub font: FontSource,
}

/// Output directory for a brand under `assets_dir`.
pub fn icon_dir(assets_dir: &Path, brand: Brand) -> PathBuf {
    assets_dir.join(brand.dir_alias())
}

/// Generates both icons for `brand_key` under the default `assets/icons` root.
pub fn generate(brand_key: &str) -> Result<GeneratedIcons, GenerateError> {
    generate_with(brand_key, &GenerateOptions::default())
}

/// Renders the primary and adaptive icons for `brand_key` and writes them as
/// PNG files, overwriting any previous ones. Nothing is written unless the
/// PNG encoder is available and the brand is recognized.
pub fn generate_with(
    brand_key: &str,
    options: &GenerateOptions,
) -> Result<GeneratedIcons, GenerateError> {
    if !ImageFormat::Png.writing_enabled() {
        return Err(GenerateError::MissingDependency);
    }

    let brand: Brand = brand_key.parse()?;

    let dir = icon_dir(&options.assets_dir, brand);
    std::fs::create_dir_all(&dir).map_err(|source| GenerateError::Io {
        path: dir.clone(),
        source,
    })?;

    let (font, font_source) = IconFont::load_or_builtin(options.font_path());

    let primary = dir.join(PRIMARY_FILE_NAME);
    save_png(&render::primary_icon(brand, &font), &primary)?;

    let adaptive = dir.join(ADAPTIVE_FILE_NAME);
    save_png(&render::adaptive_icon(brand, &font), &adaptive)?;

    Ok(GeneratedIcons {
        brand,
        dir,
        primary,
        adaptive,
        font: font_source,
    })
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<(), GenerateError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| GenerateError::Save {
            path: path.to_path_buf(),
            source,
        })
}
