use std::path::Path;

use brand_icons::brand::Brand;
use brand_icons::error::GenerateError;
use brand_icons::font::FontSource;
use brand_icons::generate::{generate_with, icon_dir, GenerateOptions, DEFAULT_ASSETS_DIR};
use image::{GenericImageView, ImageFormat, Rgba};

fn options(root: &Path) -> GenerateOptions {
    GenerateOptions {
        assets_dir: root.join("assets/icons"),
        ..Default::default()
    }
}

fn fallback_options(root: &Path) -> GenerateOptions {
    GenerateOptions {
        font: Some(root.join("no-such-font.ttf")),
        ..options(root)
    }
}

fn assert_png(path: &Path, size: u32) -> image::DynamicImage {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!(img.dimensions(), (size, size));
    img
}

#[test]
fn default_options() {
    let options = GenerateOptions::default();
    assert_eq!(options.assets_dir, Path::new(DEFAULT_ASSETS_DIR));
    assert!(options.font.is_none());
}

#[test]
fn generates_both_icons_for_every_brand() {
    let dir = tempfile::tempdir().unwrap();

    for brand in Brand::ALL {
        let icons = generate_with(brand.key(), &options(dir.path())).unwrap();
        assert_eq!(icons.brand, brand);
        assert_eq!(icons.dir, icon_dir(&dir.path().join("assets/icons"), brand));
        assert_eq!(icons.primary, icons.dir.join("icon.png"));
        assert_eq!(icons.adaptive, icons.dir.join("adaptive_icon.png"));

        assert_png(&icons.primary, 1024);
        assert_png(&icons.adaptive, 432);
    }
}

#[test]
fn guara_corner_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let icons = generate_with("guara", &options(dir.path())).unwrap();

    let primary = assert_png(&icons.primary, 1024).to_rgba8();
    assert_eq!(*primary.get_pixel(0, 0), Rgba([25, 118, 210, 255]));

    let adaptive = assert_png(&icons.adaptive, 432).to_rgba8();
    assert_eq!(adaptive.get_pixel(0, 0)[3], 0);
}

#[test]
fn vale_das_minas_uses_short_directory() {
    let dir = tempfile::tempdir().unwrap();
    let icons = generate_with("vale_das_minas", &options(dir.path())).unwrap();

    let root = dir.path().join("assets/icons");
    assert_eq!(icons.dir, root.join("valedasminas"));
    assert!(root.join("valedasminas/icon.png").is_file());
    assert!(root.join("valedasminas/adaptive_icon.png").is_file());
    assert!(!root.join("vale_das_minas").exists());
}

#[test]
fn unrecognized_brand_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate_with("acme", &options(dir.path())).unwrap_err();

    assert!(matches!(err, GenerateError::InvalidInput(ref key) if key == "acme"));
    assert!(!err.is_io());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn rerun_overwrites_identically() {
    let dir = tempfile::tempdir().unwrap();

    let first = generate_with("guara", &options(dir.path())).unwrap();
    let primary = std::fs::read(&first.primary).unwrap();
    let adaptive = std::fs::read(&first.adaptive).unwrap();

    let second = generate_with("guara", &options(dir.path())).unwrap();
    assert_eq!(std::fs::read(&second.primary).unwrap(), primary);
    assert_eq!(std::fs::read(&second.adaptive).unwrap(), adaptive);
}

#[test]
fn overwrites_stale_files() {
    let dir = tempfile::tempdir().unwrap();
    let brand_dir = dir.path().join("assets/icons/guara");
    std::fs::create_dir_all(&brand_dir).unwrap();
    std::fs::write(brand_dir.join("icon.png"), b"stale").unwrap();

    let icons = generate_with("guara", &options(dir.path())).unwrap();
    assert_png(&icons.primary, 1024);
}

#[test]
fn missing_font_still_produces_icons() {
    let dir = tempfile::tempdir().unwrap();
    let icons = generate_with("guara", &fallback_options(dir.path())).unwrap();

    assert_eq!(icons.font, FontSource::Builtin);

    let primary = assert_png(&icons.primary, 1024).to_rgba8();
    assert_eq!(*primary.get_pixel(0, 0), Rgba([25, 118, 210, 255]));
    assert!(primary.pixels().any(|p| *p == Rgba([255, 255, 255, 255])));

    let adaptive = assert_png(&icons.adaptive, 432).to_rgba8();
    assert_eq!(adaptive.get_pixel(0, 0)[3], 0);
    assert!(adaptive.pixels().any(|p| *p == Rgba([25, 118, 210, 255])));
}

#[test]
fn invalid_font_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let font = dir.path().join("broken.ttf");
    std::fs::write(&font, b"not a font").unwrap();

    let options = GenerateOptions {
        font: Some(font),
        ..options(dir.path())
    };
    let icons = generate_with("vale_das_minas", &options).unwrap();
    assert!(icons.font.is_builtin());
    assert_png(&icons.adaptive, 432);
}

#[test]
fn unwritable_assets_dir_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();

    let options = GenerateOptions {
        assets_dir: blocker,
        ..Default::default()
    };
    let err = generate_with("guara", &options).unwrap_err();
    assert!(matches!(err, GenerateError::Io { .. }));
    assert!(err.is_io());
}
