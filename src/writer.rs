//! Persists the rendered icon and its manifest into the appiconset.

use crate::contents_json::{write_contents_json, ImageEntry};
use crate::renderer;
use anyhow::{Context, Result};
use image::{DynamicImage, ImageOutputFormat};
use std::path::Path;

/// Output location inside the checked-out anycard project. The directory
/// must already exist; a missing or unwritable path is a plain error.
const APPICONSET_DIR: &str = "/tmp/anycard/anycard/Resources/Assets.xcassets/AppIcon.appiconset";

const ICON_SIZE: u32 = 1024;
const ICON_FILENAME: &str = "AppIcon.png";

/// Renders the icon at 1024×1024 and writes `AppIcon.png` plus
/// `Contents.json` into the fixed appiconset directory.
pub fn write() -> Result<()> {
    write_into(Path::new(APPICONSET_DIR))
}

/// Same as [`write`], but targeting an arbitrary directory. Existing files
/// are overwritten in place; errors propagate without cleanup.
pub fn write_into(dir: &Path) -> Result<()> {
    let icon = renderer::render(ICON_SIZE);

    let png_path = dir.join(ICON_FILENAME);
    let mut file = std::fs::File::create(&png_path)
        .with_context(|| format!("Failed to create {}", png_path.display()))?;
    DynamicImage::ImageRgba8(icon)
        .write_to(&mut file, ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    println!("✓ Saved {}", png_path.display());

    let entry = ImageEntry::app_icon(
        ICON_FILENAME.to_string(),
        "universal".to_string(),
        "ios".to_string(),
        format!("{ICON_SIZE}x{ICON_SIZE}"),
    );
    write_contents_json(dir, vec![entry])?;
    println!("✓ Saved {}", dir.join("Contents.json").display());

    Ok(())
}
