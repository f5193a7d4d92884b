//! Contents.json data model for Apple's Asset Catalog format
//!
//! The appiconset this tool maintains holds a single universal 1024×1024
//! variant, so the model carries only the fields that variant uses, in the
//! key order Xcode writes them.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// Image entries for the icon set
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within the asset catalog
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// The filename for the image file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// The device type for the image (e.g., "universal", "iphone", "ipad")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idiom: Option<String>,

    /// The target platform (e.g., "ios", "macos")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// The size of the image in points (e.g., "1024x1024")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The application or tool that authored the asset catalog
    pub author: String,

    /// The format version of the asset catalog (typically 1)
    pub version: u8,
}

impl ContentsFile {
    /// Creates a new Contents.json structure with the specified author
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { author, version: 1 },
        }
    }

    /// Adds an image entry to the contents file
    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }
}

impl ImageEntry {
    /// Creates an app icon entry with all four fields set
    pub fn app_icon(filename: String, idiom: String, platform: String, size: String) -> Self {
        Self {
            filename: Some(filename),
            idiom: Some(idiom),
            platform: Some(platform),
            size: Some(size),
        }
    }
}

/// Writes a Contents.json file to the specified directory
///
/// Serializes the provided entries with the standard metadata (version 1,
/// author "xcode") and writes them as `<dir>/Contents.json`.
///
/// # Errors
/// Returns an error if JSON serialization fails or the directory is missing
/// or not writable.
pub fn write_contents_json(dir: &Path, images: Vec<ImageEntry>) -> Result<()> {
    let cf = ContentsFile {
        images,
        info: Info {
            author: "xcode".to_string(),
            version: 1,
        },
    };
    let json = serde_json::to_string_pretty(&cf)?;
    std::fs::write(dir.join("Contents.json"), json).context("write Contents.json")
}
