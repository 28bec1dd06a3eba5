/// JSON manifest loader
///
/// Reads the configured manifest document from disk and maps its entries
/// into display records. The manifest shape is:
///
/// {
///   "images": [
///     {
///       "filename": "coin-1921-morgan-dollar.jpg",
///       "title": "1921 Morgan Silver Dollar",
///       "category": "coins",
///       "description": "Uncirculated condition"
///     }
///   ]
/// }
///
/// Only `filename` is required; the rest defaults per record.

use serde::Deserialize;

use super::{format_filename, LoadError, UNCATEGORIZED};
use crate::config::GalleryConfig;
use crate::state::data::ImageRecord;

/// Top-level manifest document
#[derive(Debug, Deserialize)]
struct Manifest {
    images: Vec<ManifestEntry>,
}

/// One image entry as written in the manifest
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    filename: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Read and map the manifest at the configured path.
pub async fn load(config: &GalleryConfig) -> Result<Vec<ImageRecord>, LoadError> {
    let raw = tokio::fs::read_to_string(&config.manifest_path)
        .await
        .map_err(|_| LoadError::ManifestUnavailable {
            path: config.manifest_path.clone(),
        })?;

    parse(&raw, config)
}

/// Parse the manifest text and build records in document order.
fn parse(raw: &str, config: &GalleryConfig) -> Result<Vec<ImageRecord>, LoadError> {
    let manifest: Manifest =
        serde_json::from_str(raw).map_err(|_| LoadError::MalformedManifest {
            path: config.manifest_path.clone(),
        })?;

    Ok(manifest
        .images
        .into_iter()
        .map(|entry| to_record(entry, &config.images_folder))
        .collect())
}

fn to_record(entry: ManifestEntry, images_folder: &str) -> ImageRecord {
    let title = entry
        .title
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| format_filename(&entry.filename));

    let category = entry
        .category
        .filter(|category| !category.is_empty())
        .unwrap_or_else(|| String::from(UNCATEGORIZED));

    ImageRecord {
        source: format!("{}/{}", images_folder, entry.filename),
        title,
        category,
        description: entry.description.unwrap_or_default(),
    }
}
