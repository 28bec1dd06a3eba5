/// GitHub API loader
///
/// Asks the repository-contents endpoint for the configured images
/// folder and keeps the entries whose extension is on the allow-list.
/// Categories are inferred from the first dash/underscore-delimited
/// filename segment ("coins-morgan-dollar.jpg" lands in "coins").

use serde::Deserialize;

use super::{format_filename, LoadError, UNCATEGORIZED};
use crate::config::GalleryConfig;
use crate::state::data::ImageRecord;

/// One file entry as returned by the contents endpoint
#[derive(Debug, Clone, Deserialize)]
struct RepoFile {
    name: String,
}

/// Fetch the folder listing and map it into display records.
pub async fn load(config: &GalleryConfig) -> Result<Vec<ImageRecord>, LoadError> {
    let url = format!(
        "https://api.github.com/repos/{}/contents/{}",
        config.github_repo, config.images_folder
    );

    let response = reqwest::Client::new()
        .get(&url)
        // The GitHub API rejects requests without a user agent
        .header(reqwest::header::USER_AGENT, "collection-gallery")
        .send()
        .await
        .map_err(|_| LoadError::ListingError { status: 0 })?;

    let status = response.status();
    if let Some(error) = status_error(status, &config.images_folder) {
        return Err(error);
    }

    let files: Vec<RepoFile> = response.json().await.map_err(|_| LoadError::ListingError {
        status: status.as_u16(),
    })?;

    Ok(files
        .into_iter()
        .filter(|file| has_allowed_extension(&file.name, &config.image_extensions))
        .map(|file| to_record(file, &config.images_folder))
        .collect())
}

/// Map a non-success status to its load error: 404 means the folder is
/// missing, anything else non-2xx carries the status code.
fn status_error(status: reqwest::StatusCode, folder: &str) -> Option<LoadError> {
    if status == reqwest::StatusCode::NOT_FOUND {
        return Some(LoadError::FolderNotFound {
            folder: String::from(folder),
        });
    }
    if !status.is_success() {
        return Some(LoadError::ListingError {
            status: status.as_u16(),
        });
    }
    None
}

/// Case-insensitive extension check against the allow-list. Entries
/// without a qualifying extension are silently dropped.
fn has_allowed_extension(filename: &str, allowed: &[String]) -> bool {
    let Some(pos) = filename.rfind('.') else {
        return false;
    };
    let ext = &filename[pos + 1..];

    !ext.is_empty() && allowed.iter().any(|entry| entry.eq_ignore_ascii_case(ext))
}

/// First dash/underscore-delimited segment, lower-cased. Filenames with
/// no separator (or an empty first segment) fall back to the sentinel.
fn extract_category(filename: &str) -> String {
    let mut parts = filename.split(['-', '_']);
    let first = parts.next().unwrap_or_default();

    if parts.next().is_none() || first.is_empty() {
        String::from(UNCATEGORIZED)
    } else {
        first.to_lowercase()
    }
}

fn to_record(file: RepoFile, images_folder: &str) -> ImageRecord {
    ImageRecord {
        source: format!("{}/{}", images_folder, file.name),
        title: format_filename(&file.name),
        category: extract_category(&file.name),
        description: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec![
            String::from("jpg"),
            String::from("png"),
            String::from("webp"),
        ]
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_allowed_extension("morgan.jpg", &allowed()));
        assert!(has_allowed_extension("MORGAN.JPG", &allowed()));
        assert!(has_allowed_extension("morgan.WebP", &allowed()));
        assert!(!has_allowed_extension("notes.txt", &allowed()));
    }

    #[test]
    fn extension_check_ignores_allow_list_order() {
        let reversed: Vec<String> = allowed().into_iter().rev().collect();
        assert!(has_allowed_extension("morgan.png", &reversed));
        assert!(!has_allowed_extension("notes.txt", &reversed));
    }

    #[test]
    fn entries_without_an_extension_are_dropped() {
        assert!(!has_allowed_extension("README", &allowed()));
        assert!(!has_allowed_extension("trailing.", &allowed()));
    }

    #[test]
    fn category_comes_from_the_first_segment() {
        assert_eq!(extract_category("coins-morgan-dollar.jpg"), "coins");
        assert_eq!(extract_category("Books_hemingway.jpg"), "books");
    }

    #[test]
    fn category_falls_back_without_a_separator() {
        assert_eq!(extract_category("morgan.jpg"), UNCATEGORIZED);
        assert_eq!(extract_category("-morgan.jpg"), UNCATEGORIZED);
    }

    #[test]
    fn listed_files_become_records_with_joined_sources() {
        let record = to_record(
            RepoFile {
                name: String::from("coins-morgan-dollar.jpg"),
            },
            "collection",
        );

        assert_eq!(record.source, "collection/coins-morgan-dollar.jpg");
        assert_eq!(record.title, "Coins Morgan Dollar");
        assert_eq!(record.category, "coins");
        assert_eq!(record.description, "");
    }

    #[test]
    fn not_found_maps_to_the_missing_folder_error() {
        let error = status_error(reqwest::StatusCode::NOT_FOUND, "collection");
        assert_eq!(
            error,
            Some(LoadError::FolderNotFound {
                folder: String::from("collection"),
            })
        );
    }

    #[test]
    fn other_failures_carry_the_status_code() {
        let error = status_error(reqwest::StatusCode::FORBIDDEN, "collection");
        assert_eq!(error, Some(LoadError::ListingError { status: 403 }));

        assert_eq!(status_error(reqwest::StatusCode::OK, "collection"), None);
    }
}
