/// Collection source loaders
///
/// Two ways to obtain the image list, selected by configuration:
/// - manifest.rs reads the JSON manifest from disk
/// - github.rs asks the GitHub API for the images folder contents
///
/// Either way the output is the same ordered record list. A load runs
/// once per gallery lifetime and a failure surfaces directly; nothing
/// retries.

pub mod github;
pub mod manifest;

use thiserror::Error;

use crate::config::{GalleryConfig, SourceMode};
use crate::state::data::ImageRecord;

/// Category assigned when no category can be determined
pub const UNCATEGORIZED: &str = "uncategorized";

/// Ways a collection load can fail. All of them are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The manifest file could not be read
    #[error("Could not load {path}. Make sure the file exists.")]
    ManifestUnavailable { path: String },

    /// The manifest was readable but is not a JSON document with an
    /// "images" array
    #[error("The manifest at {path} has no usable \"images\" list.")]
    MalformedManifest { path: String },

    /// The configured images folder does not exist in the repository
    #[error("Folder \"{folder}\" not found in repository.")]
    FolderNotFound { folder: String },

    /// Any other listing endpoint failure, carrying the HTTP status
    /// (0 when the request never produced a response)
    #[error("GitHub API error: {status}")]
    ListingError { status: u16 },
}

/// Load the collection from the configured source.
pub async fn load_collection(config: GalleryConfig) -> Result<Vec<ImageRecord>, LoadError> {
    match config.source {
        SourceMode::Manifest => manifest::load(&config).await,
        SourceMode::GitHubApi => github::load(&config).await,
    }
}

/// Turn a filename into a display title: strip the extension, replace
/// dashes and underscores with spaces, capitalize each word.
///
/// "coin-1921_morgan.jpg" becomes "Coin 1921 Morgan".
pub fn format_filename(filename: &str) -> String {
    let spaced = strip_extension(filename).replace(['-', '_'], " ");

    let mut title = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for ch in spaced.chars() {
        if at_word_start {
            title.extend(ch.to_uppercase());
        } else {
            title.push(ch);
        }
        at_word_start = !ch.is_alphanumeric();
    }

    // Titles must never be empty; a filename that is all extension
    // (".gitignore" style) keeps its raw name
    if title.trim().is_empty() {
        String::from(filename)
    } else {
        title
    }
}

/// Drop the text from the last dot onward, provided it looks like an
/// extension (non-empty, no path separator).
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) if pos + 1 < filename.len() && !filename[pos + 1..].contains('/') => {
            &filename[..pos]
        }
        _ => filename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_separators_and_capitalizes_words() {
        assert_eq!(format_filename("coin-1921_morgan.jpg"), "Coin 1921 Morgan");
        assert_eq!(
            format_filename("book-first-edition-hemingway.jpg"),
            "Book First Edition Hemingway"
        );
    }

    #[test]
    fn strips_only_the_final_extension() {
        assert_eq!(format_filename("coin.morgan.jpg"), "Coin.Morgan");
        assert_eq!(format_filename("plain"), "Plain");
    }

    #[test]
    fn keeps_the_raw_name_when_nothing_is_left() {
        assert_eq!(format_filename(".jpg"), ".jpg");
    }

    #[test]
    fn digits_are_word_starts_but_stay_unchanged() {
        assert_eq!(format_filename("1921-proof_set.png"), "1921 Proof Set");
    }
}
