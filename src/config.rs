/// Gallery configuration
///
/// Everything the gallery needs to know is a compile-time constant,
/// mirroring a deployment where the collection folder sits next to the
/// binary. Edit the `Default` impl to point at another collection.

/// Where the image list comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Read the JSON manifest from disk (fast, reliable)
    Manifest,
    /// Ask the GitHub API for the contents of the images folder.
    /// Images are detected automatically, but heavy traffic may hit
    /// rate limits.
    #[allow(dead_code)]
    GitHubApi,
}

/// Static gallery settings
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Which source loader to use
    pub source: SourceMode,
    /// GitHub repository holding the collection, "username/repository"
    /// form (only consulted in GitHubApi mode)
    pub github_repo: String,
    /// Folder joined onto filenames to build image paths
    pub images_folder: String,
    /// Path to the JSON manifest (only consulted in Manifest mode)
    pub manifest_path: String,
    /// Extension allow-list for listing mode, matched case-insensitively
    pub image_extensions: Vec<String>,
    /// Images per page (0 = show all)
    #[allow(dead_code)]
    pub images_per_page: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            source: SourceMode::Manifest,
            github_repo: String::from("haq-collectibles/haq-collectibles"),
            images_folder: String::from("collection"),
            manifest_path: String::from("collection/images.json"),
            image_extensions: vec![
                String::from("jpg"),
                String::from("jpeg"),
                String::from("png"),
                String::from("gif"),
                String::from("webp"),
            ],
            images_per_page: 0,
        }
    }
}
