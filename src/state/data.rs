/// Shared data structures for the gallery state
///
/// These structs represent the data model that flows between
/// the source loaders and the UI layer.

/// One entry in the displayed collection
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    /// Resolved path to the image asset (images folder + filename)
    pub source: String,
    /// Human-readable label shown on the grid tile and in the lightbox
    pub title: String,
    /// Category used for filtering; never empty, falls back to
    /// "uncategorized"
    pub category: String,
    /// Longer text for the piece, may be empty
    pub description: String,
}
