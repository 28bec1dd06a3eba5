use std::collections::BTreeSet;

use super::data::ImageRecord;

/// Filter value that matches every record
pub const FILTER_ALL: &str = "all";

/// The loaded collection plus its derived view state.
///
/// The record list is populated once at load and never changes; the
/// active filter and the filtered view are recomputed on filter clicks.
/// One instance per gallery, owned by the application state.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Every record, in manifest/listing order
    images: Vec<ImageRecord>,
    /// Subsequence of `images` matching the active filter
    filtered: Vec<ImageRecord>,
    /// "all" or one concrete category
    active_filter: String,
}

impl Collection {
    /// Wrap a loaded record list; the filtered view starts as the full
    /// collection.
    pub fn new(images: Vec<ImageRecord>) -> Self {
        let filtered = images.clone();
        Self {
            images,
            filtered,
            active_filter: String::from(FILTER_ALL),
        }
    }

    /// Distinct category values: "all" first, then the remaining
    /// categories in ascending order, no duplicates.
    pub fn categories(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self
            .images
            .iter()
            .map(|img| img.category.as_str())
            .filter(|category| *category != FILTER_ALL)
            .collect();

        let mut categories = vec![String::from(FILTER_ALL)];
        categories.extend(distinct.into_iter().map(String::from));
        categories
    }

    /// Replace the filtered view with the records matching `category`,
    /// preserving collection order. `"all"` restores the full collection.
    pub fn apply_filter(&mut self, category: &str) {
        self.active_filter = String::from(category);

        if category == FILTER_ALL {
            self.filtered = self.images.clone();
        } else {
            self.filtered = self
                .images
                .iter()
                .filter(|img| img.category == category)
                .cloned()
                .collect();
        }
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// The records currently on display, in collection order
    pub fn filtered(&self) -> &[ImageRecord] {
        &self.filtered
    }

    /// Total records in the collection, ignoring the active filter
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(filename: &str, category: &str) -> ImageRecord {
        ImageRecord {
            source: format!("collection/{}", filename),
            title: String::from(filename),
            category: String::from(category),
            description: String::new(),
        }
    }

    fn sample() -> Collection {
        Collection::new(vec![
            record("a.jpg", "coins"),
            record("b.jpg", "books"),
            record("c.jpg", "coins"),
            record("d.jpg", "maps"),
        ])
    }

    #[test]
    fn categories_start_with_all_then_sorted_distinct() {
        let collection = sample();
        assert_eq!(collection.categories(), vec!["all", "books", "coins", "maps"]);
    }

    #[test]
    fn empty_collection_has_only_the_all_category() {
        let collection = Collection::new(Vec::new());
        assert_eq!(collection.categories(), vec!["all"]);
    }

    #[test]
    fn filtering_keeps_matching_records_in_order() {
        let mut collection = sample();
        collection.apply_filter("coins");

        let sources: Vec<&str> = collection
            .filtered()
            .iter()
            .map(|img| img.source.as_str())
            .collect();
        assert_eq!(sources, vec!["collection/a.jpg", "collection/c.jpg"]);
        assert_eq!(collection.active_filter(), "coins");
    }

    #[test]
    fn filtering_by_all_restores_the_full_collection() {
        let mut collection = sample();
        collection.apply_filter("books");
        assert_eq!(collection.filtered().len(), 1);

        collection.apply_filter(FILTER_ALL);
        assert_eq!(collection.filtered().len(), 4);
        assert_eq!(collection.filtered(), &collection.images[..]);
    }

    #[test]
    fn filtering_by_unknown_category_yields_nothing() {
        let mut collection = sample();
        collection.apply_filter("stamps");
        assert!(collection.filtered().is_empty());
        assert!(!collection.is_empty());
    }
}
