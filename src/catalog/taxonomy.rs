//! Taxonomy and the single-selection category picker
//!
//! A taxonomy is fixed for the session. The selector holds exactly one
//! selected category at all times; there is no "nothing selected" state.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Anything listed under a category. Only identity matters here.
pub trait CatalogItem {
    fn id(&self) -> &str;
}

/// A named group of items, in authored order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category<T> {
    pub id: String,
    pub display_name: String,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Category<T> {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            items,
        }
    }
}

/// Validated, non-empty, ordered set of categories
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy<T> {
    categories: Vec<Category<T>>,
}

impl<T: CatalogItem> Taxonomy<T> {
    /// Validate and wrap a list of categories.
    ///
    /// Category ids must be unique across the taxonomy and item ids unique
    /// within their category.
    pub fn new(categories: Vec<Category<T>>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::EmptyTaxonomy);
        }

        let mut seen_categories = HashSet::new();
        for category in &categories {
            if !seen_categories.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }

            let mut seen_items = HashSet::new();
            for item in &category.items {
                if !seen_items.insert(item.id()) {
                    return Err(CatalogError::DuplicateItem {
                        category: category.id.clone(),
                        item: item.id().to_string(),
                    });
                }
            }
        }

        Ok(Self { categories })
    }
}

impl<T> Taxonomy<T> {
    pub fn categories(&self) -> &[Category<T>] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Position of a category id, if present
    pub fn position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Category<T>> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Holds which category is active and exposes its items
#[derive(Debug, Clone)]
pub struct TaxonomySelector<T> {
    taxonomy: Arc<Taxonomy<T>>,
    /// Index into `taxonomy.categories`; always in bounds
    selected: usize,
}

impl<T: CatalogItem> TaxonomySelector<T> {
    /// Selector starting on the first category
    pub fn new(taxonomy: Arc<Taxonomy<T>>) -> Self {
        // Taxonomy::new guarantees at least one category
        Self {
            taxonomy,
            selected: 0,
        }
    }

    /// Selector starting on an explicit default category
    pub fn with_default(taxonomy: Arc<Taxonomy<T>>, default_id: &str) -> Result<Self, CatalogError> {
        let selected = taxonomy
            .position(default_id)
            .ok_or_else(|| CatalogError::UnknownDefault(default_id.to_string()))?;
        Ok(Self { taxonomy, selected })
    }

    /// Switch to `category_id`. Unknown ids leave the selection untouched.
    pub fn select(&mut self, category_id: &str) {
        match self.taxonomy.position(category_id) {
            Some(index) => {
                if index != self.selected {
                    tracing::debug!(category = category_id, "category selected");
                }
                self.selected = index;
            }
            None => {
                tracing::warn!(
                    category = category_id,
                    current = %self.current_category().id,
                    "ignoring selection of unknown category"
                );
            }
        }
    }

    /// Look up an item of the current category by id
    pub fn find_item(&self, item_id: &str) -> Option<&T> {
        self.current_items().iter().find(|item| item.id() == item_id)
    }
}

impl<T> TaxonomySelector<T> {
    pub fn current_category(&self) -> &Category<T> {
        &self.taxonomy.categories[self.selected]
    }

    /// Items of the selected category, in authored order
    pub fn current_items(&self) -> &[T] {
        &self.current_category().items
    }

    pub fn categories(&self) -> &[Category<T>] {
        self.taxonomy.categories()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn taxonomy(&self) -> &Arc<Taxonomy<T>> {
        &self.taxonomy
    }

    /// Move to the next category (wraps around)
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.taxonomy.len();
    }

    /// Move to the previous category (wraps around)
    pub fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            self.taxonomy.len() - 1
        } else {
            self.selected - 1
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Subject(&'static str);

    impl CatalogItem for Subject {
        fn id(&self) -> &str {
            self.0
        }
    }

    fn school_taxonomy() -> Arc<Taxonomy<Subject>> {
        Arc::new(
            Taxonomy::new(vec![
                Category::new("core", "Core Subjects", vec![Subject("s1"), Subject("s2")]),
                Category::new("sciences", "Sciences", vec![Subject("s3")]),
                Category::new("arts", "Arts", vec![]),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_initial_selection_is_first_category() {
        let selector = TaxonomySelector::new(school_taxonomy());
        assert_eq!(selector.current_category().id, "core");
        assert_eq!(selector.current_items(), &[Subject("s1"), Subject("s2")]);
    }

    #[test]
    fn test_select_switches_items() {
        let mut selector = TaxonomySelector::new(school_taxonomy());
        selector.select("sciences");
        assert_eq!(selector.current_items(), &[Subject("s3")]);
    }

    #[test]
    fn test_every_valid_id_is_selectable() {
        let taxonomy = school_taxonomy();
        let mut selector = TaxonomySelector::new(taxonomy.clone());
        for category in taxonomy.categories() {
            selector.select(&category.id);
            assert_eq!(selector.current_category().id, category.id);
        }
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut selector = TaxonomySelector::new(school_taxonomy());
        selector.select("sciences");

        selector.select("underwater-basket-weaving");
        assert_eq!(selector.current_category().id, "sciences");

        selector.select("");
        assert_eq!(selector.current_category().id, "sciences");
    }

    #[test]
    fn test_empty_category_yields_no_items() {
        let mut selector = TaxonomySelector::new(school_taxonomy());
        selector.select("arts");
        assert!(selector.current_items().is_empty());
    }

    #[test]
    fn test_empty_taxonomy_is_rejected() {
        let result = Taxonomy::<Subject>::new(vec![]);
        assert_eq!(result.unwrap_err(), CatalogError::EmptyTaxonomy);
    }

    #[test]
    fn test_duplicate_category_is_rejected() {
        let result = Taxonomy::new(vec![
            Category::new("core", "Core", vec![Subject("s1")]),
            Category::new("core", "Core again", vec![]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateCategory("core".to_string())
        );
    }

    #[test]
    fn test_duplicate_item_within_category_is_rejected() {
        let result = Taxonomy::new(vec![Category::new(
            "core",
            "Core",
            vec![Subject("s1"), Subject("s1")],
        )]);
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::DuplicateItem { ref category, ref item } if category == "core" && item == "s1"
        ));
    }

    #[test]
    fn test_same_item_id_in_different_categories_is_fine() {
        let result = Taxonomy::new(vec![
            Category::new("core", "Core", vec![Subject("s1")]),
            Category::new("sciences", "Sciences", vec![Subject("s1")]),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_explicit_default() {
        let selector = TaxonomySelector::with_default(school_taxonomy(), "sciences").unwrap();
        assert_eq!(selector.current_category().id, "sciences");

        let missing = TaxonomySelector::with_default(school_taxonomy(), "nope");
        assert_eq!(
            missing.unwrap_err(),
            CatalogError::UnknownDefault("nope".to_string())
        );
    }

    #[test]
    fn test_cycling_wraps() {
        let mut selector = TaxonomySelector::new(school_taxonomy());
        selector.select_prev();
        assert_eq!(selector.current_category().id, "arts");
        selector.select_next();
        assert_eq!(selector.current_category().id, "core");
        selector.select_next();
        assert_eq!(selector.selected_index(), 1);
    }

    #[test]
    fn test_find_item_is_scoped_to_current_category() {
        let mut selector = TaxonomySelector::new(school_taxonomy());
        assert_eq!(selector.find_item("s2"), Some(&Subject("s2")));
        assert_eq!(selector.find_item("s3"), None);

        selector.select("sciences");
        assert_eq!(selector.find_item("s3"), Some(&Subject("s3")));
    }
}
