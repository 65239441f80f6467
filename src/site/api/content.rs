// Content endpoints - site overview, info pages and the catalog explorer

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::catalog::DetailInspector;
use crate::content::{Entry, InfoPage, SchoolInfo};
use crate::site::SiteState;

/// JSON structure returned by /api/site
#[derive(Debug, Serialize)]
pub struct SiteResponse {
    pub school: SchoolInfo,
    /// Default theme mode for clients that don't pick one
    pub theme: &'static str,
    pub pages: Vec<PageSummary>,
    pub catalogs: Vec<CatalogSummary>,
}

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub section: String,
}

#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub id: String,
    pub title: String,
    pub section: String,
    pub category_count: usize,
}

/// GET /api/site - School facts plus the page and catalog indexes
pub async fn get_site(State(state): State<SiteState>) -> Json<SiteResponse> {
    let content = &state.content;

    Json(SiteResponse {
        school: content.school.clone(),
        theme: state.default_theme.as_str(),
        pages: content
            .pages
            .iter()
            .map(|p| PageSummary {
                id: p.id.clone(),
                title: p.title.clone(),
                section: p.section.clone(),
            })
            .collect(),
        catalogs: content
            .catalogs
            .iter()
            .map(|c| CatalogSummary {
                id: c.id.clone(),
                title: c.title.clone(),
                section: c.section.clone(),
                category_count: c.taxonomy().len(),
            })
            .collect(),
    })
}

/// GET /api/pages/:id - One informational page
pub async fn get_page(
    State(state): State<SiteState>,
    Path(id): Path<String>,
) -> Result<Json<InfoPage>, ApiError> {
    state
        .content
        .page(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown page '{}'", id)))
}

/// Query parameters for /api/catalogs/:id
#[derive(Debug, Deserialize)]
pub struct ExplorerQuery {
    /// Category to select; unknown ids keep the default
    pub category: Option<String>,
    /// Item of the selected category to inspect
    pub item: Option<String>,
}

/// Explorer view of one catalog
#[derive(Debug, Serialize)]
pub struct ExplorerResponse {
    pub id: String,
    pub title: String,
    pub section: String,
    pub intro: String,
    pub selected_category: String,
    pub categories: Vec<CategoryTab>,
    /// Items of the selected category, in authored order
    pub items: Vec<ItemSummary>,
    /// Open detail view, if `item` named an item of the selected category
    pub inspected: Option<Entry>,
}

#[derive(Debug, Serialize)]
pub struct CategoryTab {
    pub id: String,
    pub display_name: String,
    pub item_count: usize,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct ItemSummary {
    pub id: String,
    pub title: String,
    pub summary: String,
}

/// GET /api/catalogs/:id - Category tabs, visible items and inspected item
///
/// Query params:
///   - category: category id to select
///   - item: item id to open in the detail view
pub async fn get_catalog(
    State(state): State<SiteState>,
    Path(id): Path<String>,
    Query(params): Query<ExplorerQuery>,
) -> Result<Json<ExplorerResponse>, ApiError> {
    let catalog = state
        .content
        .catalog(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown catalog '{}'", id)))?;

    let mut selector = catalog.selector();
    if let Some(category) = params.category.as_deref() {
        selector.select(category);
    }

    let mut inspector = DetailInspector::new();
    if let Some(item_id) = params.item.as_deref() {
        match selector.find_item(item_id) {
            Some(entry) => inspector.open(entry.clone()),
            None => tracing::debug!(
                catalog = %id,
                item = item_id,
                "item not in selected category, detail view stays closed"
            ),
        }
    }

    let selected = selector.selected_index();
    let categories = selector
        .categories()
        .iter()
        .enumerate()
        .map(|(i, c)| CategoryTab {
            id: c.id.clone(),
            display_name: c.display_name.clone(),
            item_count: c.items.len(),
            selected: i == selected,
        })
        .collect();

    let items = selector
        .current_items()
        .iter()
        .map(|e| ItemSummary {
            id: e.id.clone(),
            title: e.title.clone(),
            summary: e.summary.clone(),
        })
        .collect();

    Ok(Json(ExplorerResponse {
        id: catalog.id.clone(),
        title: catalog.title.clone(),
        section: catalog.section.clone(),
        intro: catalog.intro.clone(),
        selected_category: selector.current_category().id.clone(),
        categories,
        items,
        inspected: inspector.open_item().cloned(),
    }))
}
