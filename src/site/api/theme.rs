// Theme endpoint - resolved color tokens for web clients

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::ApiError;
use crate::site::SiteState;
use crate::theme::{self, CssTokens, ThemeMode};

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    /// "light" or "dark"; omitted means the configured default
    pub mode: Option<String>,
}

/// GET /api/theme - Token set for one mode as `#rrggbb` strings
pub async fn get_theme(
    State(state): State<SiteState>,
    Query(params): Query<ThemeQuery>,
) -> Result<Json<CssTokens>, ApiError> {
    let mode = match params.mode.as_deref() {
        None => state.default_theme,
        Some(name) => ThemeMode::parse(name).ok_or_else(|| {
            ApiError::BadRequest(format!("Unknown theme mode '{}' (use light or dark)", name))
        })?,
    };

    Ok(Json(theme::resolve(mode).to_css()))
}
