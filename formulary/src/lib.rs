//! Web form for looking up chemical formulas by compound name

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    routing::{get, post},
};
use formulary_core::{CompoundTable, LookupResult};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub mod config;

/// Shown in place of a formula when no compound matches
pub const NOT_FOUND_TEXT: &str = "Formula not found";

/// Shared, read-only application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub table: Arc<CompoundTable>,
}

impl AppState {
    pub fn new(table: CompoundTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

/// Build the router serving the form and lookup endpoints
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/submit", post(submit))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub compound_name: String,
    pub formula: String,
    pub found: bool,
}

impl ResultTemplate {
    pub fn new(compound_name: String, result: LookupResult<'_>) -> Self {
        let found = result.is_found();
        let formula = result.formula().unwrap_or(NOT_FOUND_TEXT).to_string();
        Self {
            compound_name,
            formula,
            found,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(rename = "formulaName")]
    pub formula_name: String,
}

async fn index() -> IndexTemplate {
    IndexTemplate
}

async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> ResultTemplate {
    let result = state.table.lookup(&form.formula_name);
    debug!(name = %form.formula_name, found = result.is_found(), "Compound lookup");
    ResultTemplate::new(form.formula_name, result)
}
