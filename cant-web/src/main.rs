use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use cant::logging::env_filter;
use cant::symbols::{categories, filter_by_category};
use cant::{
    Language, LocalizedSymbol, SearchQuery, SymbolCatalogue, SymbolSet, TermEntry, load_symbols,
    load_tables, search,
};
use cant_translate::{Dictionaries, Dictionary, Direction, Token};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Environment variable holding the address to bind
const ADDR_ENV: &str = "CANT_WEB_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

fn default_language() -> String {
    Language::English.code().to_string()
}

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub direction: Direction,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub tokens: Vec<Token>,
    pub output: String,
    pub translated_count: usize,
}

#[derive(Deserialize)]
pub struct DictionaryParams {
    #[serde(default = "default_language")]
    pub language: String,
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct DictionaryResponse {
    pub entries: Vec<TermEntry>,
    pub total: usize,
}

#[derive(Deserialize)]
pub struct LanguageParams {
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Deserialize)]
pub struct SymbolParams {
    #[serde(default)]
    pub set: SymbolSet,
    #[serde(default = "default_language")]
    pub language: String,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SymbolsResponse {
    pub symbols: Vec<LocalizedSymbol>,
    pub categories: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

#[derive(Clone)]
pub struct AppState {
    pub dictionaries: Arc<Dictionaries>,
    pub symbols: Arc<SymbolCatalogue>,
}

impl AppState {
    fn dictionary(&self, language: &str) -> Result<&Dictionary, ApiError> {
        let language = Language::from_locale(language).map_err(|e| bad_request(e.to_string()))?;
        self.dictionaries.get(language).ok_or_else(|| {
            bad_request(format!("No term table loaded for '{}'", language))
        })
    }
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/translate", post(translate_phrase))
        .route("/api/dictionary", get(search_dictionary))
        .route("/api/categories", get(list_categories))
        .route("/api/symbols", get(list_symbols))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .init();

    let dictionaries = Dictionaries::from_tables(load_tables(None)?);
    if dictionaries.is_empty() {
        warn!("No term tables loaded, every request will be rejected");
    }
    let state = AppState {
        dictionaries: Arc::new(dictionaries),
        symbols: Arc::new(load_symbols(None)?),
    };

    info!("Starting Thieves' Cant translation server");

    let addr = env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn translate_phrase(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let dictionary = state.dictionary(&request.language)?;
    debug!("Translating '{}' ({})", &request.text, request.direction);

    let translation = dictionary.translate(&request.text, request.direction);
    let translated_count = translation.translated_count();

    info!(
        "Translated {} tokens for {} ({}), {} substituted",
        translation.tokens.len(),
        dictionary.language(),
        request.direction,
        translated_count
    );

    Ok(Json(TranslateResponse {
        tokens: translation.tokens,
        output: translation.output,
        translated_count,
    }))
}

async fn search_dictionary(
    State(state): State<AppState>,
    Query(params): Query<DictionaryParams>,
) -> Result<Json<DictionaryResponse>, ApiError> {
    let dictionary = state.dictionary(&params.language)?;

    let mut query = SearchQuery::new();
    if let Some(text) = &params.q {
        query.with_text(text);
    }
    if let Some(category) = &params.category {
        query.with_category(category);
    }

    let entries: Vec<TermEntry> = search(dictionary.table(), &query)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(DictionaryResponse {
        entries,
        total: dictionary.table().len(),
    }))
}

async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<LanguageParams>,
) -> Result<Json<Vec<String>>, ApiError> {
    let dictionary = state.dictionary(&params.language)?;
    Ok(Json(
        dictionary
            .table()
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    ))
}

async fn list_symbols(
    State(state): State<AppState>,
    Query(params): Query<SymbolParams>,
) -> Result<Json<SymbolsResponse>, ApiError> {
    let language = Language::from_locale(&params.language).map_err(|e| bad_request(e.to_string()))?;
    let symbols = state.symbols.symbols(params.set);

    Ok(Json(SymbolsResponse {
        symbols: filter_by_category(symbols, params.category.as_deref())
            .into_iter()
            .map(|symbol| symbol.localized(language))
            .collect(),
        categories: categories(symbols).into_iter().map(str::to_string).collect(),
        total: symbols.len(),
    }))
}
