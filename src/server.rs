use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api::{
    ApiError, CategoriesResponse, DraftRequest, DraftRules, HealthResponse, KeywordsResponse,
    MetaDescriptionResponse, OptimizeResponse, SlugRequest, SlugResponse, StatsResponse,
    TitlesResponse,
};
use crate::categories::CategoryRepository;
use crate::service::AiContentService;
use crate::text::{measure, slugify};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AiContentService>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl AppState {
    pub fn new(service: AiContentService, categories: impl CategoryRepository + 'static) -> Self {
        Self {
            service: Arc::new(service),
            categories: Arc::new(categories),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/ai/titles", post(titles_handler))
        .route("/api/ai/keywords", post(keywords_handler))
        .route("/api/ai/meta-description", post(meta_description_handler))
        .route("/api/ai/categories", post(categories_handler))
        .route("/api/ai/optimize", post(optimize_handler))
        .route("/api/text/stats", post(stats_handler))
        .route("/api/slug", post(slug_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, host: &str, port: u16) -> Result<(), String> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;

    info!(%addr, ai_available = state.service.is_available(), "blog-assist listening");
    axum::serve(listener, router(state))
        .await
        .map_err(|err| format!("server error: {}", err))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ai_available: state.service.is_available(),
    })
}

async fn titles_handler(
    State(state): State<AppState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<TitlesResponse>, ApiError> {
    let Json(request) = payload?;
    let draft = request.into_draft(DraftRules::CONTENT_ONLY)?;
    let suggestions = state.service.generate_title_suggestions(&draft.body).await;
    Ok(Json(TitlesResponse {
        suggestions,
        success: true,
    }))
}

async fn keywords_handler(
    State(state): State<AppState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<KeywordsResponse>, ApiError> {
    let Json(request) = payload?;
    let draft = request.into_draft(DraftRules::TITLE_AND_CONTENT)?;
    let keywords = state
        .service
        .generate_seo_keywords(&draft.title, &draft.body)
        .await;
    Ok(Json(KeywordsResponse {
        keywords,
        success: true,
    }))
}

async fn meta_description_handler(
    State(state): State<AppState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<MetaDescriptionResponse>, ApiError> {
    let Json(request) = payload?;
    let draft = request.into_draft(DraftRules::TITLE_AND_CONTENT)?;
    let meta_description = state
        .service
        .generate_meta_description(&draft.title, &draft.body)
        .await;
    Ok(Json(MetaDescriptionResponse {
        meta_description,
        success: true,
    }))
}

async fn categories_handler(
    State(state): State<AppState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let Json(request) = payload?;
    let draft = request.into_draft(DraftRules::TITLE_AND_CONTENT)?;
    let existing = match state.categories.list_categories().await {
        Ok(categories) => categories,
        Err(err) => {
            error!(error = %err, "failed to list categories");
            Vec::new()
        }
    };

    let names = state
        .service
        .suggest_categories(&draft.title, &draft.body, &existing)
        .await;
    // Listed in repository order, not the order the model named them.
    let suggestions = existing
        .into_iter()
        .filter(|category| names.contains(&category.name))
        .collect();

    Ok(Json(CategoriesResponse {
        suggestions,
        success: true,
    }))
}

async fn optimize_handler(
    State(state): State<AppState>,
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, ApiError> {
    let Json(request) = payload?;
    let draft = request.into_draft(DraftRules::OPTIMIZE)?;
    let report = state.service.optimize_content(&draft.body).await;
    Ok(Json(OptimizeResponse {
        report,
        success: true,
    }))
}

async fn stats_handler(
    payload: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<StatsResponse>, ApiError> {
    let Json(request) = payload?;
    let draft = request.into_draft(DraftRules::ANY)?;
    Ok(Json(StatsResponse {
        metrics: measure(&draft.body),
    }))
}

async fn slug_handler(
    payload: Result<Json<SlugRequest>, JsonRejection>,
) -> Result<Json<SlugResponse>, ApiError> {
    let Json(request) = payload?;
    let input = request.input.unwrap_or_default();
    if input.trim().is_empty() {
        return Err(ApiError::Validation("input is required".to_string()));
    }
    Ok(Json(SlugResponse {
        slug: slugify(&input),
    }))
}
