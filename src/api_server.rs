// Axum API Server Module
//
// Purpose: thin HTTP boundary around the training module generator.
// Validation happens here; the generator only ever sees clean requests.

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::training::{
    title_case, ModuleResult, RawModuleRequest, TrainingModuleGenerator, ValidationError,
};
use crate::web::handlers::pages;

/// Message returned for any fault the caller cannot fix.
pub const GENERIC_FAILURE_MESSAGE: &str = "Could not generate training module. Please try again.";

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<TrainingModuleGenerator>,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        tracing::info!("Initializing training module generator...");
        let generator = TrainingModuleGenerator::new();
        tracing::info!(
            "Knowledge base loaded: {} crops, {} problems",
            generator.knowledge().crop_keys().len(),
            generator.knowledge().problem_keys().len()
        );

        Self::with_generator(generator, &config.service_name)
    }

    pub fn with_generator(generator: TrainingModuleGenerator, service_name: &str) -> Self {
        Self {
            generator: Arc::new(generator),
            service_name: Arc::from(service_name),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Landing page + HTML preview
        .route("/", get(pages::home_page))
        .route("/modules/preview", get(pages::module_preview))

        // JSON API
        .route("/generate", post(generate_module))
        .route("/api/knowledge", get(list_knowledge))

        // Liveness check
        .route("/health", get(health_check))

        // Middleware (applied in reverse order)
        .layer(CatchPanicLayer::custom(handle_panic)) // panics -> generic 500
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "working",
        "service": &*state.service_name,
        "time": chrono::Local::now().to_rfc3339()
    }))
}

/// Create and return a training module.
///
/// POST /generate  {"crop": "...", "region": "...", "problem": "...", "language": "..."}
async fn generate_module(
    State(state): State<AppState>,
    payload: Result<Json<RawModuleRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(raw) = payload
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e.body_text())))?;
    let request = raw.validate()?;

    tracing::info!(
        crop = %request.crop,
        region = %request.region,
        problem = %request.problem,
        language = %request.language,
        "Creating training module"
    );

    let module = state.generator.generate(&request);
    Ok(Json(module_response(&module)))
}

/// Known crop and problem keys (used to populate the form).
async fn list_knowledge(State(state): State<AppState>) -> impl IntoResponse {
    let knowledge = state.generator.knowledge();
    Json(serde_json::json!({
        "crops": knowledge.crop_keys(),
        "problems": knowledge.problem_keys(),
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Display title for a module, e.g. "Rice Farming Training Module".
pub fn module_title(crop: &str) -> String {
    format!("{} Farming Training Module", title_case(crop))
}

/// Display subtitle for a module, e.g. "Region: Punjab | Focus: Irrigation".
pub fn module_subtitle(region: &str, problem: &str) -> String {
    format!("Region: {} | Focus: {}", region, title_case(problem))
}

/// Success envelope for POST /generate.
pub fn module_response(module: &ModuleResult) -> serde_json::Value {
    let meta = &module.metadata;
    serde_json::json!({
        "success": true,
        "data": {
            "title": module_title(&meta.crop),
            "subtitle": module_subtitle(&meta.region, &meta.problem),
            "content": module.content,
            "language": meta.language,
        },
        "system_info": {
            "generated_at": meta.generation_time,
            "ai_assistance": meta.ai_used,
        }
    })
}

/// Convert a handler panic into the generic failure response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(detail).into_response()
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    BadRequest(String),
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(err) => {
                tracing::warn!("Rejected request: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Internal(msg) => {
                // Cause stays in the logs; callers get the generic message
                tracing::error!("Error creating module: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE_MESSAGE.to_string())
            }
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_title_and_subtitle() {
        assert_eq!(module_title("rice"), "Rice Farming Training Module");
        assert_eq!(module_title("sweet potato"), "Sweet Potato Farming Training Module");
        assert_eq!(module_subtitle("Punjab", "pest control"), "Region: Punjab | Focus: Pest Control");
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_500() {
        let response = handle_panic(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_validation_error_is_400() {
        let err = ValidationError::MissingFields { missing: vec!["crop"] };
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("missing: crop"));
    }
}
