use axum::{
    extract::{Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::CatalogSource;
use crate::cli::ServeArgs;
use crate::core::types::Species;
use crate::matching::engine::MatchingConfig;
use crate::resolver::{Resolution, ResolveError, Resolver};

/// Request timeout applied around every handler
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum requests served at once
pub const MAX_CONCURRENT_REQUESTS: usize = 100;

/// Shown with an ambiguous result so the caller knows how to narrow it down
pub const DISAMBIGUATION_INSTRUCTION: &str =
    "Please re-run the query with one of the following exact breed labels as the breed name";

/// Shared application state
pub struct AppState {
    pub resolver: Resolver,
}

/// Enhanced error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

#[derive(Deserialize)]
struct ResolveParams {
    species: Option<String>,
    breed: Option<String>,
}

#[derive(Deserialize)]
struct BreedsParams {
    species: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

/// Map a resolution failure to its HTTP status and body
pub fn error_response(err: &ResolveError) -> Response {
    let (status, body) = match err {
        ResolveError::InvalidSpecies(_) => (
            StatusCode::BAD_REQUEST,
            create_safe_error_response("invalid_species", &err.to_string(), None),
        ),
        ResolveError::InvalidQuery(_) => (
            StatusCode::BAD_REQUEST,
            create_safe_error_response("invalid_query", &err.to_string(), None),
        ),
        ResolveError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            create_safe_error_response("not_found", &err.to_string(), None),
        ),
        ResolveError::DataUnavailable(detail) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            create_safe_error_response(
                "data_unavailable",
                "Breed data is currently unavailable.",
                Some(detail.as_str()),
            ),
        ),
    };

    (status, Json(body)).into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created, the catalog
/// cannot be loaded, or the server fails to start.
pub fn run(args: ServeArgs, source: CatalogSource) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args, source).await })
}

/// Create the application router with all routes and middleware configured.
///
/// The resolver's catalog is loaded here so a bad dataset stops startup
/// instead of failing every request.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router(resolver: Resolver) -> anyhow::Result<Router> {
    let catalog = resolver.catalog()?;
    tracing::info!(breeds = catalog.len(), "Breed catalog ready");

    let state = Arc::new(AppState { resolver });

    // Configure IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10) // 10 requests per second per IP
        .burst_size(50) // Allow bursts of 50 requests
        .finish()
        .unwrap();

    let app = Router::new()
        .route("/api/resolve", get(resolve_handler))
        .route("/api/breeds", get(breeds_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Security headers for browser protection
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // IP-based rate limiting to prevent abuse
                .layer(GovernorLayer {
                    config: Arc::new(governor_conf),
                })
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                ))
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS)),
        );

    Ok(app)
}

async fn run_server(args: ServeArgs, source: CatalogSource) -> anyhow::Result<()> {
    let resolver = Resolver::with_config(source, MatchingConfig::from(&args.matching));
    let app = create_router(resolver)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting breed-resolver web server at http://{addr}");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Resolve a breed name: `GET /api/resolve?species=dog&breed=lab`
async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveParams>,
) -> Response {
    let species = params.species.unwrap_or_default();
    let breed = params.breed.unwrap_or_default();

    match state.resolver.resolve(&species, &breed) {
        Ok(Resolution::Resolved {
            breed_id,
            label,
            key,
        }) => Json(serde_json::json!({
            "status": "resolved",
            "breed_id": breed_id,
            "label": label,
            "key": key,
        }))
        .into_response(),
        Ok(Resolution::Ambiguous { count, options }) => {
            let breeds: Vec<serde_json::Value> = options
                .iter()
                .map(|o| {
                    serde_json::json!({
                        "label": o.label,
                        "key": o.key,
                        "match_type": o.match_type,
                    })
                })
                .collect();

            Json(serde_json::json!({
                "status": "multiple_breeds_found",
                "message": format!(
                    "Found {count} breeds matching '{}'. Please specify which breed you meant.",
                    breed.trim()
                ),
                "count": count,
                "breeds": breeds,
                "instruction": DISAMBIGUATION_INSTRUCTION,
            }))
            .into_response()
        }
        Err(err) => {
            tracing::debug!(%species, %breed, "Breed resolution failed: {err}");
            error_response(&err)
        }
    }
}

/// List quotable breeds: `GET /api/breeds?species=cat`
async fn breeds_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BreedsParams>,
) -> Response {
    let raw = params.species.unwrap_or_default();
    let Ok(species) = raw.parse::<Species>() else {
        return error_response(&ResolveError::InvalidSpecies(raw));
    };

    match state.resolver.eligible_breeds(species) {
        Ok(breeds) => {
            let rows: Vec<serde_json::Value> = breeds
                .iter()
                .map(|b| {
                    serde_json::json!({
                        "key": b.key,
                        "label": b.label,
                        "breed_id": b.breed_id(),
                    })
                })
                .collect();

            Json(serde_json::json!({
                "species": species,
                "count": rows.len(),
                "breeds": rows,
            }))
            .into_response()
        }
        Err(err) => error_response(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::BreedCatalog;
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use axum::http::Request;
    use tower::ServiceExt;

    const FIXTURE: &str = r#"{
        "labrador_retriever": {"label": "Labrador Retriever", "providers": {"HealthyPaws": "11", "PrudentPet": "Dog~Labrador Retriever"}},
        "golden_retriever": {"label": "Golden Retriever", "providers": {"HealthyPaws": "12", "PrudentPet": "Dog~Golden Retriever"}},
        "siamese": {"label": "Siamese", "providers": {"HealthyPaws": "22", "PrudentPet": "Cat~Siamese"}}
    }"#;

    fn make_router() -> Router {
        let catalog = BreedCatalog::from_json(FIXTURE).unwrap();
        create_router(Resolver::from_catalog(catalog, MatchingConfig::default())).unwrap()
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let mut request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        // The rate limiter keys on the peer address
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_resolve_single_match() {
        let (status, body) =
            get_json(make_router(), "/api/resolve?species=dog&breed=labrador%20retriever").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "resolved");
        assert_eq!(body["breed_id"], "11");
        assert_eq!(body["key"], "labrador_retriever");
    }

    #[tokio::test]
    async fn test_resolve_multiple_matches() {
        let (status, body) =
            get_json(make_router(), "/api/resolve?species=DOG&breed=retriever").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "multiple_breeds_found");
        assert_eq!(body["count"], 2);
        assert_eq!(body["breeds"][0]["label"], "Labrador Retriever");
        assert_eq!(body["breeds"][1]["match_type"], "partial");
        assert_eq!(
            body["message"],
            "Found 2 breeds matching 'retriever'. Please specify which breed you meant."
        );
        assert_eq!(body["instruction"], DISAMBIGUATION_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_resolve_invalid_species() {
        let (status, body) = get_json(make_router(), "/api/resolve?species=bird&breed=parrot").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_species");

        let (status, _) = get_json(make_router(), "/api/resolve?breed=beagle").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_resolve_missing_breed() {
        let (status, body) = get_json(make_router(), "/api/resolve?species=cat").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_query");
        assert_eq!(body["error"], "Breed name is required");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let (status, body) = get_json(make_router(), "/api/resolve?species=cat&breed=zebra").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_type"], "not_found");
        assert!(body["details"].is_null());
    }

    #[tokio::test]
    async fn test_breeds_listing() {
        let (status, body) = get_json(make_router(), "/api/breeds?species=dog").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["species"], "dog");
        assert_eq!(body["count"], 2);
        assert_eq!(body["breeds"][0]["key"], "labrador_retriever");

        let (status, _) = get_json(make_router(), "/api/breeds?species=fish").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_data_unavailable_hides_details() {
        let response = error_response(&ResolveError::DataUnavailable(
            "Failed to read breed catalog: /secret/path".to_string(),
        ));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!text.contains("/secret/path"));

        let body: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["error_type"], "data_unavailable");
        assert_eq!(body["error"], "Breed data is currently unavailable.");
        assert!(body["details"].is_null());
    }

    #[test]
    fn test_router_refuses_missing_catalog() {
        let resolver = Resolver::new(CatalogSource::File("/no/such/breeds.json".into()));
        assert!(create_router(resolver).is_err());
    }
}
