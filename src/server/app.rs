use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use anyhow::{anyhow, Result};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(feature = "graphql")]
use axum::extract::State;

#[cfg(feature = "graphql")]
use crate::graphql::{build_schema, GraphQLContext, GraphQLSchema};
use crate::services::PaintingService;

use super::handlers::{health, paintings};

#[derive(OpenApi)]
#[openapi(
    paths(
        paintings::list_paintings,
        paintings::create_painting,
    ),
    components(schemas(paintings::CreatePaintingRequest, paintings::PaintingResponse))
)]
struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub painting_service: PaintingService,
    #[cfg(feature = "graphql")]
    pub graphql_schema: GraphQLSchema,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let painting_service = PaintingService::new(db);

    #[cfg(feature = "graphql")]
    let graphql_schema = build_schema(GraphQLContext::new(painting_service.clone()));

    let state = AppState {
        painting_service,
        #[cfg(feature = "graphql")]
        graphql_schema,
    };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    #[allow(unused_mut)]
    let mut app = Router::new()
        // Placeholder root page
        .route("/", get(hello_world))
        // Health check endpoint
        .route("/health", get(health::health_check))
        // API v1 routes
        .nest("/api/v1", api_v1_routes())
        // Swagger UI documentation
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    #[cfg(feature = "graphql")]
    {
        app = app
            .route("/graphql", post(graphql_handler))
            .route("/graphiql", get(graphql_explorer));
    }

    let app = app
        // Add middleware
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/paintings", get(paintings::list_paintings))
        .route("/paintings", post(paintings::create_painting))
}

async fn hello_world() -> Html<&'static str> {
    Html("<h1>Hello World</h1>")
}

#[cfg(feature = "graphql")]
async fn graphql_handler(
    State(state): State<AppState>,
    req: async_graphql_axum::GraphQLRequest,
) -> async_graphql_axum::GraphQLResponse {
    state.graphql_schema.execute(req.into_inner()).await.into()
}

#[cfg(feature = "graphql")]
async fn graphql_explorer() -> impl axum::response::IntoResponse {
    Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
