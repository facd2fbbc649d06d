//! HTTP binding - mounts the assembled schema at `/graphql`
//!
//! POST executes a GraphQL operation; GET on the same path serves the
//! in-browser GraphiQL IDE. The transport stays thin: every behavior lives
//! behind the schema.

use std::net::SocketAddr;
use std::path::PathBuf;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::graphql::{ContactSchema, build_schema};
use crate::storage::ContactStore;

async fn graphql_handler(
    State(schema): State<ContactSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Build the transport router around an assembled schema
pub fn app(schema: ContactSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

/// Open the database, assemble the schema, and serve until shutdown
pub async fn start_server(port: u16, database_path: PathBuf) -> anyhow::Result<()> {
    let store = ContactStore::open(&database_path)?;
    let app = app(build_schema(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);
    println!("🌍 GraphQL server running at http://{}/graphql", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
