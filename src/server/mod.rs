pub mod routes;

use crate::adapters::store::{MemoryCatalog, MemoryUserRegistry};
use crate::core::query::QueryService;
use crate::core::registration::RegistrationService;
use crate::utils::error::Result;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub query: Arc<QueryService<MemoryCatalog>>,
    pub registration: Arc<RegistrationService<MemoryUserRegistry>>,
}

impl AppState {
    pub fn new(catalog: MemoryCatalog, users: MemoryUserRegistry) -> Self {
        Self {
            query: Arc::new(QueryService::new(catalog)),
            registration: Arc::new(RegistrationService::new(users)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(routes::register))
        .route("/", get(routes::list_books))
        .route("/isbn/:isbn", get(routes::book_by_isbn))
        .route("/author/:author", get(routes::books_by_author))
        .route("/title/:title", get(routes::books_by_title))
        .route("/review/:isbn", get(routes::book_reviews))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(routes::handle_panic)),
        )
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
