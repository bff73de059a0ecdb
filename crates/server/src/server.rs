use axum::{
    Router,
    routing::{post, put},
};

use std::sync::Arc;

use crate::{expense, income};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Routes for both resources, sharing one `Engine`.
pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/expense", post(expense::add).get(expense::list))
        .route("/expense/{id}", put(expense::update).delete(expense::delete))
        .route("/income", post(income::add).get(income::list))
        .route("/income/{id}", put(income::update).delete(income::delete))
        .with_state(ServerState { engine })
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine))).await
}
