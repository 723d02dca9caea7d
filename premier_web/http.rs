use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use premier_app::app_bus::AppBus;
use premier_types::{Result, errors::ApplicationError};

use crate::handlers::{
    add_player, delete_player, delete_player_by_name, get_player, get_player_by_name,
    list_players, player_stats, update_player,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>) -> AppState {
        AppState { app_bus }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        let cors = cors_layer(state.app_bus.config().cors_origin.as_deref());

        Router::new()
            .route(
                "/api/v1/player",
                get(list_players).post(add_player).put(update_player),
            )
            .route("/api/v1/player/stats", get(player_stats))
            .route("/api/v1/player/{id}", get(get_player).delete(delete_player))
            .route(
                "/api/v1/player/name/{name}",
                get(get_player_by_name).delete(delete_player_by_name),
            )
            .with_state(state)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        Self::serve_with_listener(listener, state).await
    }

    pub async fn serve_with_listener(
        listener: TcpListener,
        state: AppState,
    ) -> Result<(), ApplicationError> {
        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let allow_origin = match origin.map(HeaderValue::from_str) {
        Some(Ok(value)) => AllowOrigin::exact(value),
        Some(Err(e)) => {
            tracing::warn!("Invalid CORS origin, allowing any origin: {e}");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
