use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{domains::otp::rest::otp_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .merge(otp_routes())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
