use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::attendance::adapters::outbound::repository::TeamRepository;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.roster.load_all().await {
        Ok(members) => Json(members).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
