use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::use_cases::add_team_member::command::AddTeamMember;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddTeamMemberBody {
    pub name: String,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddTeamMemberBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AddTeamMember {
        name: body.name,
        avatar: body.avatar,
        role: body.role,
    };

    match state.add_handler.handle(command).await {
        Ok(members) => (StatusCode::CREATED, Json(members)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
