use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::core::week::Weekday;
use crate::modules::attendance::use_cases::delete_schedule_day::command::DeleteScheduleDay;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteScheduleDayBody {
    pub member_id: String,
    pub week_id: String,
    pub day: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteScheduleDayBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let day: Weekday = match body.day.parse() {
        Ok(day) => day,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = DeleteScheduleDay {
        member_id: body.member_id,
        week_id: body.week_id,
        day,
    };

    match state.delete_handler.handle(command).await {
        Ok(members) => Json(members).into_response(),
        Err(
            err @ (ApplicationError::MemberNotFound(_)
            | ApplicationError::ScheduleNotFound { .. }),
        ) => (StatusCode::NOT_FOUND, err.to_string()).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
