use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::attendance::core::model::DayStatus;
use crate::modules::attendance::core::week::Weekday;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::update_attendance::command::UpdateAttendance;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateAttendanceBody {
    pub member_id: String,
    pub week_id: String,
    pub day: String,
    pub status: DayStatus,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateAttendanceBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let day: Weekday = match body.day.parse() {
        Ok(day) => day,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateAttendance {
        member_id: body.member_id,
        week_id: body.week_id,
        day,
        status: body.status,
        start_time: body.start_time,
        end_time: body.end_time,
    };

    match state.update_handler.handle(command).await {
        Ok(members) => Json(members).into_response(),
        Err(err @ ApplicationError::MemberNotFound(_)) => {
            (StatusCode::NOT_FOUND, err.to_string()).into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
