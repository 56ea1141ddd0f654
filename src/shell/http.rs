use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::attendance::use_cases::add_team_member::inbound::http as add_team_member_http;
use crate::modules::attendance::use_cases::delete_schedule_day::inbound::http as delete_schedule_day_http;
use crate::modules::attendance::use_cases::get_attendance::inbound::http as get_attendance_http;
use crate::modules::attendance::use_cases::list_week_options::inbound::http as list_week_options_http;
use crate::modules::attendance::use_cases::update_attendance::inbound::http as update_attendance_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/attendance", get(get_attendance_http::handle))
        .route("/weeks", get(list_week_options_http::handle))
        .route("/update-attendance", post(update_attendance_http::handle))
        .route(
            "/delete-schedule-day",
            post(delete_schedule_day_http::handle),
        )
        .route("/add-team-member", post(add_team_member_http::handle))
        .with_state(state)
}
