use axum::{Json, extract::Query, response::IntoResponse};
use serde::Deserialize;

use crate::modules::attendance::core::week::week_options;

const DEFAULT_WEEK_COUNT: usize = 8;
// one year of options at most, whatever the query asks for
const MAX_WEEK_COUNT: usize = 52;

#[derive(Deserialize)]
pub struct ListWeekOptionsParams {
    pub count: Option<usize>,
}

pub async fn handle(Query(params): Query<ListWeekOptionsParams>) -> impl IntoResponse {
    let count = params.count.unwrap_or(DEFAULT_WEEK_COUNT).min(MAX_WEEK_COUNT);
    Json(week_options(count))
}
