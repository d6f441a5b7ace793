//! Career path catalog handlers

use crate::services::paths::{self, CareerPath, PathPlan};
use crate::utils::error::{
    helpers::{not_found_error, validation_error},
    AppResult,
};
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub career_path: String,
    pub duration_months: u32,
}

/// GET /v1/paths
pub async fn list_paths() -> Json<&'static [CareerPath]> {
    Json(paths::CAREER_PATHS)
}

/// POST /v1/paths/plan
pub async fn plan_path(Json(request): Json<PlanRequest>) -> AppResult<Json<PathPlan>> {
    if request.duration_months == 0 {
        return Err(validation_error("duration_months must be at least 1"));
    }
    if request.duration_months > paths::MAX_PLAN_MONTHS {
        return Err(validation_error(format!(
            "duration_months must be at most {}",
            paths::MAX_PLAN_MONTHS
        )));
    }

    paths::plan(&request.career_path, request.duration_months)
        .map(Json)
        .ok_or_else(|| not_found_error(format!("Unknown career path: {}", request.career_path)))
}
