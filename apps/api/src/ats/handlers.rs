//! Axum route handlers for the ATS API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::ats::catalog::{self, CategoryInfo};
use crate::ats::report::{AtsReport, Category, ScoreBand};
use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume: Resume,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub scorer_backend: &'static str,
    pub rating: ScoreBand,
    pub report: AtsReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/analyze
///
/// Scores a resume, optionally against a job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let job_description = request.job_description.as_deref();

    if let Some(jd) = job_description {
        let limit = state.config.max_job_description_chars;
        if jd.chars().count() > limit {
            return Err(AppError::Validation(format!(
                "jobDescription exceeds {limit} characters"
            )));
        }
    }

    let report = state.scorer.analyze(&request.resume, job_description);
    let analysis_id = Uuid::new_v4();

    info!(
        %analysis_id,
        overall_score = report.overall_score,
        with_job_description = job_description.is_some_and(|jd| !jd.is_empty()),
        "Resume analyzed"
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        scorer_backend: state.scorer.backend(),
        rating: report.rating(),
        report,
    }))
}

/// GET /api/v1/ats/categories
pub async fn handle_list_categories() -> Json<Vec<CategoryInfo>> {
    Json(catalog::all())
}

/// GET /api/v1/ats/categories/:id
pub async fn handle_get_category(Path(id): Path<String>) -> Result<Json<CategoryInfo>, AppError> {
    let category = Category::from_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Category {id} not found")))?;
    Ok(Json(catalog::describe(category)))
}
