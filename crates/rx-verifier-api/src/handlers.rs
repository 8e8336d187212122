//! Request handlers. Each one delegates to the shared `PrescriptionVerifier`.

use axum::extract::State;
use axum::Json;
use rx_verifier_core::{
    AlternativeSuggestion, AnalysisRequest, AnalysisResult, DrugInteraction, DrugListRequest,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "Rx Verifier API";

/// Liveness response for `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub ok: bool,
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        ok: true,
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Full analysis of a prescription.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let result = state.verifier.analyze(&request).await.map_err(|e| {
        tracing::debug!(error = %e, "Rejected analysis request");
        ApiError::from(e)
    })?;
    Ok(Json(result))
}

pub async fn interactions(
    State(state): State<AppState>,
    Json(request): Json<DrugListRequest>,
) -> Json<Vec<DrugInteraction>> {
    Json(state.verifier.check_interactions(&request.drugs))
}

pub async fn alternatives(
    State(state): State<AppState>,
    Json(request): Json<DrugListRequest>,
) -> Json<Vec<AlternativeSuggestion>> {
    Json(state.verifier.suggest_alternatives(&request.drugs))
}
