//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use yieldcalc_bonds::BondCalculator;
use yieldcalc_core::types::{BondYieldResult, Date};
use yieldcalc_core::validation::{BondCalculationRequest, ValidationRules};

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The bond calculator
    pub calculator: BondCalculator,
    /// Rules applied to incoming requests
    pub rules: ValidationRules,
}

impl AppState {
    /// Builds state from server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            calculator: BondCalculator::new().with_solver(config.solver.to_solver()),
            rules: config.validation_rules(),
        }
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Calculate bond yield metrics.
///
/// Validates the body, defaults the start date to today, and returns
/// `201 Created` with the full result.
pub async fn calculate_bond(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BondCalculationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BondYieldResult>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected calculation body");
        ApiError::from(rejection)
    })?;

    let (input, start_date) = request.validate(&state.rules).map_err(|err| {
        warn!(details = ?err.details, "calculation request failed validation");
        ApiError::from(err)
    })?;
    let start_date = start_date.unwrap_or_else(Date::today);

    let result = state.calculator.calculate(&input, start_date)?;

    info!(
        face_value = input.face_value,
        market_price = input.market_price,
        frequency = input.frequency,
        ytm = result.yield_to_maturity,
        classification = %result.price_classification,
        periods = result.cash_flows.len(),
        "bond calculated"
    );

    Ok((StatusCode::CREATED, Json(result)))
}
