//! Axum handlers.
//!
//! Validation and classification failures travel as [`ClassifierError`]
//! values and are turned into the JSON error envelope here, at the boundary.
//! The fun-fact lookup cannot fail: it always yields text.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::core::classifier::classify;
use crate::core::{ClassificationResult, FactSource};
use crate::utils::error::{ClassifierError, Result};
use crate::utils::validation::parse_number;

/// Error envelope shared by every failing response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub number: Option<String>,
    pub error: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub cached_facts: usize,
}

fn error_response(raw: Option<String>, err: ClassifierError) -> Response {
    let status = if err.is_client_error() {
        tracing::debug!("Rejected classification input: {}", err);
        StatusCode::BAD_REQUEST
    } else {
        tracing::error!("Classification failed: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let body = ErrorBody {
        number: raw,
        error: true,
        message: err.user_friendly_message(),
    };
    (status, Json(body)).into_response()
}

/// First value of `name` in decoded query pairs; later repeats are ignored.
fn first_param(pairs: Vec<(String, String)>, name: &str) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// GET /api/classify-number?number=<value>
pub async fn classify_number<S: FactSource + 'static>(
    State(state): State<AppState<S>>,
    params: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let raw = match params {
        Ok(Query(pairs)) => first_param(pairs, "number"),
        Err(rejection) => {
            tracing::debug!("Unparseable query string: {}", rejection.body_text());
            return error_response(None, ClassifierError::MalformedQueryError);
        }
    };

    let outcome = classify_raw(&state, raw.as_deref()).await;
    match outcome {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(raw, err),
    }
}

async fn classify_raw<S: FactSource + 'static>(
    state: &AppState<S>,
    raw: Option<&str>,
) -> Result<ClassificationResult> {
    let raw = raw.ok_or_else(|| ClassifierError::MissingInputError {
        param: "number".to_string(),
    })?;
    let number = parse_number(raw)?;
    let classification = classify(number);

    let fun_fact = state.facts.get_fun_fact(number).await;
    Ok(classification.with_fun_fact(fun_fact))
}

/// GET /health
pub async fn health<S: FactSource + 'static>(
    State(state): State<AppState<S>>,
) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok".to_string(),
        started_at: state.started_at,
        cached_facts: state.facts.cache().len(),
    })
}
