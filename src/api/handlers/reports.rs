use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::ApiError,
        validation::{parse_id, parse_period},
    },
    reports::processor_enums::{
        CategoryTotalsInputArgs, MonthlySummaryInputArgs, ReportsProcessorInput,
        ReportsProcessorOutput,
    },
    utils::app_config::AppConfig,
};

/// GET /api/expenses/by-category/:user_id/:category_id
pub async fn get_expenses_by_category(
    State(app_config): State<AppConfig>,
    Path((user_id, category_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user_id = parse_id(&user_id, "user_id")?;
    let category_id = parse_id(&category_id, "category_id")?;

    let action = ActionRouterInput::Reports(ReportsProcessorInput::CategoryTotals(
        CategoryTotalsInputArgs { user_id, category_id },
    ));

    match action.process(app_config).await? {
        ActionRouterOutput::Reports(ReportsProcessorOutput::CategoryTotals(report)) => {
            let json = serde_json::to_value(&report)
                .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;
            Ok((StatusCode::OK, Json(json)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/expenses/monthly-summary/:user_id/:year/:month
pub async fn get_monthly_summary(
    State(app_config): State<AppConfig>,
    Path((user_id, year, month)): Path<(String, String, String)>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user_id = parse_id(&user_id, "user_id")?;
    let period = parse_period(&year, &month)?;

    let action = ActionRouterInput::Reports(ReportsProcessorInput::MonthlySummary(
        MonthlySummaryInputArgs {
            user_id,
            year: period.year(),
            month: period.month(),
        },
    ));

    match action.process(app_config).await? {
        ActionRouterOutput::Reports(ReportsProcessorOutput::MonthlySummary(summary)) => {
            let json = serde_json::to_value(&summary)
                .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;
            Ok((StatusCode::OK, Json(json)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
