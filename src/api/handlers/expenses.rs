use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::{json, Value};
use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::ApiError,
        extractors::JsonBody,
        validation::{parse_date, parse_id, require, to_money},
    },
    expenses::{
        db_types::CreateExpense,
        operations::validate_amount,
        processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput, UpdateExpenseInputArgs},
    },
    utils::app_config::AppConfig,
};

#[derive(Deserialize, Debug)]
pub struct AddExpenseRequest {
    pub user_id: Option<i32>,
    pub category_id: Option<i32>,
    pub amount: Option<BigDecimal>,
    pub description: Option<String>,
    pub date: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct UpdateExpenseRequest {
    pub category_id: Option<i32>,
    pub amount: Option<BigDecimal>,
    pub description: Option<String>,
    pub date: Option<String>,
}

/// GET /api/expenses/:user_id - most recent first
pub async fn get_expenses(
    State(app_config): State<AppConfig>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user_id = parse_id(&user_id, "user_id")?;

    let action = ActionRouterInput::Expenses(ExpensesProcessorInput::GetExpenses(user_id));

    match action.process(app_config).await? {
        ActionRouterOutput::Expenses(ExpensesProcessorOutput::GetExpenses(expenses)) => {
            let json = serde_json::to_value(&expenses)
                .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;
            Ok((StatusCode::OK, Json(json)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// POST /api/expenses
pub async fn add_expense(
    State(app_config): State<AppConfig>,
    JsonBody(body): JsonBody<AddExpenseRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user_id = require(body.user_id, "user_id")?;
    let category_id = require(body.category_id, "category_id")?;
    let amount = to_money(require(body.amount, "amount")?);
    let date = parse_date(&require(body.date, "date")?)?;
    validate_amount(&amount)?;

    let action = ActionRouterInput::Expenses(ExpensesProcessorInput::AddExpense(CreateExpense {
        user_id,
        category_id,
        amount,
        description: body.description.unwrap_or_default(),
        date,
    }));

    match action.process(app_config).await? {
        ActionRouterOutput::Expenses(ExpensesProcessorOutput::AddExpense(expense)) => {
            let json = serde_json::to_value(&expense)
                .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;
            Ok((StatusCode::CREATED, Json(json)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// PUT /api/expenses/:expense_id - only the supplied fields change
pub async fn update_expense(
    State(app_config): State<AppConfig>,
    Path(expense_id): Path<String>,
    JsonBody(body): JsonBody<UpdateExpenseRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let expense_id = parse_id(&expense_id, "expense_id")?;

    let amount = body.amount.map(to_money);
    if let Some(amount) = &amount {
        validate_amount(amount)?;
    }
    let date = body.date.as_deref().map(parse_date).transpose()?;

    let action = ActionRouterInput::Expenses(ExpensesProcessorInput::UpdateExpense(
        UpdateExpenseInputArgs {
            expense_id,
            category_id: body.category_id,
            amount,
            description: body.description,
            date,
        },
    ));

    match action.process(app_config).await? {
        ActionRouterOutput::Expenses(ExpensesProcessorOutput::UpdateExpense(expense)) => {
            let json = serde_json::to_value(&expense)
                .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;
            Ok((StatusCode::OK, Json(json)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// DELETE /api/expenses/:expense_id
pub async fn delete_expense(
    State(app_config): State<AppConfig>,
    Path(expense_id): Path<String>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let expense_id = parse_id(&expense_id, "expense_id")?;

    let action = ActionRouterInput::Expenses(ExpensesProcessorInput::DeleteExpense(expense_id));

    match action.process(app_config).await? {
        ActionRouterOutput::Expenses(ExpensesProcessorOutput::DeleteExpense) => Ok((
            StatusCode::OK,
            Json(json!({ "message": "Expense deleted successfully" })),
        )),
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
