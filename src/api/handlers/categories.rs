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
        validation::{parse_id, require, to_money, validate_not_empty},
    },
    categories::processor_enums::{
        AddCategoryInputArgs, CategoriesProcessorInput, CategoriesProcessorOutput,
        UpdateCategoryInputArgs,
    },
    utils::{app_config::AppConfig, commons::deserialize_some},
};

#[derive(Deserialize, Debug)]
pub struct AddCategoryRequest {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub monthly_budget: Option<BigDecimal>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// absent leaves the budget alone, `null` clears it
    #[serde(default, deserialize_with = "deserialize_some")]
    pub monthly_budget: Option<Option<BigDecimal>>,
}

fn unexpected() -> ApiError {
    ApiError::internal_error("Unexpected response type")
}

/// GET /api/categories/:user_id
pub async fn get_categories(
    State(app_config): State<AppConfig>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user_id = parse_id(&user_id, "user_id")?;

    let action = ActionRouterInput::Categories(CategoriesProcessorInput::GetCategories(user_id));

    match action.process(app_config).await? {
        ActionRouterOutput::Categories(CategoriesProcessorOutput::GetCategories(categories)) => {
            let json = serde_json::to_value(&categories)
                .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;
            Ok((StatusCode::OK, Json(json)))
        }
        _ => Err(unexpected()),
    }
}

/// POST /api/categories
pub async fn add_category(
    State(app_config): State<AppConfig>,
    JsonBody(body): JsonBody<AddCategoryRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user_id = require(body.user_id, "user_id")?;
    let name = require(body.name, "name")?;
    validate_not_empty(&name, "name")?;

    let action = ActionRouterInput::Categories(CategoriesProcessorInput::AddCategory(
        AddCategoryInputArgs {
            user_id,
            name,
            monthly_budget: body.monthly_budget.map(to_money),
        },
    ));

    match action.process(app_config).await? {
        ActionRouterOutput::Categories(CategoriesProcessorOutput::AddCategory(category)) => {
            let json = serde_json::to_value(&category)
                .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;
            Ok((StatusCode::CREATED, Json(json)))
        }
        _ => Err(unexpected()),
    }
}

/// PUT /api/categories/:category_id
pub async fn update_category(
    State(app_config): State<AppConfig>,
    Path(category_id): Path<String>,
    JsonBody(body): JsonBody<UpdateCategoryRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let category_id = parse_id(&category_id, "category_id")?;

    let action = ActionRouterInput::Categories(CategoriesProcessorInput::UpdateCategory(
        UpdateCategoryInputArgs {
            category_id,
            name: body.name,
            monthly_budget: body.monthly_budget.map(|budget| budget.map(to_money)),
        },
    ));

    match action.process(app_config).await? {
        ActionRouterOutput::Categories(CategoriesProcessorOutput::UpdateCategory(category)) => {
            let json = serde_json::to_value(&category)
                .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;
            Ok((StatusCode::OK, Json(json)))
        }
        _ => Err(unexpected()),
    }
}

/// DELETE /api/categories/:category_id
pub async fn delete_category(
    State(app_config): State<AppConfig>,
    Path(category_id): Path<String>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let category_id = parse_id(&category_id, "category_id")?;

    let action = ActionRouterInput::Categories(CategoriesProcessorInput::DeleteCategory(category_id));

    match action.process(app_config).await? {
        ActionRouterOutput::Categories(CategoriesProcessorOutput::DeleteCategory) => Ok((
            StatusCode::OK,
            Json(json!({ "message": "Category deleted successfully" })),
        )),
        _ => Err(unexpected()),
    }
}

/// POST /api/categories/initialize/:user_id
pub async fn initialize_default_categories(
    State(app_config): State<AppConfig>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user_id = parse_id(&user_id, "user_id")?;

    let action =
        ActionRouterInput::Categories(CategoriesProcessorInput::InitializeDefaults(user_id));

    match action.process(app_config).await? {
        ActionRouterOutput::Categories(CategoriesProcessorOutput::InitializeDefaults(created)) => {
            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "message": format!("Created {} default categories", created.len()),
                    "categories": created,
                })),
            ))
        }
        _ => Err(unexpected()),
    }
}
