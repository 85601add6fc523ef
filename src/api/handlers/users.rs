use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::ApiError,
        extractors::JsonBody,
        validation::{require, validate_not_empty},
    },
    users::processor_enums::{
        GetUserInputArgs, RegisterUserInputArgs, UsersProcessorInput, UsersProcessorOutput,
    },
    utils::app_config::AppConfig,
};

#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub firebase_uid: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// POST /api/auth/register - 201 for a new user, 200 when the uid is already known
pub async fn register_user(
    State(app_config): State<AppConfig>,
    JsonBody(body): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let firebase_uid = require(body.firebase_uid, "firebase_uid")?;
    let email = require(body.email, "email")?;
    validate_not_empty(&firebase_uid, "firebase_uid")?;
    validate_not_empty(&email, "email")?;

    let action = ActionRouterInput::Users(UsersProcessorInput::Register(RegisterUserInputArgs {
        firebase_uid,
        email,
        name: body.name,
    }));

    let result = action.process(app_config).await?;

    match result {
        ActionRouterOutput::Users(UsersProcessorOutput::Register(output)) => {
            let status = if output.created { StatusCode::CREATED } else { StatusCode::OK };
            let json = serde_json::to_value(&output.user)
                .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;
            Ok((status, Json(json)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /api/auth/user/:firebase_uid
pub async fn get_user(
    State(app_config): State<AppConfig>,
    Path(firebase_uid): Path<String>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let action = ActionRouterInput::Users(UsersProcessorInput::GetUser(
        GetUserInputArgs::ByFirebaseUid(firebase_uid),
    ));

    let result = action.process(app_config).await?;

    match result {
        ActionRouterOutput::Users(UsersProcessorOutput::GetUser(user)) => {
            let json = serde_json::to_value(&user)
                .map_err(|e| ApiError::internal_error(format!("Failed to serialize: {}", e)))?;
            Ok((StatusCode::OK, Json(json)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
