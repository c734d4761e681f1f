use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::database::ActivityStore;
use crate::services::signup_service::{self, SignupError};

#[derive(Debug, Deserialize, Default)]
pub struct SignupQuery {
    pub email: Option<String>,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, SignupError> {
    let result = match signup_service::require_email(query.email.as_deref()) {
        Ok(email) => signup_service::sign_up(&store, &activity_name, email).await,
        Err(e) => Err(e),
    };

    respond("signup", &activity_name, result)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, SignupError> {
    let result = match signup_service::require_email(query.email.as_deref()) {
        Ok(email) => signup_service::unregister(&store, &activity_name, email).await,
        Err(e) => Err(e),
    };

    respond("unregister", &activity_name, result)
}

fn respond(
    action: &str,
    activity_name: &str,
    result: Result<String, SignupError>,
) -> Result<Json<Value>, SignupError> {
    match result {
        Ok(message) => Ok(Json(serde_json::json!({ "message": message }))),
        Err(e) => {
            warn!("{} rejected for '{}': {}", action, activity_name, e);
            Err(e)
        }
    }
}
