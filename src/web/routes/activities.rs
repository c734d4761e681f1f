use axum::{extract::State, Json};

use crate::database::{activity_repo, ActivityMap, ActivityStore};

pub async fn activities_handler(State(store): State<ActivityStore>) -> Json<ActivityMap> {
    Json(activity_repo::list_activities(&store).await)
}
