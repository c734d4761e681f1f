use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::info;

use crate::database::ActivityStore;

/// Why a signup or unregister request was refused. The display text is the
/// `detail` string sent back to the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
    #[error("Missing email query parameter")]
    MissingEmail,
}

impl SignupError {
    pub fn status(&self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp | SignupError::NotRegistered => StatusCode::BAD_REQUEST,
            SignupError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

pub fn require_email(email: Option<&str>) -> Result<&str, SignupError> {
    email
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .ok_or(SignupError::MissingEmail)
}

/// Appends `email` to the activity's roster. Returns the confirmation message.
pub async fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let mut activities = store.write().await;
    let activity = activities
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    if activity.has_participant(email) {
        return Err(SignupError::AlreadySignedUp);
    }

    activity.participants.push(email.to_string());
    info!(activity = %activity_name, email = %email, "student signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Removes `email` from the activity's roster, keeping the order of the rest.
pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let mut activities = store.write().await;
    let activity = activities
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    let Some(pos) = activity.participants.iter().position(|p| p == email) else {
        return Err(SignupError::NotRegistered);
    };

    activity.participants.remove(pos);
    info!(activity = %activity_name, email = %email, "student unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::activity_repo;

    #[test]
    fn require_email_rejects_blank() {
        assert_eq!(require_email(None), Err(SignupError::MissingEmail));
        assert_eq!(require_email(Some("  ")), Err(SignupError::MissingEmail));
        assert_eq!(
            require_email(Some(" a@mergington.edu ")),
            Ok("a@mergington.edu")
        );
    }

    #[tokio::test]
    async fn sign_up_appends_to_roster() {
        let store = ActivityStore::seeded();
        let msg = sign_up(&store, "Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();
        assert_eq!(msg, "Signed up newstudent@mergington.edu for Chess Club");

        let listed = activity_repo::list_activities(&store).await;
        assert_eq!(
            listed["Chess Club"].participants.last().map(String::as_str),
            Some("newstudent@mergington.edu")
        );
    }

    #[tokio::test]
    async fn sign_up_twice_is_rejected() {
        let store = ActivityStore::seeded();
        sign_up(&store, "Art Club", "x@mergington.edu").await.unwrap();
        let err = sign_up(&store, "Art Club", "x@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, SignupError::AlreadySignedUp);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let listed = activity_repo::list_activities(&store).await;
        let count = listed["Art Club"]
            .participants
            .iter()
            .filter(|p| p.as_str() == "x@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found() {
        let store = ActivityStore::seeded();
        let err = sign_up(&store, "Nonexistent Activity", "a@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, SignupError::ActivityNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = unregister(&store, "Nonexistent Activity", "a@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, SignupError::ActivityNotFound);
    }

    #[tokio::test]
    async fn unregister_keeps_remaining_order() {
        let store = ActivityStore::seeded();
        sign_up(&store, "Chess Club", "c@mergington.edu").await.unwrap();

        let msg = unregister(&store, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap();
        assert_eq!(msg, "Unregistered michael@mergington.edu from Chess Club");

        let listed = activity_repo::list_activities(&store).await;
        assert_eq!(
            listed["Chess Club"].participants,
            vec!["daniel@mergington.edu", "c@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn unregister_unknown_student_is_rejected() {
        let store = ActivityStore::seeded();
        let err = unregister(&store, "Chess Club", "notregistered@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, SignupError::NotRegistered);
        assert_eq!(err.to_string(), "Student is not registered for this activity");
    }

    #[tokio::test]
    async fn capacity_is_not_enforced() {
        let store = ActivityStore::seeded();
        let cap = activity_repo::list_activities(&store).await["Math Club"].max_participants;
        for i in 0..cap {
            sign_up(&store, "Math Club", &format!("extra{}@mergington.edu", i))
                .await
                .unwrap();
        }

        let listed = activity_repo::list_activities(&store).await;
        assert!(listed["Math Club"].participants.len() > cap as usize);
    }

    #[tokio::test]
    async fn concurrent_signups_all_land() {
        let store = ActivityStore::seeded();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                sign_up(&store, "Gym Class", &format!("s{}@mergington.edu", i)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let listed = activity_repo::list_activities(&store).await;
        assert_eq!(listed["Gym Class"].participants.len(), 2 + 32);
    }
}
