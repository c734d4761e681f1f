use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Activity;

pub type ActivityMap = BTreeMap<String, Activity>;

/// Process-wide activity catalog, keyed by activity name.
///
/// Cloning is cheap and every clone shares the same map, so it can be handed
/// to axum as router state. Checks that must agree with the following mutation
/// (exists / already-member) are done while holding a single write guard.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivityStore {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Store pre-filled with the school's fixed catalog.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, ActivityMap> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, ActivityMap> {
        self.inner.write().await
    }
}

pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    store.read().await.clone()
}

pub fn seed_activities() -> ActivityMap {
    let rows = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ];

    rows.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}
