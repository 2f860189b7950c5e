use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::database::seed;
use crate::error::ActivityError;
use crate::models::{Activity, ActivityListing};

/// Process-lifetime roster of activities keyed by exact name.
///
/// Every operation takes the single lock once, so a check and the mutation
/// that follows it are never interleaved with another request.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: Mutex<Vec<Activity>>,
}

impl ActivityRegistry {
    /// Builds a registry; a repeated name keeps its first record.
    pub fn new(activities: Vec<Activity>) -> Self {
        let mut unique: Vec<Activity> = Vec::with_capacity(activities.len());
        for activity in activities {
            if unique.iter().any(|a| a.name == activity.name) {
                tracing::warn!(activity = %activity.name, "duplicate activity name ignored");
                continue;
            }
            unique.push(activity);
        }
        Self {
            activities: Mutex::new(unique),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    // Mutation is always the last step, so state behind a poisoned lock is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<Activity>> {
        self.activities.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_all(&self) -> ActivityListing {
        ActivityListing::new(self.lock().clone())
    }

    pub fn get(&self, name: &str) -> Result<Activity, ActivityError> {
        self.lock()
            .iter()
            .find(|a| a.name == name)
            .cloned()
            .ok_or_else(|| not_found(name))
    }

    pub fn add_participant(&self, name: &str, email: &str) -> Result<(), ActivityError> {
        let mut activities = self.lock();
        let activity = activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| not_found(name))?;

        if activity.is_enrolled(email) {
            return Err(ActivityError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn remove_participant(&self, name: &str, email: &str) -> Result<(), ActivityError> {
        let mut activities = self.lock();
        let activity = activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| not_found(name))?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(ActivityError::NotSignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(pos);
        Ok(())
    }
}

fn not_found(name: &str) -> ActivityError {
    ActivityError::NotFound {
        activity: name.to_string(),
    }
}
