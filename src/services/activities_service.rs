use serde::Serialize;
use tracing::{debug, info};

use crate::database::ActivityRegistry;
use crate::error::ActivityError;
use crate::models::ActivityListing;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandMessage {
    pub message: String,
}

pub fn list_activities(registry: &ActivityRegistry) -> ActivityListing {
    registry.get_all()
}

pub fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<CommandMessage, ActivityError> {
    if let Err(e) = registry.add_participant(activity_name, email) {
        debug!(activity = %activity_name, email = %email, "signup rejected: {}", e);
        return Err(e);
    }

    info!(activity = %activity_name, email = %email, "signed up");
    Ok(CommandMessage {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<CommandMessage, ActivityError> {
    if let Err(e) = registry.remove_participant(activity_name, email) {
        debug!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
        return Err(e);
    }

    info!(activity = %activity_name, email = %email, "unregistered");
    Ok(CommandMessage {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}
