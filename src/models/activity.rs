use serde::ser::{Serialize, SerializeMap, Serializer};

/// One extracurricular offering. `name` is the registry key and is not part
/// of the serialized record; listings emit it as the JSON object key instead.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            let email = email.into();
            if !self.is_enrolled(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Point-in-time copy of the whole registry, in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityListing {
    activities: Vec<Activity>,
}

impl ActivityListing {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_participants_drops_duplicates() {
        let activity = Activity::new("Chess Club", "d", "s", 12)
            .with_participants(["a@mergington.edu", "a@mergington.edu", "b@mergington.edu"]);
        assert_eq!(
            activity.participants,
            vec!["a@mergington.edu", "b@mergington.edu"]
        );
    }

    #[test]
    fn listing_serializes_as_object_keyed_by_name() {
        let listing = ActivityListing::new(vec![
            Activity::new("Tennis Club", "Matches", "Tuesdays", 12),
            Activity::new("Art Studio", "Painting", "Mondays", 18)
                .with_participants(["amy@mergington.edu"]),
        ]);

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Tennis Club": {
                    "description": "Matches",
                    "schedule": "Tuesdays",
                    "max_participants": 12,
                    "participants": []
                },
                "Art Studio": {
                    "description": "Painting",
                    "schedule": "Mondays",
                    "max_participants": 18,
                    "participants": ["amy@mergington.edu"]
                }
            })
        );
    }

    #[test]
    fn listing_keeps_insertion_order() {
        let listing = ActivityListing::new(vec![
            Activity::new("Zoology", "", "", 1),
            Activity::new("Astronomy", "", "", 1),
        ]);
        let text = serde_json::to_string(&listing).unwrap();
        assert!(text.find("Zoology").unwrap() < text.find("Astronomy").unwrap());
    }
}
