use crate::models::Activity;

/// The roster every process starts with.
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Basketball Team",
            "Join the competitive basketball team for practices and tournaments",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            15,
        ),
        Activity::new(
            "Tennis Club",
            "Learn tennis skills and participate in friendly matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
            12,
        ),
        Activity::new(
            "Drama Club",
            "Perform in theatrical productions and develop acting skills",
            "Wednesdays, 3:30 PM - 5:00 PM",
            25,
        ),
        Activity::new(
            "Art Studio",
            "Explore painting, drawing, and sculpture techniques",
            "Mondays and Fridays, 3:30 PM - 4:30 PM",
            18,
        ),
        Activity::new(
            "Debate Team",
            "Compete in debate competitions and develop argumentation skills",
            "Thursdays, 3:30 PM - 5:00 PM",
            10,
        ),
        Activity::new(
            "Robotics Club",
            "Build and program robots for competitions",
            "Tuesdays and Thursdays, 4:30 PM - 6:00 PM",
            16,
        ),
    ]
}
