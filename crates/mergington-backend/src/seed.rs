//! The activities every fresh directory starts with.

use mergington::data::Activity;
use mergington::id::ActivityId;

/// Returns the seeded activities in a stable order.
pub fn activities() -> Vec<(ActivityId, Activity)> {
    vec![
        (
            "Chess Club".into(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".into(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".into(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team".into(),
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Basketball Team".into(),
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club".into(),
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Drama Club".into(),
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        (
            "Math Club".into(),
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Debate Team".into(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ]
}
