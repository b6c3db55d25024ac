//! The activities Mergington High School offers at startup

use crate::domain::activity::Activity;
use crate::domain::directory::DirectoryError;
use crate::domain::types::{ActivityName, Description, EmailAddress, MaxParticipants, Schedule};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Train and compete in interscholastic soccer matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice drills and play in the school basketball league",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore painting, drawing and sculpture",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct and produce school plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and prepare for math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

/// Build the startup activity list in display order
pub fn mergington_high_school() -> Result<Vec<Activity>, DirectoryError> {
    SEED.iter().map(SeedActivity::build).collect()
}

impl SeedActivity {
    fn build(&self) -> Result<Activity, DirectoryError> {
        let invalid = |field: &str, reason: String| DirectoryError::InvalidDefinition {
            activity: self.name.to_string(),
            reason: format!("{field}: {reason}"),
        };

        let name = ActivityName::try_new(self.name.to_string())
            .map_err(|e| invalid("name", e.to_string()))?;
        let description = Description::try_new(self.description.to_string())
            .map_err(|e| invalid("description", e.to_string()))?;
        let schedule = Schedule::try_new(self.schedule.to_string())
            .map_err(|e| invalid("schedule", e.to_string()))?;
        let max_participants = MaxParticipants::try_new(self.max_participants)
            .map_err(|e| invalid("max_participants", e.to_string()))?;
        let participants = self
            .participants
            .iter()
            .map(|email| {
                EmailAddress::try_new((*email).to_string())
                    .map_err(|e| invalid("participants", e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Activity::new(name, description, schedule, max_participants)
            .with_participants(participants)
            .map_err(|e| invalid("participants", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_builds_nine_activities() {
        let activities = mergington_high_school().unwrap();
        assert_eq!(activities.len(), 9);
        assert_eq!(activities[0].name().as_ref(), "Chess Club");
    }

    #[test]
    fn test_seed_names_are_unique() {
        let activities = mergington_high_school().unwrap();
        let mut names: Vec<&str> = activities.iter().map(|a| a.name().as_ref()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_seeded_rosters_are_within_capacity() {
        for activity in mergington_high_school().unwrap() {
            assert!(
                !activity.participants().is_empty() && activity.spots_left() > 0,
                "{} should start with free spots",
                activity.name()
            );
        }
    }

    #[test]
    fn test_chess_club_roster() {
        let activities = mergington_high_school().unwrap();
        let chess = &activities[0];
        let roster: Vec<&str> = chess
            .participants()
            .iter()
            .map(|email| email.as_ref())
            .collect();
        assert_eq!(roster, vec!["michael@mergington.edu", "daniel@mergington.edu"]);
    }
}
