//! Property-based tests for directory invariants
//!
//! Random sequences of signups and unregisters are replayed against both the
//! directory and a plain `Vec`-based model; outcomes and rosters must agree
//! and rosters must never hold an email twice.

use mergington_activities::domain::{ActivityDirectory, CapacityPolicy, DirectoryError};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

const ACTIVITIES: &[&str] = &[
    "Chess Club",
    "Programming Class",
    "Gym Class",
    "Soccer Team",
    "Basketball Team",
    "Art Club",
    "Drama Club",
    "Math Club",
    "Debate Team",
];

#[derive(Debug, Clone)]
pub enum Op {
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    NotFound,
    AlreadyRegistered,
    NotRegistered,
}

fn outcome<T>(result: Result<T, DirectoryError>) -> Outcome {
    match result {
        Ok(_) => Outcome::Ok,
        Err(DirectoryError::ActivityNotFound { .. }) => Outcome::NotFound,
        Err(DirectoryError::AlreadyRegistered { .. }) => Outcome::AlreadyRegistered,
        Err(DirectoryError::NotRegistered { .. }) => Outcome::NotRegistered,
        Err(other) => panic!("unexpected error: {other}"),
    }
}

// Property test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;
    use proptest::string::string_regex;

    /// Mostly real activity names, occasionally an unknown one
    pub fn activity_name() -> impl Strategy<Value = String> {
        prop_oneof![
            9 => proptest::sample::select(ACTIVITIES).prop_map(str::to_string),
            1 => Just("Nonexistent Club".to_string()),
        ]
    }

    /// Small pool of emails so operations collide often, including seeded ones
    pub fn email() -> impl Strategy<Value = String> {
        prop_oneof![
            string_regex("[a-d]@mergington\\.edu").unwrap(),
            Just("michael@mergington.edu".to_string()),
            Just("emma@mergington.edu".to_string()),
        ]
    }

    pub fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (activity_name(), email()).prop_map(|(activity, email)| Op::Signup { activity, email }),
            (activity_name(), email())
                .prop_map(|(activity, email)| Op::Unregister { activity, email }),
        ]
    }

    pub fn ops() -> impl Strategy<Value = Vec<Op>> {
        vec(op(), 1..60)
    }
}

fn seeded() -> ActivityDirectory {
    ActivityDirectory::seeded(CapacityPolicy::Unenforced).unwrap()
}

fn rosters(directory: &ActivityDirectory) -> HashMap<String, Vec<String>> {
    directory
        .list()
        .activities()
        .iter()
        .map(|activity| {
            (
                activity.name().as_ref().to_string(),
                activity
                    .participants()
                    .iter()
                    .map(|email| email.as_ref().to_string())
                    .collect(),
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn directory_matches_model(ops in generators::ops()) {
        let directory = seeded();
        let mut model = rosters(&directory);

        for op in ops {
            match op {
                Op::Signup { activity, email } => {
                    let expected = match model.get_mut(&activity) {
                        None => Outcome::NotFound,
                        Some(roster) if roster.contains(&email) => Outcome::AlreadyRegistered,
                        Some(roster) => {
                            roster.push(email.clone());
                            Outcome::Ok
                        }
                    };
                    prop_assert_eq!(outcome(directory.signup(&activity, &email)), expected);
                }
                Op::Unregister { activity, email } => {
                    let expected = match model.get_mut(&activity) {
                        None => Outcome::NotFound,
                        Some(roster) => match roster.iter().position(|e| *e == email) {
                            Some(index) => {
                                roster.remove(index);
                                Outcome::Ok
                            }
                            None => Outcome::NotRegistered,
                        },
                    };
                    prop_assert_eq!(outcome(directory.unregister(&activity, &email)), expected);
                }
            }
        }

        prop_assert_eq!(rosters(&directory), model);
    }

    #[test]
    fn rosters_never_hold_duplicates(ops in generators::ops()) {
        let directory = seeded();
        for op in ops {
            let _ = match op {
                Op::Signup { activity, email } => directory.signup(&activity, &email),
                Op::Unregister { activity, email } => directory.unregister(&activity, &email),
            };
        }

        for (activity, roster) in rosters(&directory) {
            let unique: HashSet<&String> = roster.iter().collect();
            prop_assert_eq!(unique.len(), roster.len(), "duplicate in {}", activity);
        }
    }

    #[test]
    fn signup_then_unregister_restores_roster(
        activity in proptest::sample::select(ACTIVITIES),
        email in "[a-z]{1,12}@mergington\\.edu",
    ) {
        let directory = seeded();
        let before = rosters(&directory);
        prop_assume!(!before[activity].contains(&email));

        prop_assert!(directory.signup(activity, &email).is_ok());
        prop_assert!(rosters(&directory)[activity].contains(&email));
        prop_assert!(directory.unregister(activity, &email).is_ok());
        prop_assert_eq!(rosters(&directory), before);
    }

    #[test]
    fn second_signup_is_rejected(
        activity in proptest::sample::select(ACTIVITIES),
        email in "[a-z]{1,12}@mergington\\.edu",
    ) {
        let directory = seeded();
        prop_assume!(!rosters(&directory)[activity].contains(&email));

        prop_assert_eq!(outcome(directory.signup(activity, &email)), Outcome::Ok);
        prop_assert_eq!(
            outcome(directory.signup(activity, &email)),
            Outcome::AlreadyRegistered
        );
    }

    #[test]
    fn unknown_activity_is_not_found_for_any_email(
        activity in "[A-Za-z ]{1,30}",
        email in ".{0,40}",
    ) {
        prop_assume!(!ACTIVITIES.contains(&activity.as_str()));
        let directory = seeded();

        prop_assert_eq!(outcome(directory.signup(&activity, &email)), Outcome::NotFound);
        prop_assert_eq!(outcome(directory.unregister(&activity, &email)), Outcome::NotFound);
    }

    #[test]
    fn one_email_can_join_many_activities(
        picks in proptest::sample::subsequence(ACTIVITIES, 1..=ACTIVITIES.len()),
    ) {
        let directory = seeded();
        let email = "everywhere@mergington.edu";
        for activity in &picks {
            prop_assert!(directory.signup(activity, email).is_ok());
        }

        let rosters = rosters(&directory);
        for activity in ACTIVITIES {
            let joined = rosters[*activity].iter().any(|e| e == email);
            prop_assert_eq!(joined, picks.contains(activity));
        }
    }
}
