//! The activity directory store
//!
//! `ActivityDirectory` owns every activity for the lifetime of the process.
//! The key set is fixed at construction, so lookups need no locking; each
//! roster sits behind its own mutex so concurrent signups to one activity
//! cannot both pass the uniqueness check.
//!
//! ```
//! use mergington_activities::domain::{ActivityDirectory, CapacityPolicy, DirectoryError};
//!
//! # fn main() -> Result<(), DirectoryError> {
//! let directory = ActivityDirectory::seeded(CapacityPolicy::Unenforced)?;
//! let change = directory.signup("Chess Club", "newstudent@mergington.edu")?;
//! assert_eq!(change.to_string(), "Signed up newstudent@mergington.edu for Chess Club");
//!
//! let again = directory.signup("Chess Club", "newstudent@mergington.edu");
//! assert!(matches!(again, Err(DirectoryError::AlreadyRegistered { .. })));
//! # Ok(())
//! # }
//! ```

use crate::domain::activity::{Activity, CapacityPolicy, RosterError};
use crate::domain::seed;
use crate::domain::types::{ActivityName, EmailAddress, MaxParticipants};
use parking_lot::Mutex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Directory operation failures
///
/// All variants are caller errors; none is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found: {activity}")]
    ActivityNotFound { activity: String },

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered {
        activity: ActivityName,
        email: EmailAddress,
    },

    #[error("{email} is not signed up for {activity}")]
    NotRegistered {
        activity: ActivityName,
        email: EmailAddress,
    },

    #[error("{activity} is full ({capacity} participants)")]
    ActivityFull {
        activity: ActivityName,
        capacity: MaxParticipants,
    },

    #[error("Invalid email address: {reason}")]
    InvalidEmail { reason: String },

    #[error("Duplicate activity: {activity}")]
    DuplicateActivity { activity: ActivityName },

    #[error("Invalid activity definition for {activity}: {reason}")]
    InvalidDefinition { activity: String, reason: String },
}

impl DirectoryError {
    fn from_roster(error: RosterError, activity: &ActivityName, email: EmailAddress) -> Self {
        let activity = activity.clone();
        match error {
            RosterError::AlreadyRegistered => Self::AlreadyRegistered { activity, email },
            RosterError::NotRegistered => Self::NotRegistered { activity, email },
            RosterError::Full { capacity } => Self::ActivityFull { activity, capacity },
        }
    }
}

/// Confirmation of a successful roster mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterChange {
    SignedUp {
        activity: ActivityName,
        email: EmailAddress,
    },
    Unregistered {
        activity: ActivityName,
        email: EmailAddress,
    },
}

impl RosterChange {
    pub fn activity(&self) -> &ActivityName {
        match self {
            Self::SignedUp { activity, .. } | Self::Unregistered { activity, .. } => activity,
        }
    }

    pub fn email(&self) -> &EmailAddress {
        match self {
            Self::SignedUp { email, .. } | Self::Unregistered { email, .. } => email,
        }
    }
}

impl fmt::Display for RosterChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedUp { activity, email } => write!(f, "Signed up {email} for {activity}"),
            Self::Unregistered { activity, email } => {
                write!(f, "Unregistered {email} from {activity}")
            }
        }
    }
}

/// Point-in-time copy of every activity, in directory order
///
/// Serializes as a JSON object keyed by activity name. Each activity is
/// copied under its own lock, so the snapshot is consistent per activity
/// rather than across the whole directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot(Vec<Activity>);

impl DirectorySnapshot {
    pub fn activities(&self) -> &[Activity] {
        &self.0
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|activity| activity.name().as_ref() == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for DirectorySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(activity.name(), activity)?;
        }
        map.end()
    }
}

/// In-memory store of all activities and their rosters
#[derive(Debug)]
pub struct ActivityDirectory {
    entries: Vec<Mutex<Activity>>,
    index: HashMap<String, usize>,
    capacity_policy: CapacityPolicy,
}

impl ActivityDirectory {
    /// Create a directory over a fixed set of activities
    pub fn new(
        activities: Vec<Activity>,
        capacity_policy: CapacityPolicy,
    ) -> Result<Self, DirectoryError> {
        let mut index = HashMap::with_capacity(activities.len());
        for (position, activity) in activities.iter().enumerate() {
            let key = activity.name().as_ref().to_string();
            if index.insert(key, position).is_some() {
                return Err(DirectoryError::DuplicateActivity {
                    activity: activity.name().clone(),
                });
            }
        }

        Ok(Self {
            entries: activities.into_iter().map(Mutex::new).collect(),
            index,
            capacity_policy,
        })
    }

    /// Create a directory holding the school's startup activities
    pub fn seeded(capacity_policy: CapacityPolicy) -> Result<Self, DirectoryError> {
        Self::new(seed::mergington_high_school()?, capacity_policy)
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity_policy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Activity names in directory order
    pub fn names(&self) -> Vec<ActivityName> {
        self.entries
            .iter()
            .map(|entry| entry.lock().name().clone())
            .collect()
    }

    /// Read view of every activity
    pub fn list(&self) -> DirectorySnapshot {
        DirectorySnapshot(self.entries.iter().map(|entry| entry.lock().clone()).collect())
    }

    /// Read view of a single activity
    pub fn get(&self, activity: &str) -> Result<Activity, DirectoryError> {
        Ok(self.entry(activity)?.lock().clone())
    }

    /// Append `email` to the roster of `activity`
    #[instrument(skip(self))]
    pub fn signup(&self, activity: &str, email: &str) -> Result<RosterChange, DirectoryError> {
        let entry = self.entry(activity)?;
        let email = parse_email(email)?;

        let mut record = entry.lock();
        record
            .add_participant(email.clone(), self.capacity_policy)
            .map_err(|e| {
                debug!(error = %e, "Signup rejected");
                DirectoryError::from_roster(e, record.name(), email.clone())
            })?;

        info!(participants = record.participants().len(), "Participant signed up");
        Ok(RosterChange::SignedUp {
            activity: record.name().clone(),
            email,
        })
    }

    /// Remove `email` from the roster of `activity`
    #[instrument(skip(self))]
    pub fn unregister(&self, activity: &str, email: &str) -> Result<RosterChange, DirectoryError> {
        let entry = self.entry(activity)?;
        let email = parse_email(email)?;

        let mut record = entry.lock();
        record.remove_participant(&email).map_err(|e| {
            debug!(error = %e, "Unregister rejected");
            DirectoryError::from_roster(e, record.name(), email.clone())
        })?;

        info!(participants = record.participants().len(), "Participant unregistered");
        Ok(RosterChange::Unregistered {
            activity: record.name().clone(),
            email,
        })
    }

    fn entry(&self, activity: &str) -> Result<&Mutex<Activity>, DirectoryError> {
        self.index
            .get(activity)
            .and_then(|&position| self.entries.get(position))
            .ok_or_else(|| DirectoryError::ActivityNotFound {
                activity: activity.to_string(),
            })
    }
}

fn parse_email(email: &str) -> Result<EmailAddress, DirectoryError> {
    EmailAddress::try_new(email.to_string()).map_err(|e| DirectoryError::InvalidEmail {
        reason: e.to_string(),
    })
}
