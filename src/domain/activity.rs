//! A single extracurricular activity and its roster rules

use crate::domain::types::{ActivityName, Description, EmailAddress, MaxParticipants, Schedule};
use serde::Serialize;
use thiserror::Error;

/// Whether `max_participants` caps signups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Capacity is informational only
    #[default]
    Unenforced,
    /// Signups are rejected once the roster reaches capacity
    Enforced,
}

impl From<bool> for CapacityPolicy {
    fn from(enforce: bool) -> Self {
        if enforce {
            Self::Enforced
        } else {
            Self::Unenforced
        }
    }
}

/// Why a roster mutation was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("participant is already on the roster")]
    AlreadyRegistered,

    #[error("participant is not on the roster")]
    NotRegistered,

    #[error("roster is full ({capacity} participants)")]
    Full { capacity: MaxParticipants },
}

/// An activity record
///
/// Serializes to the wire shape `{description, schedule, max_participants,
/// participants}`; the name is the key of the enclosing map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    name: ActivityName,
    description: Description,
    schedule: Schedule,
    max_participants: MaxParticipants,
    participants: Vec<EmailAddress>,
}

impl Activity {
    pub fn new(
        name: ActivityName,
        description: Description,
        schedule: Schedule,
        max_participants: MaxParticipants,
    ) -> Self {
        Self {
            name,
            description,
            schedule,
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seed the roster, rejecting duplicates
    ///
    /// Capacity is not checked here: a seeded roster may already exceed it.
    pub fn with_participants(
        mut self,
        participants: impl IntoIterator<Item = EmailAddress>,
    ) -> Result<Self, RosterError> {
        for email in participants {
            self.add_participant(email, CapacityPolicy::Unenforced)?;
        }
        Ok(self)
    }

    pub fn name(&self) -> &ActivityName {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn max_participants(&self) -> MaxParticipants {
        self.max_participants
    }

    /// Participants in signup order
    pub fn participants(&self) -> &[EmailAddress] {
        &self.participants
    }

    pub fn is_registered(&self, email: &EmailAddress) -> bool {
        self.participants.contains(email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.capacity()
    }

    /// Remaining places, zero once the roster is at or over capacity
    pub fn spots_left(&self) -> usize {
        self.capacity().saturating_sub(self.participants.len())
    }

    fn capacity(&self) -> usize {
        usize::try_from(*self.max_participants.as_ref()).unwrap_or(usize::MAX)
    }

    /// Append `email` to the end of the roster
    pub fn add_participant(
        &mut self,
        email: EmailAddress,
        policy: CapacityPolicy,
    ) -> Result<(), RosterError> {
        if self.is_registered(&email) {
            return Err(RosterError::AlreadyRegistered);
        }
        if policy == CapacityPolicy::Enforced && self.is_full() {
            return Err(RosterError::Full {
                capacity: self.max_participants,
            });
        }
        self.participants.push(email);
        Ok(())
    }

    /// Remove `email`, keeping the order of the remaining participants
    pub fn remove_participant(&mut self, email: &EmailAddress) -> Result<(), RosterError> {
        let position = self
            .participants
            .iter()
            .position(|participant| participant == email)
            .ok_or(RosterError::NotRegistered)?;
        self.participants.remove(position);
        Ok(())
    }
}
