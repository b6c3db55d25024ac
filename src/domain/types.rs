//! Validated newtypes for the activity directory
//!
//! Values are checked once at the boundary so the directory itself only ever
//! handles well-formed names, emails and capacities.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Human-readable activity name, also the directory key
///
/// Names may contain spaces and are compared exactly, without trimming or
/// case folding. Limited to 100 characters.
#[nutype(
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ActivityName(String);

/// Student email address identifying a participant
///
/// Only length is validated; two emails are the same participant iff the
/// strings are byte-for-byte equal. 254 characters is the practical SMTP
/// path limit.
#[nutype(
    validate(not_empty, len_char_max = 254),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct EmailAddress(String);

/// Free-text activity description
#[nutype(
    validate(not_empty, len_char_max = 1000),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct Description(String);

/// Free-text meeting schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
#[nutype(
    validate(not_empty, len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display)
)]
pub struct Schedule(String);

/// Roster capacity of an activity
#[nutype(
    validate(greater_or_equal = 1),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct MaxParticipants(u32);
