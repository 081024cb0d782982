//! Newtype wrappers around [`uuid::Uuid`] for all API resource identifiers.
//!
//! Using distinct types prevents accidentally passing a `JobId` where an
//! `ApplicationId` is expected. The backend emits hyphenated UUID strings,
//! which is exactly what `Uuid` serializes to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }

            /// First eight characters, for compact table output.
            pub fn short(&self) -> String {
                self.0.to_string()[..8].to_string()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user account.
    UserId
);

define_id!(
    /// Unique identifier for a job posting.
    JobId
);

define_id!(
    /// Unique identifier for a job application. Also identifies its chat room.
    ApplicationId
);

define_id!(
    /// Unique identifier for an uploaded resume.
    ResumeId
);

define_id!(
    /// Unique identifier for a resume parse result.
    ParseResultId
);

define_id!(
    /// Unique identifier for a generated resume feedback record.
    FeedbackId
);

define_id!(
    /// Unique identifier for a cover letter.
    CoverLetterId
);

define_id!(
    /// Unique identifier for a chat message.
    MessageId
);

define_id!(
    /// Unique identifier for an audit log entry.
    AuditLogId
);

/// A chat room is keyed by the application it belongs to.
pub type RoomId = ApplicationId;
