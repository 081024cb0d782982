//! Chat room and message models.

use serde::{Deserialize, Serialize};

use talent_core::types::{JobId, MessageId, RoomId, Timestamp, UserId};

/// A conversation between one applicant and one recruiter about one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRoom {
    /// The application this room belongs to; also the room id.
    pub application_id: RoomId,
    pub job_id: JobId,
    pub job_title: String,
    pub applicant_id: UserId,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub applicant_username: Option<String>,
    pub recruiter_id: UserId,
    #[serde(default)]
    pub recruiter_name: Option<String>,
    #[serde(default)]
    pub recruiter_username: Option<String>,
}

/// One message in a room. Append-only; ordered by arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub application_id: RoomId,
    pub sender_id: UserId,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub sender_username: Option<String>,
    pub content: String,
    pub created_at: Timestamp,
}

/// Body of `POST /chat/{id}/messages` and of outgoing socket frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageCreate {
    pub content: String,
}
