use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::comment::Comment;
use crate::models::course::{Offer, Schedule};
use crate::models::enrollment::Enrollment;
use crate::models::rating::Rating;

/// Notification kind tokens.
///
/// Kinds are free-form strings so adding one only requires registering a new
/// strategy, never a schema change. Persisted rows may carry kinds that no
/// longer resolve; the registry falls back to a generic strategy for those.
pub mod kinds {
    pub const INSCRIPTION_CREATED: &str = "inscription_created";
    pub const INSCRIPTION_ACCEPTED: &str = "inscription_accepted";
    pub const INSCRIPTION_REJECTED: &str = "inscription_rejected";
    pub const INSCRIPTION_CANCELED: &str = "inscription_canceled";
    pub const INSCRIPTION_COMPLETED: &str = "inscription_completed";
    pub const OFFER_PROPOSED: &str = "offer_proposed";
    pub const NEW_COMMENT: &str = "new_comment";
    pub const COMMENT_REPLY: &str = "comment_reply";
    pub const OFFER_ON_REQUEST: &str = "offer_on_request";
    pub const RATING_RECEIVED: &str = "rating_received";
    pub const SLOTS_FULL: &str = "slots_full";
    pub const OFFER_DELETED: &str = "offer_deleted";
    pub const REMINDER_CLASS_SOON: &str = "reminder_class_soon";
}

/// Type tag of a notification's related domain entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RelatedKind {
    Enrollment,
    Comment,
    Rating,
    Offer,
    Schedule,
}

/// Weak back-reference from a notification to the entity it concerns.
///
/// The target may be deleted independently at any time; resolution misses
/// are treated as "no related object", never as an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelatedRef {
    pub kind: RelatedKind,
    pub id: Uuid,
}

impl RelatedRef {
    pub fn enrollment(id: Uuid) -> Self {
        Self { kind: RelatedKind::Enrollment, id }
    }

    pub fn comment(id: Uuid) -> Self {
        Self { kind: RelatedKind::Comment, id }
    }

    pub fn rating(id: Uuid) -> Self {
        Self { kind: RelatedKind::Rating, id }
    }

    pub fn offer(id: Uuid) -> Self {
        Self { kind: RelatedKind::Offer, id }
    }

    pub fn schedule(id: Uuid) -> Self {
        Self { kind: RelatedKind::Schedule, id }
    }
}

/// A resolved related object, joined with the rows a strategy needs to
/// build follow-up actions from current state.
#[derive(Debug, Clone)]
pub enum RelatedEntity {
    Enrollment {
        enrollment: Enrollment,
        schedule: Schedule,
        offer: Offer,
    },
    Comment(Comment),
    Rating(Rating),
    Offer(Offer),
    Schedule {
        schedule: Schedule,
        offer: Offer,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    Primary,
    Info,
    Success,
    Danger,
}

/// A follow-up operation offered to the user from a notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    pub label: String,
    pub url: String,
    pub method: String,
    pub style: ActionStyle,
}

impl Action {
    pub fn get(label: &str, url: String, style: ActionStyle) -> Self {
        Self {
            label: label.to_string(),
            url,
            method: "GET".to_string(),
            style,
        }
    }

    pub fn post(label: &str, url: String, style: ActionStyle) -> Self {
        Self {
            label: label.to_string(),
            url,
            method: "POST".to_string(),
            style,
        }
    }

    pub fn is_navigation(&self) -> bool {
        self.method == "GET"
    }
}

/// The persisted notification record.
///
/// `title` and `message` are frozen at creation time; icon and actions are
/// re-derived from the stored `kind` whenever the record is displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub receiver_id: Uuid,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub action_taken: Option<String>,
    pub action_date: Option<DateTime<Utc>>,
    pub related: Option<RelatedRef>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        receiver_id: Uuid,
        kind: &str,
        title: String,
        message: String,
        related: Option<RelatedRef>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            receiver_id,
            kind: kind.to_string(),
            title,
            message,
            read: false,
            action_taken: None,
            action_date: None,
            related,
            created_at: Utc::now(),
        }
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }

    pub fn mark_unread(&mut self) {
        self.read = false;
    }

    /// Records the terminal action performed on the underlying subject
    /// (e.g. "Accepted ✅") and marks the row read. The first recorded
    /// action wins; later calls are ignored.
    pub fn record_action(&mut self, action: &str) {
        if self.action_taken.is_some() {
            return;
        }
        self.action_taken = Some(action.to_string());
        self.action_date = Some(Utc::now());
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_defaults() {
        let receiver = Uuid::new_v4();
        let n = Notification::new(
            receiver,
            kinds::INSCRIPTION_CREATED,
            "New enrollment".to_string(),
            "A student enrolled.".to_string(),
            Some(RelatedRef::enrollment(Uuid::new_v4())),
        );

        assert_eq!(n.receiver_id, receiver);
        assert!(!n.read);
        assert!(n.action_taken.is_none());
        assert!(n.action_date.is_none());
    }

    #[test]
    fn test_record_action_is_write_once() {
        let mut n = Notification::new(
            Uuid::new_v4(),
            kinds::INSCRIPTION_CREATED,
            String::new(),
            String::new(),
            None,
        );

        n.record_action("Accepted ✅");
        assert_eq!(n.action_taken.as_deref(), Some("Accepted ✅"));
        assert!(n.action_date.is_some());
        assert!(n.read);

        n.record_action("Rejected ❌");
        assert_eq!(n.action_taken.as_deref(), Some("Accepted ✅"));
    }

    #[test]
    fn test_mark_read_round_trip() {
        let mut n = Notification::new(Uuid::new_v4(), "x", String::new(), String::new(), None);
        n.mark_read();
        assert!(n.read);
        n.mark_unread();
        assert!(!n.read);
    }
}
