use serde_json::json;
use uuid::Uuid;

use crate::models::comment::Comment;
use crate::models::notification::{kinds, RelatedRef};
use crate::triggers::NotificationTriggers;

/// The publication a comment sits under: its owner plus the display fields
/// the payloads use.
struct Publication {
    owner_id: Uuid,
    kind: &'static str,
    title: String,
    course_id: Uuid,
}

impl NotificationTriggers {
    /// Fired after a comment was persisted. A top-level comment notifies the
    /// owner of the publication; a reply notifies the parent comment's
    /// author instead. Commenting on your own publication (or replying to
    /// yourself) stays silent.
    pub fn comment_created(&self, comment: &Comment) {
        if let Some(parent_id) = comment.parent_id {
            self.notify_parent_author(comment, &parent_id);
            return;
        }

        let Some(publication) = self.publication_of(comment) else {
            return;
        };
        if publication.owner_id == comment.author_id {
            return;
        }

        // A comment on a class request by someone who teaches that course
        // is an offer to teach it, which gets its own kind.
        if comment.request_id.is_some() && self.commenter_teaches(comment, &publication) {
            let payload = json!({
                "commenter_name": self.profile_name(&comment.author_id),
                "course_name": self.course_name(&publication.course_id),
                "request_title": publication.title,
                "body": comment.body,
            });
            self.dispatch(
                publication.owner_id,
                kinds::OFFER_ON_REQUEST,
                payload,
                Some(RelatedRef::comment(comment.id)),
            );
            return;
        }

        let payload = json!({
            "commenter_name": self.profile_name(&comment.author_id),
            "publication_kind": publication.kind,
            "publication_title": publication.title,
            "body": comment.body,
        });
        self.dispatch(
            publication.owner_id,
            kinds::NEW_COMMENT,
            payload,
            Some(RelatedRef::comment(comment.id)),
        );
    }

    fn notify_parent_author(&self, comment: &Comment, parent_id: &Uuid) {
        let Some(parent) = self.db.get_comment(parent_id).ok().flatten() else {
            return;
        };
        if parent.author_id == comment.author_id {
            return;
        }
        let Some(publication) = self.publication_of(comment) else {
            return;
        };

        let payload = json!({
            "replier_name": self.profile_name(&comment.author_id),
            "publication_kind": publication.kind,
            "publication_title": publication.title,
            "body": comment.body,
        });
        self.dispatch(
            parent.author_id,
            kinds::COMMENT_REPLY,
            payload,
            Some(RelatedRef::comment(comment.id)),
        );
    }

    fn commenter_teaches(&self, comment: &Comment, publication: &Publication) -> bool {
        self.db
            .has_offer_for_course(&comment.author_id, &publication.course_id)
            .unwrap_or(false)
    }

    fn publication_of(&self, comment: &Comment) -> Option<Publication> {
        if let Some(offer_id) = comment.offer_id {
            let offer = self.db.get_offer(&offer_id).ok().flatten()?;
            return Some(Publication {
                owner_id: offer.teacher_id,
                kind: "offer",
                title: offer.title,
                course_id: offer.course_id,
            });
        }
        if let Some(request_id) = comment.request_id {
            let request = self.db.get_class_request(&request_id).ok().flatten()?;
            return Some(Publication {
                owner_id: request.requester_id,
                kind: "request",
                title: request.title,
                course_id: request.course_id,
            });
        }
        None
    }
}
