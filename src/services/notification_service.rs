use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::common::{PaginatedResponse, PaginationQuery};
use crate::models::notification::{Action, Notification, RelatedRef};
use crate::services::database::DatabaseService;
use crate::strategy::registry::StrategyRegistry;
use crate::strategy::Payload;

/// A notification as rendered for a consumer: the frozen record plus the
/// icon and actions re-derived from the stored kind at call time.
#[derive(Debug, Serialize)]
pub struct NotificationView {
    pub id: Uuid,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub icon: String,
    pub read: bool,
    pub action_taken: Option<String>,
    pub action_date: Option<DateTime<Utc>>,
    pub actions: Vec<Action>,
    pub created_at: DateTime<Utc>,
}

/// Single entry point of the dispatch engine.
///
/// Triggers call `send` with a kind and a payload; the service resolves the
/// strategy, freezes title and message and persists exactly one row. It
/// never interprets payload contents itself.
#[derive(Clone)]
pub struct NotificationService {
    db: DatabaseService,
    registry: Arc<StrategyRegistry>,
}

impl NotificationService {
    pub fn new(db: DatabaseService, registry: Arc<StrategyRegistry>) -> Self {
        Self { db, registry }
    }

    /// Formats and persists one notification. Persistence failures
    /// propagate; swallowing them is the calling trigger's job.
    pub fn send(
        &self,
        receiver_id: Uuid,
        kind: &str,
        payload: &Payload,
        related: Option<RelatedRef>,
    ) -> Result<Notification> {
        let strategy = self.registry.get_strategy(kind);
        let notification = Notification::new(
            receiver_id,
            kind,
            strategy.get_title(payload),
            strategy.get_message(payload),
            related,
        );
        self.db.insert_notification(notification)
    }

    /// Icon for a stored record, re-resolved through the registry so
    /// unknown kinds degrade to the generic bell.
    pub fn icon_for(&self, notification: &Notification) -> &'static str {
        self.registry.get_strategy(&notification.kind).get_icon()
    }

    /// Follow-up actions for a stored record, computed from the current
    /// state of its related object. A dangling or absent related ref
    /// degrades to whatever the strategy offers without one.
    pub fn available_actions(&self, notification: &Notification) -> Result<Vec<Action>> {
        let related = match &notification.related {
            Some(reference) => self.db.resolve_related(reference)?,
            None => None,
        };
        let strategy = self.registry.get_strategy(&notification.kind);
        Ok(strategy.get_actions(notification, related.as_ref()))
    }

    pub fn list_for_receiver(
        &self,
        receiver_id: &Uuid,
        pagination: &PaginationQuery,
    ) -> Result<PaginatedResponse<NotificationView>> {
        let page = self.db.notifications_for_receiver(receiver_id, pagination)?;

        let mut data = Vec::with_capacity(page.data.len());
        for notification in page.data {
            data.push(self.render(notification)?);
        }

        Ok(PaginatedResponse {
            data,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        })
    }

    pub fn unread_count(&self, receiver_id: &Uuid) -> Result<u64> {
        self.db.unread_count(receiver_id)
    }

    /// Receiver-scoped: marking someone else's notification reports absent.
    pub fn mark_read(&self, notification_id: &Uuid, receiver_id: &Uuid) -> Result<Option<Notification>> {
        self.db.set_notification_read(notification_id, receiver_id, true)
    }

    pub fn mark_unread(&self, notification_id: &Uuid, receiver_id: &Uuid) -> Result<Option<Notification>> {
        self.db.set_notification_read(notification_id, receiver_id, false)
    }

    pub fn mark_all_read(&self, receiver_id: &Uuid) -> Result<usize> {
        self.db.mark_all_read(receiver_id)
    }

    fn render(&self, notification: Notification) -> Result<NotificationView> {
        let icon = self.icon_for(&notification).to_string();
        let actions = self.available_actions(&notification)?;
        Ok(NotificationView {
            id: notification.id,
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            icon,
            read: notification.read,
            action_taken: notification.action_taken,
            action_date: notification.action_date,
            actions,
            created_at: notification.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::kinds;
    use serde_json::json;

    fn service() -> NotificationService {
        NotificationService::new(
            DatabaseService::new(),
            Arc::new(StrategyRegistry::with_defaults()),
        )
    }

    #[test]
    fn test_send_persists_exactly_one_unread_row() {
        let notifications = service();
        let receiver = Uuid::new_v4();

        let sent = notifications
            .send(
                receiver,
                kinds::INSCRIPTION_ACCEPTED,
                &json!({ "course_name": "Algebra" }),
                None,
            )
            .unwrap();

        assert_eq!(sent.receiver_id, receiver);
        assert!(!sent.read);
        assert!(sent.action_taken.is_none());
        assert_eq!(sent.title, "Enrollment accepted");
        assert!(sent.message.contains("Algebra"));

        let page = notifications
            .list_for_receiver(&receiver, &PaginationQuery::default())
            .unwrap();
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_send_with_unknown_kind_uses_fallback() {
        let notifications = service();
        let receiver = Uuid::new_v4();

        let sent = notifications
            .send(receiver, "nonexistent_kind_xyz", &json!({}), None)
            .unwrap();

        assert_eq!(sent.title, "Notification");
        assert_eq!(sent.message, "You have a new notification.");
        assert_eq!(notifications.icon_for(&sent), "🔔");
        assert!(notifications.available_actions(&sent).unwrap().is_empty());
    }

    #[test]
    fn test_actions_degrade_when_related_object_is_gone() {
        let notifications = service();
        let receiver = Uuid::new_v4();

        // Related enrollment was never persisted, i.e. it dangles.
        let sent = notifications
            .send(
                receiver,
                kinds::INSCRIPTION_CREATED,
                &json!({}),
                Some(RelatedRef::enrollment(Uuid::new_v4())),
            )
            .unwrap();

        assert!(notifications.available_actions(&sent).unwrap().is_empty());
    }

    #[test]
    fn test_mark_all_read_reports_flipped_rows() {
        let notifications = service();
        let receiver = Uuid::new_v4();

        for _ in 0..5 {
            notifications.send(receiver, "k", &json!({}), None).unwrap();
        }
        for _ in 0..2 {
            let n = notifications.send(receiver, "k", &json!({}), None).unwrap();
            notifications.mark_read(&n.id, &receiver).unwrap();
        }

        let flipped = notifications.mark_all_read(&receiver).unwrap();
        assert_eq!(flipped, 5);
        assert_eq!(notifications.unread_count(&receiver).unwrap(), 0);
    }

    #[test]
    fn test_mark_read_rejects_foreign_receiver() {
        let notifications = service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let n = notifications.send(owner, "k", &json!({}), None).unwrap();
        assert!(notifications.mark_read(&n.id, &stranger).unwrap().is_none());
        assert_eq!(notifications.unread_count(&owner).unwrap(), 1);

        let marked = notifications.mark_read(&n.id, &owner).unwrap();
        assert!(marked.unwrap().read);

        let unmarked = notifications.mark_unread(&n.id, &owner).unwrap();
        assert!(!unmarked.unwrap().read);
    }
}
