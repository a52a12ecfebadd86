use crate::models::notification::{Action, ActionStyle, Notification, RelatedEntity};
use crate::strategy::{text, urls, NotificationStrategy, Payload};

/// Congratulates the teacher when a schedule runs out of open slots.
pub struct SlotsFullStrategy;

impl NotificationStrategy for SlotsFullStrategy {
    fn get_icon(&self) -> &'static str {
        "🎉"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        String::new()
    }

    fn get_message(&self, payload: &Payload) -> String {
        format!(
            "All slots for the {} ({}) schedule of your offer '{}' are now full! 🎉",
            text(payload, "weekday"),
            text(payload, "time_range"),
            text(payload, "offer_title"),
        )
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        // The related ref normally points at the schedule, but tolerate a
        // direct offer ref as well.
        let offer_id = match related {
            Some(RelatedEntity::Schedule { offer, .. }) => offer.id,
            Some(RelatedEntity::Offer(offer)) => offer.id,
            _ => return Vec::new(),
        };

        vec![Action::get("View offer", urls::offer(offer_id), ActionStyle::Primary)]
    }
}
