use crate::models::notification::{Action, ActionStyle, Notification, RelatedEntity};
use crate::strategy::{urls, NotificationStrategy, Payload};

/// Notifies enrolled students when a teacher deletes an offer.
///
/// The offer is gone by the time the notification is read, so the payload
/// carries everything needed for the message and no related ref is stored.
pub struct OfferDeletedStrategy;

impl NotificationStrategy for OfferDeletedStrategy {
    fn get_icon(&self) -> &'static str {
        "❌"
    }

    fn get_title(&self, _payload: &Payload) -> String {
        "Class canceled by the teacher".to_string()
    }

    fn get_message(&self, payload: &Payload) -> String {
        let offer_title = payload
            .get("offer_title")
            .and_then(|v| v.as_str())
            .unwrap_or("the class");
        let teacher_name = payload
            .get("teacher_name")
            .and_then(|v| v.as_str())
            .unwrap_or("The teacher");
        let course_name = payload.get("course_name").and_then(|v| v.as_str()).unwrap_or("");

        let mut message = format!("{} has deleted the offer '{}'", teacher_name, offer_title);
        if !course_name.is_empty() {
            message.push_str(&format!(" for {}", course_name));
        }
        message.push_str(". Your enrollment has been canceled automatically.");
        message
    }

    fn get_actions(
        &self,
        _notification: &Notification,
        _related: Option<&RelatedEntity>,
    ) -> Vec<Action> {
        // The offer no longer exists; only point at the catalog.
        vec![Action::get(
            "Browse other classes",
            urls::offers_browse(),
            ActionStyle::Primary,
        )]
    }
}
