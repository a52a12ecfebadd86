use serde_json::json;

use crate::models::course::Schedule;
use crate::models::notification::{kinds, RelatedRef};
use crate::triggers::NotificationTriggers;

impl NotificationTriggers {
    /// Fired after a schedule's capacity changed. Notifies the teacher once
    /// the last open slot is taken; the accepted-enrollment check keeps a
    /// schedule created with zero slots from celebrating an empty class.
    pub fn schedule_slots_changed(&self, schedule: &Schedule) {
        if schedule.open_slots > 0 {
            return;
        }
        match self.db.has_accepted_enrollment(&schedule.id) {
            Ok(true) => {}
            Ok(false) => return,
            Err(err) => {
                log::warn!("slot check failed for schedule {}: {:#}", schedule.id, err);
                return;
            }
        }
        let Some(offer) = self.db.get_offer(&schedule.offer_id).ok().flatten() else {
            return;
        };

        let payload = json!({
            "weekday": schedule.weekday.to_string(),
            "time_range": schedule.time_range(),
            "offer_title": offer.title,
        });
        self.dispatch(
            offer.teacher_id,
            kinds::SLOTS_FULL,
            payload,
            Some(RelatedRef::schedule(schedule.id)),
        );
    }
}
