use uuid::Uuid;

use crate::models::course::Offer;
use crate::services::database::DatabaseService;
use crate::services::ServiceError;
use crate::triggers::NotificationTriggers;

/// Offer lifecycle pieces that produce notifications: deleting an offer
/// with active enrollments, and proposing an offer to a student.
#[derive(Clone)]
pub struct OfferService {
    db: DatabaseService,
    triggers: NotificationTriggers,
}

impl OfferService {
    pub fn new(db: DatabaseService, triggers: NotificationTriggers) -> Self {
        Self { db, triggers }
    }

    /// Owner-only. The deletion trigger runs before any row is removed so
    /// the affected students can still be enumerated through the schedules.
    pub fn delete_offer(
        &self,
        offer_id: &Uuid,
        acting_profile_id: &Uuid,
    ) -> Result<(), ServiceError> {
        let offer = self
            .db
            .get_offer(offer_id)?
            .ok_or(ServiceError::NotFound("Offer"))?;
        if offer.teacher_id != *acting_profile_id {
            return Err(ServiceError::Forbidden(
                "Only the offer's teacher can delete it",
            ));
        }

        self.triggers.offer_deleting(&offer);

        self.db.delete_enrollments_for_offer(offer_id)?;
        self.db.delete_schedules_for_offer(offer_id)?;
        self.db.delete_offer(offer_id)?;
        Ok(())
    }

    /// Owner-only. Sends an `offer_proposed` notification to the student.
    pub fn propose_to_student(
        &self,
        offer_id: &Uuid,
        student_id: &Uuid,
        acting_profile_id: &Uuid,
    ) -> Result<Offer, ServiceError> {
        let offer = self
            .db
            .get_offer(offer_id)?
            .ok_or(ServiceError::NotFound("Offer"))?;
        if offer.teacher_id != *acting_profile_id {
            return Err(ServiceError::Forbidden(
                "Only the offer's teacher can propose it",
            ));
        }
        self.db
            .get_profile(student_id)?
            .ok_or(ServiceError::NotFound("Profile"))?;

        self.triggers.offer_proposed(&offer, *student_id);
        Ok(offer)
    }
}
