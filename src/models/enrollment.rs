use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EnrollmentStatus {
    Pending,
    Accepted,
    Rejected,
    Canceled,
    Completed,
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EnrollmentStatus::Pending => "pending",
            EnrollmentStatus::Accepted => "accepted",
            EnrollmentStatus::Rejected => "rejected",
            EnrollmentStatus::Canceled => "canceled",
            EnrollmentStatus::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

/// A student's booking of one schedule slot.
///
/// Lifecycle: Pending -> {Accepted, Rejected}, {Pending, Accepted} -> Canceled,
/// Accepted -> Completed. Rejected, Canceled and Completed are terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub schedule_id: Uuid,
    pub status: EnrollmentStatus,
    pub reserved_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEnrollmentRequest {
    pub student_id: Uuid,
    pub schedule_id: Uuid,
}

impl Enrollment {
    pub fn new(student_id: Uuid, schedule_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id,
            schedule_id,
            status: EnrollmentStatus::Pending,
            reserved_at: Utc::now(),
        }
    }

    pub fn accept(&mut self) -> Result<(), String> {
        if self.status != EnrollmentStatus::Pending {
            return Err("Only pending enrollments can be accepted".to_string());
        }
        self.status = EnrollmentStatus::Accepted;
        Ok(())
    }

    pub fn reject(&mut self) -> Result<(), String> {
        if self.status != EnrollmentStatus::Pending {
            return Err("Only pending enrollments can be rejected".to_string());
        }
        self.status = EnrollmentStatus::Rejected;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), String> {
        if !matches!(
            self.status,
            EnrollmentStatus::Pending | EnrollmentStatus::Accepted
        ) {
            return Err("Only pending or accepted enrollments can be canceled".to_string());
        }
        self.status = EnrollmentStatus::Canceled;
        Ok(())
    }

    pub fn complete(&mut self) -> Result<(), String> {
        if self.status != EnrollmentStatus::Accepted {
            return Err("Only accepted enrollments can be completed".to_string());
        }
        self.status = EnrollmentStatus::Completed;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            EnrollmentStatus::Pending | EnrollmentStatus::Accepted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_can_be_accepted_or_rejected() {
        let mut enrollment = Enrollment::new(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(enrollment.status, EnrollmentStatus::Pending);
        assert!(enrollment.accept().is_ok());
        assert_eq!(enrollment.status, EnrollmentStatus::Accepted);

        let mut other = Enrollment::new(Uuid::new_v4(), Uuid::new_v4());
        assert!(other.reject().is_ok());
        assert_eq!(other.status, EnrollmentStatus::Rejected);
    }

    #[test]
    fn test_terminal_states_refuse_transitions() {
        let mut enrollment = Enrollment::new(Uuid::new_v4(), Uuid::new_v4());
        enrollment.reject().unwrap();

        assert!(enrollment.accept().is_err());
        assert!(enrollment.cancel().is_err());
        assert!(enrollment.complete().is_err());
        assert_eq!(enrollment.status, EnrollmentStatus::Rejected);
    }

    #[test]
    fn test_cancel_from_pending_and_accepted() {
        let mut pending = Enrollment::new(Uuid::new_v4(), Uuid::new_v4());
        assert!(pending.cancel().is_ok());

        let mut accepted = Enrollment::new(Uuid::new_v4(), Uuid::new_v4());
        accepted.accept().unwrap();
        assert!(accepted.cancel().is_ok());
        assert_eq!(accepted.status, EnrollmentStatus::Canceled);
    }

    #[test]
    fn test_complete_requires_accepted() {
        let mut enrollment = Enrollment::new(Uuid::new_v4(), Uuid::new_v4());
        assert!(enrollment.complete().is_err());

        enrollment.accept().unwrap();
        assert!(enrollment.complete().is_ok());
        assert_eq!(enrollment.status, EnrollmentStatus::Completed);
        assert!(!enrollment.is_active());
    }
}
