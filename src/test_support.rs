//! Shared fixtures for service and trigger tests: one teacher with a
//! published offer and schedule, one student ready to enroll.

use std::sync::Arc;

use chrono::NaiveTime;
use uuid::Uuid;

use crate::models::course::{Course, Offer, Schedule, Weekday};
use crate::models::enrollment::{CreateEnrollmentRequest, Enrollment};
use crate::models::notification::Notification;
use crate::models::profile::{CreateProfileRequest, Profile};
use crate::services::community_service::CommunityService;
use crate::services::database::DatabaseService;
use crate::services::enrollment_service::EnrollmentService;
use crate::services::notification_service::NotificationService;
use crate::services::offer_service::OfferService;
use crate::strategy::registry::StrategyRegistry;
use crate::triggers::NotificationTriggers;

pub struct TestContext {
    pub db: DatabaseService,
    pub notifications: NotificationService,
    pub triggers: NotificationTriggers,
    pub enrollments: EnrollmentService,
    pub offers: OfferService,
    pub community: CommunityService,
    pub teacher: Profile,
    pub student: Profile,
    pub course: Course,
    pub offer: Offer,
    pub schedule: Schedule,
}

pub fn setup() -> TestContext {
    let db = DatabaseService::new();
    let registry = Arc::new(StrategyRegistry::with_defaults());
    let notifications = NotificationService::new(db.clone(), registry);
    let triggers = NotificationTriggers::new(db.clone(), notifications.clone());
    let enrollments = EnrollmentService::new(db.clone(), triggers.clone());
    let offers = OfferService::new(db.clone(), triggers.clone());
    let community = CommunityService::new(db.clone(), triggers.clone());

    let teacher = db
        .create_profile(CreateProfileRequest {
            username: "profe_diaz".to_string(),
            full_name: Some("Carmen Díaz".to_string()),
            email: "carmen@example.com".to_string(),
        })
        .unwrap();
    let student = db
        .create_profile(CreateProfileRequest {
            username: "ana_perez".to_string(),
            full_name: Some("Ana Pérez".to_string()),
            email: "ana@example.com".to_string(),
        })
        .unwrap();
    let course = db.create_course("Calculus I").unwrap();
    let offer = db
        .create_offer(
            "Calculus I help",
            "Weekly problem-solving sessions",
            teacher.id,
            course.id,
        )
        .unwrap();
    let schedule = db
        .insert_schedule(Schedule::new(
            offer.id,
            Weekday::Monday,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            3,
        ))
        .unwrap();

    TestContext {
        db,
        notifications,
        triggers,
        enrollments,
        offers,
        community,
        teacher,
        student,
        course,
        offer,
        schedule,
    }
}

impl TestContext {
    pub fn new_student(&self, username: &str) -> Profile {
        self.db
            .create_profile(CreateProfileRequest {
                username: username.to_string(),
                full_name: None,
                email: format!("{}@example.com", username),
            })
            .unwrap()
    }

    /// Enrolls the default student in the default schedule through the
    /// service, so the creation trigger fires.
    pub fn enroll(&self) -> Enrollment {
        self.enrollments
            .create(CreateEnrollmentRequest {
                student_id: self.student.id,
                schedule_id: self.schedule.id,
            })
            .unwrap()
    }

    pub fn notifications_for(&self, receiver_id: &Uuid) -> Vec<Notification> {
        self.db
            .notifications_for_receiver(receiver_id, &Default::default())
            .unwrap()
            .data
    }
}
