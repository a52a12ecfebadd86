use chrono::{Datelike, Duration, Utc};

use crate::models::course::Weekday;
use crate::services::database::DatabaseService;
use crate::triggers::NotificationTriggers;

/// Scans accepted enrollments and reminds both parties about classes whose
/// schedule falls on tomorrow's weekday. Run once per day by a cron or an
/// admin endpoint rather than an in-process loop.
pub async fn run_reminder_scan(db: DatabaseService, triggers: NotificationTriggers) {
    let tomorrow = Weekday::from_chrono((Utc::now() + Duration::days(1)).weekday());
    log::info!("running class reminder scan for {}", tomorrow);

    let enrollments = match db.accepted_enrollments() {
        Ok(enrollments) => enrollments,
        Err(e) => {
            log::error!("reminder scan could not read enrollments: {:#}", e);
            return;
        }
    };

    let mut reminded = 0usize;
    for enrollment in enrollments {
        let schedule = match db.get_schedule(&enrollment.schedule_id) {
            Ok(Some(schedule)) => schedule,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("reminder scan skipped enrollment {}: {:#}", enrollment.id, e);
                continue;
            }
        };
        if schedule.weekday != tomorrow {
            continue;
        }
        triggers.class_reminder(&enrollment);
        reminded += 1;
    }

    log::info!("reminder scan done, {} enrollments reminded", reminded);
}
