use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
}

impl Course {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}

/// A class offer published by a teacher for one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub teacher_id: Uuid,
    pub course_id: Uuid,
    pub published_at: DateTime<Utc>,
}

impl Offer {
    pub fn new(title: String, description: String, teacher_id: Uuid, course_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            teacher_id,
            course_id,
            published_at: Utc::now(),
        }
    }
}

/// A class request published by a student looking for a tutor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRequest {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub requester_id: Uuid,
    pub course_id: Uuid,
    pub published_at: DateTime<Utc>,
}

impl ClassRequest {
    pub fn new(title: String, description: String, requester_id: Uuid, course_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            requester_id,
            course_id,
            published_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

impl Weekday {
    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// A weekly time slot of an offer. `open_slots` counts the remaining
/// capacity and is decremented when an enrollment is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    pub offer_id: Uuid,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub open_slots: u32,
}

impl Schedule {
    pub fn new(
        offer_id: Uuid,
        weekday: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        open_slots: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            offer_id,
            weekday,
            start_time,
            end_time,
            open_slots,
        }
    }

    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_format() {
        let schedule = Schedule::new(
            Uuid::new_v4(),
            Weekday::Tuesday,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
            3,
        );
        assert_eq!(schedule.time_range(), "10:00 - 12:30");
        assert_eq!(schedule.weekday.to_string(), "Tuesday");
    }
}
