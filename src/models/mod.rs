pub mod comment;
pub mod common;
pub mod course;
pub mod enrollment;
pub mod notification;
pub mod profile;
pub mod rating;
