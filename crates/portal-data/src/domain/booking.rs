//! Tutoring Session Bookings

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::impl_entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Requested,
    Confirmed,
    Declined,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Requested => "Requested",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Declined => "Declined",
        }
    }
}

/// Time slots a student can request
pub const BOOKING_SLOTS: &[&str] = &["09:00", "10:30", "13:00", "15:30", "17:00"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub student_id: String,
    pub tutor_id: String,
    pub subject: String,
    pub date: NaiveDate,
    pub slot: String,
    pub notes: String,
    #[serde(default)]
    pub status: BookingStatus,
}

impl_entity!(Booking, "booking");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub student_id: String,
    pub tutor_id: String,
    pub subject: String,
    pub date: Option<NaiveDate>,
    pub slot: String,
    pub notes: String,
}
