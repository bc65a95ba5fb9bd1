//! Tutoring Bookings

use tracing::info;

use super::{require_fields, MockBackend};
use crate::domain::*;
use crate::repository::Repository;

impl MockBackend {
    pub async fn request_booking(&self, new_booking: &NewBooking) -> DomainResult<Booking> {
        self.write_delay().await;
        require_fields(&[
            ("Tutor", &new_booking.tutor_id),
            ("Subject", &new_booking.subject),
            ("Time slot", &new_booking.slot),
        ])?;
        let date = new_booking
            .date
            .ok_or_else(|| DomainError::InvalidInput("Date required".to_string()))?;
        if date < self.today() {
            return Err(DomainError::InvalidInput("Bookings cannot be made in the past".to_string()));
        }
        if !BOOKING_SLOTS.contains(&new_booking.slot.as_str()) {
            return Err(DomainError::InvalidInput(format!("'{}' is not an available slot", new_booking.slot)));
        }
        let tutor = self.require_user(&new_booking.tutor_id).await?;
        if tutor.role != Role::Tutor {
            return Err(DomainError::InvalidInput(format!("{} is not a tutor", tutor.name)));
        }

        let taken = self
            .stores()
            .bookings
            .list_where(&|b: &Booking| {
                b.tutor_id == tutor.id
                    && b.date == date
                    && b.slot == new_booking.slot
                    && b.status != BookingStatus::Declined
            })
            .await?;
        if !taken.is_empty() {
            return Err(DomainError::Conflict(format!(
                "{} is already booked at {} on {}",
                tutor.name, new_booking.slot, date
            )));
        }

        let booking = Booking {
            id: String::new(),
            student_id: new_booking.student_id.clone(),
            tutor_id: tutor.id.clone(),
            subject: new_booking.subject.trim().to_string(),
            date,
            slot: new_booking.slot.clone(),
            notes: new_booking.notes.trim().to_string(),
            status: BookingStatus::Requested,
        };
        let created = self.stores().bookings.create(&booking).await?;
        self.notify(
            &tutor.id,
            NotificationKind::Info,
            "Booking request",
            &format!("{} session requested for {} at {}.", created.subject, date, created.slot),
        )
        .await?;
        info!(booking_id = %created.id, tutor_id = %tutor.id, "booking requested");
        Ok(created)
    }

    pub async fn bookings_for_student(&self, student_id: &str) -> DomainResult<Vec<Booking>> {
        self.read_delay().await;
        let mut list = self.stores().bookings.list_where(&|b: &Booking| b.student_id == student_id).await?;
        list.sort_by_key(|b| b.date);
        Ok(list)
    }

    pub async fn bookings_for_tutor(&self, tutor_id: &str) -> DomainResult<Vec<Booking>> {
        self.read_delay().await;
        let mut list = self.stores().bookings.list_where(&|b: &Booking| b.tutor_id == tutor_id).await?;
        list.sort_by_key(|b| b.date);
        Ok(list)
    }

    /// Confirm or decline a requested booking
    pub async fn respond_to_booking(&self, id: &str, accept: bool) -> DomainResult<Booking> {
        self.write_delay().await;
        let booking = self.stores().bookings.modify(id, |b| {
            if b.status != BookingStatus::Requested {
                return Err(DomainError::Conflict(format!("booking is already {}", b.status.label().to_lowercase())));
            }
            b.status = if accept { BookingStatus::Confirmed } else { BookingStatus::Declined };
            Ok(())
        })?;
        self.notify(
            &booking.student_id,
            NotificationKind::Info,
            if accept { "Booking confirmed" } else { "Booking declined" },
            &format!("{} on {} at {}.", booking.subject, booking.date, booking.slot),
        )
        .await?;
        Ok(booking)
    }
}
