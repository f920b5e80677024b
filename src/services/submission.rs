use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDateTime;

use crate::errors::AppError;
use crate::models::BookingFormInput;
use crate::services::relay::SubmissionRelay;
use crate::services::validation::validate_booking;

/// Who is booking which slot. Two submissions with the same key are the same
/// booking sent twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingKey {
    phone: String,
    date: String,
    time: String,
}

impl BookingKey {
    pub fn of(booking: &BookingFormInput) -> Self {
        Self {
            phone: booking
                .phone
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect(),
            date: booking.date.trim().to_string(),
            time: booking.time.trim().to_string(),
        }
    }
}

/// Keeps the same booking from reaching the relay twice at once. Different
/// bookings pass independently.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    in_flight: Mutex<HashSet<BookingKey>>,
}

/// Held while a submission is in flight; dropping it releases its key.
#[derive(Debug)]
pub struct SubmissionPermit<'a> {
    gate: &'a SubmissionGate,
    key: BookingKey,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn keys(&self) -> MutexGuard<'_, HashSet<BookingKey>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn try_acquire(&self, booking: &BookingFormInput) -> Option<SubmissionPermit<'_>> {
        let key = BookingKey::of(booking);
        if !self.keys().insert(key.clone()) {
            return None;
        }
        Some(SubmissionPermit { gate: self, key })
    }

    pub fn in_flight(&self) -> usize {
        self.keys().len()
    }
}

impl Drop for SubmissionPermit<'_> {
    fn drop(&mut self) {
        self.gate.keys().remove(&self.key);
    }
}

/// Trims and validates the booking, then hands it to the relay once.
/// Returns the relay's acknowledgement text.
pub async fn submit_booking(
    relay: &dyn SubmissionRelay,
    gate: &SubmissionGate,
    input: &BookingFormInput,
    now: NaiveDateTime,
) -> Result<String, AppError> {
    let booking = input.trimmed();

    let result = validate_booking(&booking, now);
    if !result.is_valid() {
        tracing::info!(
            focus = result.focus_target().map(|f| f.as_str()).unwrap_or(""),
            errors = result.errors().len(),
            "booking rejected by validation"
        );
        return Err(AppError::Validation(result));
    }

    let Some(_permit) = gate.try_acquire(&booking) else {
        tracing::warn!(date = %booking.date, time = %booking.time, "same booking already in flight");
        return Err(AppError::SubmissionInFlight);
    };

    let submission_id = uuid::Uuid::new_v4();
    tracing::info!(
        %submission_id,
        date = %booking.date,
        time = %booking.time,
        duration = %booking.duration,
        "forwarding booking to relay"
    );

    match relay.submit(&booking).await {
        Ok(ack) => {
            tracing::info!(%submission_id, "booking recorded");
            Ok(ack)
        }
        Err(e) => {
            tracing::error!(%submission_id, error = %format!("{e:#}"), "booking relay failed");
            Err(AppError::Transport(e.to_string()))
        }
    }
}
