pub mod sheets;

use async_trait::async_trait;

use crate::models::BookingFormInput;

/// Where accepted bookings are recorded. The reply body is an opaque
/// acknowledgement.
#[async_trait]
pub trait SubmissionRelay: Send + Sync {
    async fn submit(&self, booking: &BookingFormInput) -> anyhow::Result<String>;
}
