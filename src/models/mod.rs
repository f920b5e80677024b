pub mod booking;
pub mod chat;
pub mod pricing;
pub mod validation;

pub use booking::{BookingField, BookingFormInput, BookingSubmission, DurationOption};
pub use chat::{BotResponseCategory, ChatMessage, QuickAction};
pub use pricing::{PlanAction, PricingCard, PricingPlan};
pub use validation::ValidationResult;
