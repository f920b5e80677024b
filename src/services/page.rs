//! Booking page state, driven by semantic events only.
//!
//! Whatever renders the page (browser glue, a test) reports field blurs,
//! submits and chat sends through [`PageEvents`] and reads back the error
//! messages, chat transcript and outcomes from here.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;

use crate::clock::Clock;
use crate::errors::AppError;
use crate::models::{BookingField, BookingFormInput, PlanAction, PricingPlan, QuickAction, ValidationResult};
use crate::services::chat::{ChatReply, ChatWidget, QuickActionOutcome};
use crate::services::relay::SubmissionRelay;
use crate::services::submission::{submit_booking, SubmissionGate};
use crate::services::validation::validate_field;

pub const SUCCESS_TITLE: &str = "Booking Request Submitted Successfully!";
pub const SUCCESS_DETAIL: &str =
    "We'll contact you within 15 minutes to confirm your booking details.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, we couldn't submit your booking right now. Please try again or call us at (555) 123-4567.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted { acknowledgement: String },
    /// Messages are on the page; the named field should take focus.
    Invalid { focus: BookingField },
    /// A previous submit hasn't come back yet.
    Busy,
    Failed { message: &'static str },
}

impl SubmitOutcome {
    /// Title and detail for the confirmation shown above the form.
    pub fn banner(&self) -> Option<(&'static str, &'static str)> {
        match self {
            SubmitOutcome::Accepted { .. } => Some((SUCCESS_TITLE, SUCCESS_DETAIL)),
            _ => None,
        }
    }
}

#[async_trait]
pub trait PageEvents: Send {
    fn on_field_blur(&mut self, field: BookingField, form: &BookingFormInput) -> String;

    async fn on_submit(&mut self, form: &BookingFormInput) -> SubmitOutcome;

    fn on_chat_send(&mut self, text: &str) -> Option<ChatReply>;
}

pub struct BookingPage<R> {
    relay: Arc<dyn SubmissionRelay>,
    clock: Arc<dyn Clock>,
    gate: Arc<SubmissionGate>,
    rng: R,
    draft: BookingFormInput,
    errors: ValidationResult,
    chat: ChatWidget,
}

impl<R: Rng + Send> BookingPage<R> {
    pub fn new(relay: Arc<dyn SubmissionRelay>, clock: Arc<dyn Clock>, rng: R) -> Self {
        Self {
            relay,
            clock,
            gate: Arc::new(SubmissionGate::new()),
            rng,
            draft: BookingFormInput::default(),
            errors: ValidationResult::new(),
            chat: ChatWidget::new(),
        }
    }

    /// Share the in-flight guard with other pages or the HTTP endpoint.
    pub fn with_gate(mut self, gate: Arc<SubmissionGate>) -> Self {
        self.gate = gate;
        self
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Values the page pre-filled (pricing cards) since the last reset.
    pub fn draft(&self) -> &BookingFormInput {
        &self.draft
    }

    pub fn chat(&self) -> &ChatWidget {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatWidget {
        &mut self.chat
    }

    pub fn on_quick_action(&mut self, action: QuickAction) -> QuickActionOutcome {
        let now = self.clock.now();
        self.chat.quick_action(action, now)
    }

    /// Pricing card button.
    pub fn select_plan(&mut self, plan: PricingPlan) -> PlanAction {
        let action = plan.action();
        if let PlanAction::Prefill { duration } = &action {
            self.draft.duration = duration.as_str().to_string();
        }
        action
    }
}

#[async_trait]
impl<R: Rng + Send> PageEvents for BookingPage<R> {
    fn on_field_blur(&mut self, field: BookingField, form: &BookingFormInput) -> String {
        let message = validate_field(field, &form.trimmed(), self.clock.now());
        self.errors.set(field, message.clone());
        message
    }

    async fn on_submit(&mut self, form: &BookingFormInput) -> SubmitOutcome {
        self.errors.clear();
        let now = self.clock.now();

        match submit_booking(self.relay.as_ref(), &self.gate, form, now).await {
            Ok(acknowledgement) => {
                self.draft = BookingFormInput::default();
                SubmitOutcome::Accepted { acknowledgement }
            }
            Err(AppError::Validation(result)) => {
                let focus = result.focus_target().unwrap_or(BookingField::Name);
                self.errors = result;
                SubmitOutcome::Invalid { focus }
            }
            Err(AppError::SubmissionInFlight) => SubmitOutcome::Busy,
            Err(_) => SubmitOutcome::Failed {
                message: FAILURE_MESSAGE,
            },
        }
    }

    fn on_chat_send(&mut self, text: &str) -> Option<ChatReply> {
        let now = self.clock.now();
        self.chat.send(text, &mut self.rng, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::{Duration, NaiveDateTime};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::clock::FixedClock;
    use crate::models::{BotResponseCategory, DurationOption};

    #[derive(Default)]
    struct MockRelay {
        calls: Mutex<Vec<BookingFormInput>>,
        fail: bool,
    }

    #[async_trait]
    impl SubmissionRelay for MockRelay {
        async fn submit(&self, booking: &BookingFormInput) -> anyhow::Result<String> {
            self.calls.lock().unwrap().push(booking.clone());
            if self.fail {
                anyhow::bail!("relay down");
            }
            Ok("Row added".to_string())
        }
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn page(relay: Arc<MockRelay>) -> (BookingPage<StdRng>, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(dt("2025-06-16 10:00")));
        let page = BookingPage::new(relay, clock.clone(), StdRng::seed_from_u64(3));
        (page, clock)
    }

    fn valid_form() -> BookingFormInput {
        BookingFormInput {
            name: "Jane Doe".to_string(),
            phone: "123-456-7890".to_string(),
            location: "12 Main Street".to_string(),
            date: "2025-06-16".to_string(),
            time: "10:30".to_string(),
            duration: "2-hours".to_string(),
        }
    }

    #[test]
    fn test_blur_trims_and_records_message() {
        let (mut page, _) = page(Arc::new(MockRelay::default()));
        let form = BookingFormInput {
            name: "  J  ".to_string(),
            ..valid_form()
        };

        let message = page.on_field_blur(BookingField::Name, &form);
        assert_eq!(message, "Name must be at least 2 characters long");
        assert_eq!(page.errors().message(BookingField::Name), message);

        let fixed = page.on_field_blur(BookingField::Name, &valid_form());
        assert!(fixed.is_empty());
        assert!(page.errors().is_valid());
    }

    #[test]
    fn test_time_blur_follows_clock() {
        let (mut page, clock) = page(Arc::new(MockRelay::default()));
        assert!(page.on_field_blur(BookingField::Time, &valid_form()).is_empty());

        clock.advance(Duration::minutes(31));
        assert_eq!(
            page.on_field_blur(BookingField::Time, &valid_form()),
            "Please select a future time"
        );
    }

    #[tokio::test]
    async fn test_submit_valid_form_calls_relay_once() {
        let relay = Arc::new(MockRelay::default());
        let (mut page, _) = page(relay.clone());
        page.select_plan(PricingPlan::FullDay);

        let outcome = page.on_submit(&valid_form()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                acknowledgement: "Row added".to_string()
            }
        );
        assert_eq!(outcome.banner(), Some((SUCCESS_TITLE, SUCCESS_DETAIL)));
        assert!(page.errors().is_valid());
        assert!(page.draft().duration.is_empty());

        let calls = relay.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], valid_form());
    }

    #[tokio::test]
    async fn test_submit_invalid_form_focuses_first_error() {
        let relay = Arc::new(MockRelay::default());
        let (mut page, _) = page(relay.clone());
        let form = BookingFormInput {
            location: "NYC".to_string(),
            duration: String::new(),
            ..valid_form()
        };

        let outcome = page.on_submit(&form).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Invalid {
                focus: BookingField::Location
            }
        );
        assert_eq!(outcome.banner(), None);
        assert_eq!(page.errors().errors().len(), 2);
        assert!(relay.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resubmit_clears_stale_errors() {
        let (mut page, _) = page(Arc::new(MockRelay::default()));
        let bad = BookingFormInput {
            phone: "abc".to_string(),
            ..valid_form()
        };
        page.on_submit(&bad).await;
        assert!(!page.errors().is_valid());

        page.on_submit(&valid_form()).await;
        assert!(page.errors().is_valid());
    }

    #[tokio::test]
    async fn test_relay_failure_is_generic() {
        let relay = Arc::new(MockRelay {
            fail: true,
            ..Default::default()
        });
        let (mut page, _) = page(relay);

        let outcome = page.on_submit(&valid_form()).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: FAILURE_MESSAGE
            }
        );
    }

    #[tokio::test]
    async fn test_shared_gate_reports_busy() {
        let gate = Arc::new(SubmissionGate::new());
        let (page, _) = page(Arc::new(MockRelay::default()));
        let mut page = page.with_gate(gate.clone());

        let _held = gate.try_acquire(&valid_form()).unwrap();
        assert_eq!(page.on_submit(&valid_form()).await, SubmitOutcome::Busy);
    }

    #[test]
    fn test_plan_selection_prefills_duration() {
        let (mut page, _) = page(Arc::new(MockRelay::default()));

        page.select_plan(PricingPlan::Hourly);
        assert_eq!(page.draft().duration, DurationOption::TwoHours.as_str());

        let action = page.select_plan(PricingPlan::Corporate);
        assert!(matches!(action, PlanAction::ContactSales { .. }));
        assert_eq!(page.draft().duration, DurationOption::TwoHours.as_str());
    }

    #[test]
    fn test_chat_send_and_quick_action() {
        let (mut page, _) = page(Arc::new(MockRelay::default()));
        page.chat_mut().toggle();

        let reply = page.on_chat_send("Is it safe?").unwrap();
        assert_eq!(reply.category, BotResponseCategory::Safety);

        let outcome = page.on_quick_action(QuickAction::Booking);
        assert!(outcome.scroll_to_booking);
        assert!(!page.chat().is_open());
        assert_eq!(page.chat().transcript().len(), 3);
    }
}
