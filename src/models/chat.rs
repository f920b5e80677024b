use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub is_from_user: bool,
    pub timestamp: NaiveDateTime,
}

impl ChatMessage {
    /// Time label shown under the bubble, e.g. `14:05`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BotResponseCategory {
    Greeting,
    Pricing,
    Booking,
    Contact,
    Hours,
    Safety,
    Areas,
    Default,
}

pub const GREETINGS: [&str; 3] = [
    "Hello! How can I help you book a professional driver today?",
    "Hi there! I'm here to assist you with your driver booking needs.",
    "Welcome! What can I help you with regarding our driver services?",
];

impl BotResponseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotResponseCategory::Greeting => "greeting",
            BotResponseCategory::Pricing => "pricing",
            BotResponseCategory::Booking => "booking",
            BotResponseCategory::Contact => "contact",
            BotResponseCategory::Hours => "hours",
            BotResponseCategory::Safety => "safety",
            BotResponseCategory::Areas => "areas",
            BotResponseCategory::Default => "default",
        }
    }

    /// Fixed reply for every category except `Greeting`, which has
    /// several variants (see [`GREETINGS`]).
    pub fn fixed_reply(&self) -> Option<&'static str> {
        match self {
            BotResponseCategory::Greeting => None,
            BotResponseCategory::Pricing => Some(
                "Our pricing starts at $25/hour with a 2-hour minimum. We also offer full-day bookings at $180/day and corporate packages starting at $500/week. Would you like to see our detailed pricing?",
            ),
            BotResponseCategory::Booking => Some(
                "I'd be happy to help you book a driver! You can use our booking form below, or I can guide you through the process. What type of service do you need?",
            ),
            BotResponseCategory::Contact => Some(
                "You can reach us at (555) 123-4567 or email us at info@runyourbrain.com. We're available 24/7 to assist you!",
            ),
            BotResponseCategory::Hours => Some(
                "We're available 24/7! You can book a driver anytime, whether it's for immediate service or scheduled in advance.",
            ),
            BotResponseCategory::Safety => Some(
                "All our drivers undergo thorough background checks, safety training, and are fully licensed and insured. Your safety is our top priority!",
            ),
            BotResponseCategory::Areas => Some(
                "We currently serve major metropolitan areas. Please provide your location in the booking form, and we'll confirm availability in your area.",
            ),
            BotResponseCategory::Default => Some(
                "I understand you're interested in our driver services. Could you please be more specific about what you'd like to know? I can help with pricing, booking, safety information, or any other questions!",
            ),
        }
    }
}

/// Buttons under the chat input that skip keyword matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuickAction {
    Pricing,
    Booking,
    Contact,
}

impl QuickAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pricing" => Some(QuickAction::Pricing),
            "booking" => Some(QuickAction::Booking),
            "contact" => Some(QuickAction::Contact),
            _ => None,
        }
    }

    pub fn category(&self) -> BotResponseCategory {
        match self {
            QuickAction::Pricing => BotResponseCategory::Pricing,
            QuickAction::Booking => BotResponseCategory::Booking,
            QuickAction::Contact => BotResponseCategory::Contact,
        }
    }

    /// Booking sends the visitor on to the form.
    pub fn scrolls_to_booking(&self) -> bool {
        matches!(self, QuickAction::Booking)
    }
}
