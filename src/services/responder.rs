use rand::Rng;

use crate::models::chat::GREETINGS;
use crate::models::{BotResponseCategory, QuickAction};

// Checked in order; the first category with a matching keyword wins.
const KEYWORDS: [(BotResponseCategory, &[&str]); 7] = [
    (BotResponseCategory::Greeting, &["hello", "hi", "hey"]),
    (BotResponseCategory::Pricing, &["price", "cost", "pricing"]),
    (BotResponseCategory::Booking, &["book", "hire", "reserve"]),
    (BotResponseCategory::Contact, &["contact", "phone", "email"]),
    (BotResponseCategory::Hours, &["hour", "time", "available"]),
    (BotResponseCategory::Safety, &["safe", "security", "background"]),
    (BotResponseCategory::Areas, &["area", "location", "where"]),
];

/// Case-insensitive substring match, so "this" counts as a greeting.
pub fn categorize(message: &str) -> BotResponseCategory {
    let message = message.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| message.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(BotResponseCategory::Default)
}

pub fn reply_for<R: Rng + ?Sized>(category: BotResponseCategory, rng: &mut R) -> &'static str {
    match category.fixed_reply() {
        Some(reply) => reply,
        None => GREETINGS[rng.gen_range(0..GREETINGS.len())],
    }
}

pub fn get_bot_response<R: Rng + ?Sized>(message: &str, rng: &mut R) -> &'static str {
    reply_for(categorize(message), rng)
}

pub fn quick_reply(action: QuickAction) -> &'static str {
    // quick actions never map to the greeting, so no randomness is involved
    action.category().fixed_reply().unwrap_or_default()
}
