use chrono::NaiveDateTime;
use rand::Rng;

use crate::models::{BotResponseCategory, ChatMessage, QuickAction};
use crate::services::responder;

/// Seconds on the page before the unread badge nudges the visitor.
pub const BADGE_DELAY_SECS: u64 = 10;
/// Scrolling past this many pixels dismisses the badge for good.
pub const BADGE_SCROLL_THRESHOLD: f64 = 100.0;

/// Chat widget state for one page view. The transcript only grows.
#[derive(Debug, Clone, Default)]
pub struct ChatWidget {
    open: bool,
    badge_visible: bool,
    badge_dismissed: bool,
    transcript: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub category: BotResponseCategory,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickActionOutcome {
    pub reply: &'static str,
    pub scroll_to_booking: bool,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn badge_visible(&self) -> bool {
        self.badge_visible
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Opening also clears the unread badge.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        if self.open {
            self.badge_visible = false;
        }
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Nudge timer fired. Only shows the badge to visitors who haven't
    /// opened the chat or scrolled it away.
    pub fn badge_timer_elapsed(&mut self) {
        if !self.open && !self.badge_dismissed {
            self.badge_visible = true;
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        if !self.badge_dismissed && scroll_y > BADGE_SCROLL_THRESHOLD {
            self.badge_visible = false;
            self.badge_dismissed = true;
        }
    }

    /// Records the visitor's line and the bot's answer. Blank input is
    /// ignored.
    pub fn send<R: Rng + ?Sized>(
        &mut self,
        text: &str,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> Option<ChatReply> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.push(text, true, now);

        let category = responder::categorize(text);
        let reply = responder::reply_for(category, rng);
        self.push(reply, false, now);

        Some(ChatReply {
            category,
            text: reply,
        })
    }

    pub fn quick_action(&mut self, action: QuickAction, now: NaiveDateTime) -> QuickActionOutcome {
        let reply = responder::quick_reply(action);
        self.push(reply, false, now);

        let scroll_to_booking = action.scrolls_to_booking();
        if scroll_to_booking {
            self.open = false;
        }
        QuickActionOutcome {
            reply,
            scroll_to_booking,
        }
    }

    fn push(&mut self, text: &str, is_from_user: bool, timestamp: NaiveDateTime) {
        self.transcript.push(ChatMessage {
            text: text.to_string(),
            is_from_user,
            timestamp,
        });
    }
}
