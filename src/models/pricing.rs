use serde::{Deserialize, Serialize};

use super::booking::DurationOption;

pub const CORPORATE_CONTACT_MESSAGE: &str = "Thank you for your interest in our Corporate Package! Please call us at (555) 123-4567 or email corporate@runyourbrain.com for custom pricing and dedicated account management.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PricingPlan {
    Hourly,
    FullDay,
    Corporate,
}

/// What clicking a pricing card's button does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanAction {
    /// Pre-fill the duration select and scroll to the booking form.
    Prefill { duration: DurationOption },
    /// Point the visitor at sales instead of the form.
    ContactSales { message: &'static str },
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingCard {
    pub plan: PricingPlan,
    pub title: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub action: PlanAction,
}

impl PricingPlan {
    pub const ALL: [PricingPlan; 3] = [
        PricingPlan::Hourly,
        PricingPlan::FullDay,
        PricingPlan::Corporate,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PricingPlan::Hourly => "Hourly Booking",
            PricingPlan::FullDay => "Full Day Booking",
            PricingPlan::Corporate => "Corporate Package",
        }
    }

    pub fn action(&self) -> PlanAction {
        match self {
            PricingPlan::Hourly => PlanAction::Prefill {
                duration: DurationOption::TwoHours,
            },
            PricingPlan::FullDay => PlanAction::Prefill {
                duration: DurationOption::EightHours,
            },
            PricingPlan::Corporate => PlanAction::ContactSales {
                message: CORPORATE_CONTACT_MESSAGE,
            },
        }
    }

    pub fn price(&self) -> &'static str {
        match self {
            PricingPlan::Hourly => "$25/hour",
            PricingPlan::FullDay => "$180/day",
            PricingPlan::Corporate => "From $500/week",
        }
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            PricingPlan::Hourly => &["2-hour minimum", "Professional, vetted drivers", "Your own vehicle"],
            PricingPlan::FullDay => &["Up to 8 hours", "Multiple stops included", "Priority scheduling"],
            PricingPlan::Corporate => &["Dedicated drivers", "Account management", "Monthly invoicing"],
        }
    }

    pub fn card(&self) -> PricingCard {
        PricingCard {
            plan: *self,
            title: self.title(),
            price: self.price(),
            features: self.features(),
            action: self.action(),
        }
    }
}
