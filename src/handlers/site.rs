use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::clock::Clock;
use crate::models::{PricingCard, PricingPlan};
use crate::services::chat::{BADGE_DELAY_SECS, BADGE_SCROLL_THRESHOLD};
use crate::state::AppState;

static INDEX_HTML: &str = include_str!("../web/index.html");

pub async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let year = state.clock.today().format("%Y").to_string();
    Html(
        INDEX_HTML
            .replace("{{site_name}}", &html_escape(&state.config.site_name))
            .replace("{{year}}", &year)
            .replace("{{badge_delay_ms}}", &(BADGE_DELAY_SECS * 1000).to_string())
            .replace("{{badge_scroll_threshold}}", &BADGE_SCROLL_THRESHOLD.to_string()),
    )
}

// GET /api/pricing
pub async fn get_pricing() -> Json<Vec<PricingCard>> {
    Json(PricingPlan::ALL.iter().map(|plan| plan.card()).collect())
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
