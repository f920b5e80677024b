use std::sync::Arc;

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::services::relay::SubmissionRelay;
use crate::services::submission::SubmissionGate;

pub struct AppState {
    pub config: AppConfig,
    pub relay: Box<dyn SubmissionRelay>,
    pub clock: Arc<dyn Clock>,
    pub gate: SubmissionGate,
}
