//! Date and time handlers.

use async_trait::async_trait;
use jj_core::{Clock, CommandHandler, Flow, Result, Session};
use std::sync::Arc;

const DATE_FORMAT: &str = "%B %d %Y";
const TIME_FORMAT: &str = "%I:%M";

/// Emits "The current date is June 05 2024".
pub struct DateHandler {
    clock: Arc<dyn Clock>,
}

impl DateHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl CommandHandler for DateHandler {
    async fn handle(&self, session: &mut Session, _subject: Option<&str>) -> Result<Flow> {
        let now = self.clock.now();
        let response = format!("The current date is {}", now.format(DATE_FORMAT));
        session.emit(&response).await;
        Ok(Flow::Continue)
    }
}

/// Emits "The current time is 03:07." (12-hour clock).
pub struct TimeHandler {
    clock: Arc<dyn Clock>,
}

impl TimeHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl CommandHandler for TimeHandler {
    async fn handle(&self, session: &mut Session, _subject: Option<&str>) -> Result<Flow> {
        let now = self.clock.now();
        let response = format!("The current time is {}.", now.format(TIME_FORMAT));
        session.emit(&response).await;
        Ok(Flow::Continue)
    }
}
