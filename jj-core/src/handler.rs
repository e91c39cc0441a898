//! Handler trait for one command category.

use crate::error::Result;
use crate::session::Session;
use async_trait::async_trait;
use crate::types::Flow;

/// Processes one classified command. Talks to the user only through `session`.
///
/// Failures of external calls are expected to be handled inside (e.g. by emitting an apology);
/// an `Err` returned here is logged by the router and treated as [`Flow::Continue`].
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, session: &mut Session, subject: Option<&str>) -> Result<Flow>;
}
