//! Unit tests for DateHandler and TimeHandler.

use std::sync::Arc;

use jj_core::{CommandHandler, Flow};

use super::common::{session, FixedClock};
use crate::{DateHandler, TimeHandler};

#[tokio::test]
async fn test_date_format() {
    let handler = DateHandler::new(Arc::new(FixedClock::at(2024, 6, 5, 15, 7)));
    let (mut s, out) = session(vec![], false);

    let flow = handler.handle(&mut s, None).await.unwrap();

    assert_eq!(flow, Flow::Continue);
    assert_eq!(out.text(), vec!["The current date is June 05 2024"]);
}

#[tokio::test]
async fn test_time_uses_twelve_hour_clock() {
    let clock = Arc::new(FixedClock::at(2024, 6, 5, 15, 7));
    let (mut s, out) = session(vec![], false);

    TimeHandler::new(clock).handle(&mut s, None).await.unwrap();
    TimeHandler::new(Arc::new(FixedClock::at(2024, 6, 5, 0, 30)))
        .handle(&mut s, Some("ignored"))
        .await
        .unwrap();

    assert_eq!(
        out.text(),
        vec!["The current time is 03:07.", "The current time is 12:30."]
    );
}
