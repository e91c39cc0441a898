//! [`Router`]: owns the session, runs the read → classify → dispatch loop.

use command_classifier::CommandClassifier;
use jj_core::{ClassifiedCommand, Flow, InputEvent, Session};
use tracing::{debug, error, info, instrument};

use crate::table::HandlerTable;

/// Message emitted when the loop ends.
pub const DEFAULT_FAREWELL: &str = "Thank you for using JJ McChatbot!";

/// Main interaction loop. One command is read, classified and fully handled before the next read.
pub struct Router {
    classifier: CommandClassifier,
    table: HandlerTable,
    session: Session,
    farewell: String,
}

impl Router {
    pub fn new(classifier: CommandClassifier, table: HandlerTable, session: Session) -> Self {
        Self {
            classifier,
            table,
            session,
            farewell: DEFAULT_FAREWELL.to_string(),
        }
    }

    pub fn with_farewell(mut self, farewell: impl Into<String>) -> Self {
        self.farewell = farewell.into();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until a handler returns [`Flow::Stop`] or the input channel closes, then emits the farewell
    /// on the current output channel. Turns with no usable input are skipped.
    #[instrument(skip(self))]
    pub async fn run(&mut self) {
        info!(mode = ?self.session.mode(), "step: router started");
        let mut turns: u64 = 0;

        loop {
            match self.session.read().await {
                InputEvent::Line(line) => {
                    turns += 1;
                    if !self.process_line(&line).await.is_continue() {
                        info!(turns, "step: session stopped by handler");
                        break;
                    }
                }
                InputEvent::Nothing => {
                    debug!("No input this turn");
                }
                InputEvent::Closed => {
                    info!(turns, "step: input closed");
                    break;
                }
            }
        }

        let farewell = self.farewell.clone();
        self.session.emit(&farewell).await;
        info!(turns, "step: router finished");
    }

    /// Classifies and dispatches one line.
    pub async fn process_line(&mut self, line: &str) -> Flow {
        let command = self.classifier.classify(line);
        self.dispatch(&command).await
    }

    /// Invokes the handler bound to the command's category. A handler error is logged and the session continues.
    pub async fn dispatch(&mut self, command: &ClassifiedCommand) -> Flow {
        let category = command.category;
        let handler = self.table.get(category).clone();
        info!(
            category = %category,
            subject_len = ?command.subject().map(str::len),
            "step: dispatching command"
        );

        let flow = match handler.handle(&mut self.session, command.subject()).await {
            Ok(flow) => flow,
            Err(e) => {
                error!(error = %e, category = %category, "Handler failed, continuing");
                Flow::Continue
            }
        };

        info!(category = %category, flow = ?flow, "step: command handled");
        flow
    }
}
