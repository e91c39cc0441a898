//! Handler table: one handler per [`CommandCategory`], fixed at construction.

use jj_core::{CommandCategory, CommandHandler};
use std::sync::Arc;

/// Total mapping from category to handler. There is no way to build a table with a missing entry.
#[derive(Clone)]
pub struct HandlerTable {
    handlers: [Arc<dyn CommandHandler>; CommandCategory::COUNT],
}

impl HandlerTable {
    /// Builds the table by asking `make` for each category. Write `make` as an exhaustive `match`
    /// so a new category fails to compile until it has a handler.
    pub fn from_fn<F>(make: F) -> Self
    where
        F: FnMut(CommandCategory) -> Arc<dyn CommandHandler>,
    {
        Self {
            handlers: CommandCategory::ALL.map(make),
        }
    }

    /// Handler bound to `category`.
    pub fn get(&self, category: CommandCategory) -> &Arc<dyn CommandHandler> {
        &self.handlers[category.index()]
    }
}
