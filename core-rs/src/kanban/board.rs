//! Kanban board with an ordered list of workflow statuses

use serde::Serialize;
use tracing::{debug, warn};

use crate::kanban::config::BoardConfig;

/// Status every board starts with
pub const BACKLOG: &str = "Backlog";

/// Seed statuses of a new board, in workflow order
pub const DEFAULT_STATUSES: [&str; 5] = [BACKLOG, "Todo", "In Progress", "In Review", "Done"];

/// A named board and its statuses
///
/// Duplicates are allowed; removal takes the first match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanbanBoard {
    name: String,
    statuses: Vec<String>,
}

impl KanbanBoard {
    /// Create a board seeded with [`DEFAULT_STATUSES`]
    ///
    /// # Example
    /// ```
    /// use gx_core::KanbanBoard;
    ///
    /// let board = KanbanBoard::new("Things to Do");
    /// assert!(board.has_status("Backlog"));
    /// ```
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            statuses: DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a board from a validated definition
    pub fn from_config(config: &BoardConfig) -> Self {
        match &config.spec.statuses {
            Some(statuses) => Self {
                name: config.metadata.name.clone(),
                statuses: statuses.clone(),
            },
            None => Self::new(&config.metadata.name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    pub fn has_status(&self, label: &str) -> bool {
        self.statuses.iter().any(|s| s == label)
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Append a status
    pub fn add_status(&mut self, label: impl Into<String>) {
        let label = label.into();
        debug!(board = %self.name, status = %label, "status added");
        self.statuses.push(label);
    }

    /// Remove the first occurrence of `label`
    ///
    /// Resolves to the number of statuses left. Removing a status that is not
    /// on the board leaves it unchanged and resolves to the current count.
    ///
    /// # Example
    /// ```
    /// use gx_core::KanbanBoard;
    ///
    /// # tokio_test::block_on(async {
    /// let mut board = KanbanBoard::new("Things to Do");
    /// let remaining = board.remove_status("Backlog").await;
    /// assert_eq!(remaining, 4);
    /// # });
    /// ```
    pub async fn remove_status(&mut self, label: &str) -> usize {
        match self.statuses.iter().position(|s| s == label) {
            Some(index) => {
                self.statuses.remove(index);
                debug!(board = %self.name, status = label, index, "status removed");
            }
            None => {
                warn!(board = %self.name, status = label, "status not on board");
            }
        }

        tokio::task::yield_now().await;

        self.statuses.len()
    }
}
