/**
 * kanban module
 * Boards, their workflow statuses and board definition files
 */

pub mod board;
pub mod config;

pub use board::{KanbanBoard, BACKLOG, DEFAULT_STATUSES};
pub use config::{BoardConfig, BoardMetadata, BoardSpec};
