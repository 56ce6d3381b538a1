//! # GX Core - people and kanban boards
//!
//! Two small in-memory models:
//!
//! - [`Person`]: a full name parsed into first / middle / last parts, plus a
//!   friendship relation that is always mutual.
//! - [`KanbanBoard`]: a named board with an ordered list of workflow statuses.
//!   Removing a status is asynchronous and resolves to the remaining count.
//!
//! Board definitions can be loaded from YAML via [`BoardConfig`].
//!
//! ## Example
//!
//! ```
//! use gx_core::{KanbanBoard, Person};
//!
//! let john = Person::new("John Lennon").unwrap();
//! let paul = Person::new("Paul McCartney").unwrap();
//! john.add_friend(&paul);
//! assert!(paul.is_friend_of(&john));
//!
//! let mut board = KanbanBoard::new("Things to Do");
//! board.add_status("Greeting");
//! assert!(board.has_status("Greeting"));
//! ```

pub mod errors;
pub mod person;
pub mod kanban;
pub mod explode;

pub use errors::{GxError, EMPTY_FULL_NAME};
pub use person::{create_person, Person, PersonName};
pub use kanban::{BoardConfig, KanbanBoard, BACKLOG, DEFAULT_STATUSES};
pub use explode::explode;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the `gx` log filter
pub const LOG_ENV: &str = "GX_LOG";
