//! Table module: the single shared game state behind an async actor.
//!
//! The call history and active flag are shared by every player at the
//! table, so all mutation of them flows through one [`TableActor`]
//! processing messages in received order from a tokio mpsc inbox. Two
//! simultaneous call requests can never read the same uncalled-set
//! snapshot. Status requests answer from a consistent snapshot taken
//! inside the actor.

pub mod actor;
pub mod config;
pub mod messages;

pub use actor::{TableActor, TableHandle};
pub use config::TableConfig;
pub use messages::{CallOutcome, TableMessage, TableStatus};
