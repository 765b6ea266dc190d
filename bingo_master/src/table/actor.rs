//! Table actor implementation with async message handling.

use log::info;
use tokio::sync::{mpsc, oneshot};

use super::config::TableConfig;
use super::messages::{CallOutcome, TableMessage, TableStatus};
use crate::game::caller::Caller;
use crate::game::entities::ColumnLetter;

/// Table actor handle for sending messages
#[derive(Clone)]
pub struct TableHandle {
    sender: mpsc::Sender<TableMessage>,
}

impl TableHandle {
    pub fn new(sender: mpsc::Sender<TableMessage>) -> Self {
        Self { sender }
    }

    /// Send a message to the table
    pub async fn send(&self, message: TableMessage) -> Result<(), String> {
        self.sender
            .send(message)
            .await
            .map_err(|_| "Table is closed".to_string())
    }

    /// Start a new game, clearing the shared call history.
    pub async fn start_game(&self) -> Result<TableStatus, String> {
        let (response, rx) = oneshot::channel();
        self.send(TableMessage::StartGame { response }).await?;
        rx.await.map_err(|_| "Table dropped the request".to_string())
    }

    /// End the current game. History stays visible until the next start.
    pub async fn end_game(&self) -> Result<TableStatus, String> {
        let (response, rx) = oneshot::channel();
        self.send(TableMessage::EndGame { response }).await?;
        rx.await.map_err(|_| "Table dropped the request".to_string())
    }

    /// Draw the next number.
    pub async fn call_number(&self) -> Result<CallOutcome, String> {
        let (response, rx) = oneshot::channel();
        self.send(TableMessage::CallNumber { response }).await?;
        rx.await.map_err(|_| "Table dropped the request".to_string())
    }

    /// Snapshot the shared game state.
    pub async fn status(&self) -> Result<TableStatus, String> {
        let (response, rx) = oneshot::channel();
        self.send(TableMessage::GetStatus { response }).await?;
        rx.await.map_err(|_| "Table dropped the request".to_string())
    }
}

/// Table actor owning the shared caller state for a single bingo table.
pub struct TableActor {
    /// Table configuration
    config: TableConfig,

    /// The caller's draw state
    caller: Caller,

    /// Message inbox
    inbox: mpsc::Receiver<TableMessage>,
}

impl TableActor {
    /// Create a new table actor
    ///
    /// # Returns
    ///
    /// * `(TableActor, TableHandle)` - Actor and handle for sending messages
    pub fn new(config: TableConfig) -> (Self, TableHandle) {
        let (sender, inbox) = mpsc::channel(100);

        let actor = Self {
            config,
            caller: Caller::new(),
            inbox,
        };

        (actor, TableHandle::new(sender))
    }

    /// Run the table actor event loop until every handle is dropped.
    pub async fn run(mut self) {
        info!("Table '{}' starting", self.config.name);

        while let Some(message) = self.inbox.recv().await {
            self.handle_message(message);
        }

        info!("Table '{}' closed", self.config.name);
    }

    /// Handle a table message
    fn handle_message(&mut self, message: TableMessage) {
        match message {
            TableMessage::StartGame { response } => {
                self.caller.start();
                info!("Table '{}': new game started", self.config.name);
                let _ = response.send(self.status());
            }

            TableMessage::EndGame { response } => {
                self.caller.stop();
                info!(
                    "Table '{}': game ended after {} calls",
                    self.config.name,
                    self.caller.called().len()
                );
                let _ = response.send(self.status());
            }

            TableMessage::CallNumber { response } => {
                let _ = response.send(self.handle_call());
            }

            TableMessage::GetStatus { response } => {
                let _ = response.send(self.status());
            }
        }
    }

    fn handle_call(&mut self) -> CallOutcome {
        match self.caller.call_next() {
            Some(number) => {
                // Drawn numbers always land in one of the five column ranges
                let letter = ColumnLetter::letter_for(number).unwrap_or(ColumnLetter::B);
                CallOutcome::Called {
                    number,
                    letter,
                    called_numbers: self.caller.called().to_vec(),
                }
            }
            None if !self.caller.is_active() => CallOutcome::Inactive,
            None => CallOutcome::Exhausted,
        }
    }

    fn status(&self) -> TableStatus {
        TableStatus {
            game_active: self.caller.is_active(),
            called_numbers: self.caller.called().to_vec(),
            current_number: self.caller.current(),
            total_called: self.caller.called().len(),
            started_at: self.caller.started_at(),
        }
    }
}
