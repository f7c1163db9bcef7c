use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::NewProduct;

/// Shared answer to the confirmation question. Visible to every client; a
/// speed bump before mutations, not an access control.
pub const PASSPHRASE: &str = "2024";
pub const QUESTION: &str = "When is Joalda founded?";
pub const MISMATCH_MESSAGE: &str = "Incorrect answer. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Add,
    Delete,
}

/// A mutation waiting for the gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum PendingAction {
    Add(NewProduct),
    Delete(i64),
}

impl PendingAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PendingAction::Add(_) => ActionKind::Add,
            PendingAction::Delete(_) => ActionKind::Delete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Incorrect answer. Please try again.")]
    Mismatch,

    #[error("no action is awaiting confirmation")]
    NothingPending,
}

/// Confirmation step in front of add and delete.
///
/// While an action is pending the gate is open (the modal is shown). A wrong
/// answer keeps the action and records [`MISMATCH_MESSAGE`]; there is no
/// attempt limit. The right answer hands the action back exactly once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pending: Option<PendingAction>,
    error: Option<String>,
}

impl Gate {
    /// Queue `action`, replacing whatever was pending before.
    pub fn request(&mut self, action: PendingAction) {
        self.pending = Some(action);
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submit(&mut self, answer: &str) -> Result<PendingAction, GateError> {
        if self.pending.is_none() {
            return Err(GateError::NothingPending);
        }
        if answer.trim() != PASSPHRASE {
            self.error = Some(MISMATCH_MESSAGE.to_string());
            return Err(GateError::Mismatch);
        }
        self.error = None;
        self.pending.take().ok_or(GateError::NothingPending)
    }

    pub fn cancel(&mut self) -> Option<PendingAction> {
        self.error = None;
        self.pending.take()
    }
}
