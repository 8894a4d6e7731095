//! Mutations and the confirmation gate in front of destructive ones.
//!
//! Views describe what they want changed as a [`Mutation`] and hand it to a
//! mutation collaborator. Deletions must pass through [`BulkAction`], which
//! holds the request until the user explicitly confirms it. After a
//! successful mutation the view refetches its collection rather than
//! patching it locally.
//!
//! ```rust
//! use listing_widgets::bulk::{BulkAction, Mutation};
//!
//! let mut action = BulkAction::new();
//! assert!(action.request_delete(vec!["a".into(), "b".into()]));
//! assert!(action.is_pending());
//!
//! match action.confirm() {
//!     Some(Mutation::Delete(ids)) => assert_eq!(ids, vec!["a", "b"]),
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert!(!action.is_pending());
//! ```

/// A change requested from the mutation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Delete the items with these ids.
    Delete(Vec<String>),
    /// Update the item with this id; the payload is built by the caller.
    Update(String),
    /// Create a new item; the payload is built by the caller.
    Create,
}

impl Mutation {
    /// Returns the ids removed by this mutation, if any.
    pub fn deleted_ids(&self) -> &[String] {
        match self {
            Mutation::Delete(ids) => ids,
            Mutation::Update(_) | Mutation::Create => &[],
        }
    }

    /// Returns true for deletions.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Mutation::Delete(_))
    }
}

/// What the mutation collaborator reported back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Whether the backend accepted the change.
    pub ok: bool,
    /// Optional user-facing message.
    pub message: Option<String>,
}

impl MutationOutcome {
    /// A successful outcome without a message.
    pub fn success() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    /// A failed outcome with a user-facing message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
        }
    }

    /// Attaches a message (builder pattern).
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Holds a destructive request until it is confirmed or cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkAction {
    pending: Option<Vec<String>>,
}

impl BulkAction {
    /// Creates a gate with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks for confirmation before deleting `ids`.
    ///
    /// Returns false, and leaves the gate unchanged, when `ids` is empty.
    /// A new request replaces any pending one.
    pub fn request_delete(&mut self, ids: Vec<String>) -> bool {
        if ids.is_empty() {
            return false;
        }
        self.pending = Some(ids);
        true
    }

    /// Returns true while a request awaits confirmation.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the ids awaiting confirmation.
    pub fn pending_ids(&self) -> &[String] {
        self.pending.as_deref().unwrap_or(&[])
    }

    /// Confirms the pending request and returns the mutation to run.
    pub fn confirm(&mut self) -> Option<Mutation> {
        self.pending.take().map(Mutation::Delete)
    }

    /// Drops the pending request.
    ///
    /// Returns true if there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// The question shown to the user while a request is pending.
    pub fn prompt(&self, singular: &str, plural: &str) -> Option<String> {
        let count = self.pending.as_ref()?.len();
        let noun = if count == 1 { singular } else { plural };
        Some(format!("Delete {count} {noun}? (y/n)"))
    }
}
