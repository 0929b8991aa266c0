//! State synchronization between the local todo list and the remote store.
//!
//! # Design
//! [`TodoListController`] owns the in-memory list and mediates every
//! mutation through a matching remote call, applying local state only after
//! the store confirms (confirmed updates, never optimistic). Each operation
//! is one deterministic transition: build request, execute through the
//! transport, parse, reconcile.
//!
//! Failures never escape. Every remote failure is caught, tagged with the
//! operation that caused it, and stored as the last-error value; the list is
//! left exactly as it was before the call. The one exception is
//! `confirm_delete`, whose staging state is cleared whether or not the call
//! succeeded.
//!
//! The at-most-one-edit and at-most-one-pending-delete constraints are
//! controller invariants: conflicting `begin_edit` / `request_delete` calls
//! are rejected, not left to UI control disabling.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::{ApiError, SyncError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{CreateTodo, ReplaceTodo, TodoId, TodoItem};

/// An in-progress edit of a single item's description.
///
/// At most one session exists at a time; it owns the target id, so a save
/// cannot race against a session swap.
#[derive(Debug, Clone)]
pub struct EditSession {
    id: TodoId,
    draft: String,
}

impl EditSession {
    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }
}

/// Owns the local todo list and keeps it a lagging mirror of the remote
/// collection.
///
/// Remote operations return `true` when the mutation was applied locally
/// (which implies the store confirmed it) and `false` on a no-op or a
/// failure; the distinction is readable from [`last_error`].
///
/// The busy flag is advisory: it is set for the duration of every remote
/// call, but the controller does not reject calls while it is set —
/// disabling triggers during a call is the caller's responsibility.
///
/// [`last_error`]: TodoListController::last_error
pub struct TodoListController<T: Transport> {
    client: TodoClient,
    transport: T,
    todos: Vec<TodoItem>,
    busy: bool,
    last_error: Option<SyncError>,
    edit: Option<EditSession>,
    pending_delete: Option<TodoId>,
}

impl<T: Transport> TodoListController<T> {
    /// Creates a controller with an empty list. The endpoint base URL and
    /// the transport are explicit inputs; there is no ambient configuration.
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
            todos: Vec::new(),
            busy: false,
            last_error: None,
            edit: None,
            pending_delete: None,
        }
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn last_error(&self) -> Option<&SyncError> {
        self.last_error.as_ref()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&TodoId> {
        self.pending_delete.as_ref()
    }

    /// Clears the error banner without issuing any remote call.
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Fetches the full collection and replaces the local list with it.
    ///
    /// On failure the list is left untouched (still empty if this was the
    /// initial load) and the error is reported as `FetchFailed`.
    pub fn load(&mut self) -> bool {
        debug!("loading todo list");
        let outcome = self
            .execute(self.client.build_list_todos())
            .and_then(|resp| self.client.parse_list_todos(resp));
        match outcome {
            Ok(todos) => {
                self.todos = todos;
                self.last_error = None;
                true
            }
            Err(e) => self.fail(SyncError::FetchFailed(e)),
        }
    }

    /// Creates a new item and appends the store's confirmed record.
    ///
    /// A description that trims to empty is a no-op: no request is issued
    /// and no state changes.
    pub fn add(&mut self, description: &str) -> bool {
        if description.trim().is_empty() {
            return false;
        }
        debug!("adding todo");
        let input = CreateTodo {
            description: description.to_string(),
            status: false,
        };
        let outcome = self
            .client
            .build_create_todo(&input)
            .and_then(|req| self.execute(req))
            .and_then(|resp| self.client.parse_create_todo(resp));
        match outcome {
            Ok(item) => {
                self.todos.push(item);
                self.last_error = None;
                true
            }
            Err(e) => self.fail(SyncError::AddFailed(e)),
        }
    }

    /// Flips the done flag of one item through the store.
    ///
    /// No-op if `id` is not in the list. On success the local item is
    /// replaced with the record the store returned — the store's response is
    /// ground truth, not the locally flipped boolean. On failure the
    /// previous item is left untouched.
    pub fn toggle_status(&mut self, id: &TodoId) -> bool {
        let Some(status) = self.todos.iter().find(|t| &t.id == id).map(|t| t.status) else {
            return false;
        };
        debug!(%id, "toggling status");
        let input = ReplaceTodo {
            status: Some(!status),
            ..Default::default()
        };
        match self.replace(id.clone(), &input) {
            Ok(()) => true,
            Err(e) => self.fail(SyncError::UpdateFailed(e)),
        }
    }

    /// Opens an edit session for `id`, seeding the draft with the item's
    /// current description.
    ///
    /// Rejected (returns `false`, no state change) while another session is
    /// active or when `id` is not in the list.
    pub fn begin_edit(&mut self, id: &TodoId) -> bool {
        if self.edit.is_some() {
            return false;
        }
        let Some(item) = self.todos.iter().find(|t| &t.id == id) else {
            return false;
        };
        self.edit = Some(EditSession {
            id: id.clone(),
            draft: item.description.clone(),
        });
        true
    }

    /// Replaces the active draft text. No-op without an active session.
    pub fn set_draft(&mut self, text: &str) {
        if let Some(edit) = &mut self.edit {
            edit.draft = text.to_string();
        }
    }

    /// Closes the active edit session, discarding the draft. Idempotent.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Saves the active draft through the store and closes the session.
    ///
    /// No-op when no session is active or the trimmed draft is empty — the
    /// session stays open either way. On failure the session also stays open
    /// so the caller can retry or cancel.
    pub fn save_edit(&mut self) -> bool {
        let Some(edit) = &self.edit else {
            return false;
        };
        let draft = edit.draft.trim();
        if draft.is_empty() {
            return false;
        }
        let id = edit.id.clone();
        debug!(%id, "saving edit");
        let input = ReplaceTodo {
            description: Some(draft.to_string()),
            ..Default::default()
        };
        match self.replace(id, &input) {
            Ok(()) => {
                self.edit = None;
                true
            }
            Err(e) => self.fail(SyncError::UpdateFailed(e)),
        }
    }

    /// Stages `id` for deletion pending an explicit confirm.
    ///
    /// Rejected while another target is staged or when `id` is not in the
    /// list. Deletion never proceeds without [`confirm_delete`].
    ///
    /// [`confirm_delete`]: TodoListController::confirm_delete
    pub fn request_delete(&mut self, id: &TodoId) -> bool {
        if self.pending_delete.is_some() {
            return false;
        }
        if !self.todos.iter().any(|t| &t.id == id) {
            return false;
        }
        self.pending_delete = Some(id.clone());
        true
    }

    /// Unstages the pending delete target. Idempotent.
    pub fn cancel_delete_request(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the staged item through the store.
    ///
    /// No-op when nothing is staged. On success the item is removed from the
    /// local list; on failure the list is left unchanged. The staged target
    /// and busy flag are cleared on completion regardless of outcome.
    pub fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };
        debug!(%id, "deleting todo");
        let outcome = self
            .execute(self.client.build_delete_todo(&id))
            .and_then(|resp| self.client.parse_delete_todo(resp));
        match outcome {
            Ok(()) => {
                self.todos.retain(|t| t.id != id);
                self.last_error = None;
                true
            }
            Err(e) => self.fail(SyncError::DeleteFailed(e)),
        }
    }

    /// Runs one request through the transport with the busy flag set for
    /// the call's duration.
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.busy = true;
        let result = self.transport.execute(req);
        self.busy = false;
        result
    }

    /// Shared replace path for `toggle_status` and `save_edit`: on success
    /// the local item is overwritten with the store's response; on failure
    /// nothing is assigned, so a malformed or partial failure response can
    /// never clobber local state.
    fn replace(&mut self, id: TodoId, input: &ReplaceTodo) -> Result<(), ApiError> {
        let item = self
            .client
            .build_replace_todo(&id, input)
            .and_then(|req| self.execute(req))
            .and_then(|resp| self.client.parse_replace_todo(resp))?;
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
            *slot = item;
        }
        self.last_error = None;
        Ok(())
    }

    fn fail(&mut self, error: SyncError) -> bool {
        warn!(error = %error, "remote operation failed");
        self.last_error = Some(error);
        false
    }
}
