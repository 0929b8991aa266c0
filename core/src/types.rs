//! Domain DTOs for the remote todo collection.
//!
//! # Design
//! These types mirror the remote store's JSON schema but are defined
//! independently of any server crate; integration tests against the in-tree
//! mock server catch schema drift. Identifiers and timestamps are opaque:
//! the store assigns them and the client carries them through without
//! parsing or validating.

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the remote store.
///
/// Unique within the collection and immutable after creation. The client
/// never inspects the contents — equality and display are the only
/// operations it needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single todo item as returned by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    /// Optional label; carried through unchanged, never written by the
    /// client's mutation operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub description: String,
    /// `false` = not done, `true` = done.
    pub status: bool,
    /// Store-assigned timestamp, opaque to the client.
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Store-assigned timestamp, opaque to the client.
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub description: String,
    #[serde(default)]
    pub status: bool,
}

/// Partial payload for replacing fields of an existing todo. Only the fields
/// present in the JSON are applied; omitted fields remain unchanged on the
/// server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaceTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}
