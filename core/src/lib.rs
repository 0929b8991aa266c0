//! Client-side synchronization core for a todo list stored behind a REST
//! API.
//!
//! # Overview
//! [`TodoListController`] owns the in-memory list and exposes the
//! operations a UI layer drives: load, add, toggle, an edit session, and a
//! confirm-gated delete. Every mutation goes through a matching remote call
//! and local state changes only after the store acknowledges it.
//!
//! # Design
//! - `TodoClient` is stateless — it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - The I/O round-trip is behind the [`Transport`] trait; production code
//!   uses [`UreqTransport`], tests use scripted in-memory transports.
//! - Remote failures never propagate: the controller converts them to a
//!   tagged [`SyncError`] readable by the UI as a dismissible banner.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::TodoClient;
pub use controller::{EditSession, TodoListController};
pub use error::{ApiError, SyncError, SyncErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{CreateTodo, ReplaceTodo, TodoId, TodoItem};
