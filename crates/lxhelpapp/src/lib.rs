//! # lxhelp Architecture
//!
//! lxhelp is a **UI-agnostic help catalog**. The terminal client in `crates/lxhelp` is
//! one way of showing it; the same library could sit behind a web page or a TUI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (crates/lxhelp)                                     │
//! │  - Parses arguments, renders pages, owns terminal I/O       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Opens pages, resolves user-facing numbers to record ids  │
//! │  - Turns clipboard outcomes into messages                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page Layer (page.rs)                                       │
//! │  - Query + filtered view + disclosure policy + code blocks  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (filter.rs, disclosure.rs, clipboard.rs)            │
//! │  - Pure filtering, state transitions by value, copy flags   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Records (model.rs, store.rs, catalog/)                     │
//! │  - Immutable ordered stores built from the bundled content  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Apart from the system clipboard backend, nothing in this crate touches stdout,
//! stderr or the process. Time is passed in as [`std::time::Instant`] values, so
//! the copy acknowledgment can be tested without sleeping.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade used by clients
//! - [`page`]: Per-page controller
//! - [`filter`]: Case-insensitive substring filtering
//! - [`disclosure`]: Single-open and independent-toggle state
//! - [`clipboard`]: Clipboard backends and the transient "copied" flag
//! - [`model`]: Record ids, entry kinds
//! - [`store`]: Immutable record stores
//! - [`catalog`]: The bundled pages
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod filter;
pub mod model;
pub mod page;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
