//! # CLI Behavior
//!
//! This is **one possible UI client** for lxhelp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## One-Shot Commands
//!
//! `errors`, `topics`, `checklist` and `copy` each build a fresh page, apply the
//! flags in order (query, then toggles), print the result and exit. Page state is
//! never persisted between runs.
//!
//! - `lxhelp errors denied` lists matching errors; the first match is not opened,
//!   because a query collapses everything.
//! - `lxhelp errors --open 2` opens the second error.
//! - `lxhelp checklist --check 1 --check 3` ticks two steps and prints progress.
//! - `lxhelp copy errors 2` sends the solution of error 2 to the clipboard.
//!
//! ### Naked Execution (`lxhelp`)
//!
//! Running `lxhelp` with no arguments defaults to `lxhelp pages`.
//!
//! ## Browse Sessions
//!
//! `lxhelp browse <page>` keeps one page alive and reads commands from stdin, one
//! per line. The "Copied!" marker lasts for the configured window and is cleared
//! by polling before each command, so it behaves like the button on the site.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap, help text
//! - `commands`: Context setup and per-command handlers
//! - `browse`: The stdin-driven session
//! - `render`: Output formatting (lists, details, messages)
//! - `logging`: tracing subscriber setup

mod browse;
mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
