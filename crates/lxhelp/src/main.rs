//! # lxhelp CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/lxhelpapp/`: UI-agnostic library (catalog, filtering, disclosure, copy)
//! - `crates/lxhelp/`: this terminal client
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/lxhelp/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Line-driven browse session (browse.rs)                   │
//! │  - Colored rendering (render.rs), log setup (logging.rs)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/lxhelpapp/src/api.rs)                    │
//! │  - Opens pages, resolves 1-based numbers                    │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument
//! parsing, configuration loading, terminal output and exit codes.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to the code, clipboard faked in memory.
//! - **CLI**: `tests/cli.rs` runs the real binary with `assert_cmd`, pointing the
//!   clipboard at `cat` or `false` through `LXHELP_CLIPBOARD_COMMAND`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
