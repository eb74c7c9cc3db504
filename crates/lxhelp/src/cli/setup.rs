use clap::{Parser, Subcommand, ValueEnum};
use lxhelpapp::catalog::PageKind;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2026-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "lxhelp",
    bin_name = "lxhelp",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Pages: installation, terminal, errors, troubleshooting\nRecords are numbered from 1, as listed."
)]
#[command(about = "Linux help in the terminal: error lookup, troubleshooting checklist, shell and install guides", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Debug logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, help_heading = "Options")]
    pub quiet: bool,

    /// Output format for listings
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true, help_heading = "Options")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List the help pages
    #[command(alias = "ls", display_order = 1)]
    Pages,

    /// Look up common Linux errors
    #[command(alias = "e", display_order = 2)]
    Errors {
        /// Search text (matches error, meaning and causes)
        query: Option<String>,

        /// Expand error N of the listing
        #[arg(long, value_name = "N")]
        open: Option<usize>,
    },

    /// Read the terminal or installation guide
    #[command(alias = "t", display_order = 3)]
    Topics {
        /// terminal | installation
        #[arg(value_parser = parse_page)]
        page: PageKind,

        /// Search text (matches section titles and summaries)
        query: Option<String>,

        /// Expand section N of the listing
        #[arg(long, value_name = "N")]
        open: Option<usize>,
    },

    /// Walk through the troubleshooting checklist
    #[command(alias = "c", display_order = 4)]
    Checklist {
        /// Search text (matches step titles and descriptions)
        query: Option<String>,

        /// Mark step N as done (repeatable)
        #[arg(long = "check", value_name = "N")]
        check: Vec<usize>,
    },

    /// Copy the code block of record N to the clipboard
    #[command(display_order = 5)]
    Copy {
        #[arg(value_parser = parse_page)]
        page: PageKind,

        /// Record number, as listed
        number: usize,
    },

    /// Interactive session on one page, driven by lines on stdin
    #[command(alias = "b", display_order = 6)]
    Browse {
        #[arg(value_parser = parse_page)]
        page: PageKind,
    },
}

fn parse_page(s: &str) -> Result<PageKind, String> {
    s.parse::<PageKind>().map_err(|e| e.to_string())
}
