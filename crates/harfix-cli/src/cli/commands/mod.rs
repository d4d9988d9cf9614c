//! CLI command handlers. Each command is in its own file.

mod completions;
mod init;
mod normalize;
mod normalize_url;
mod scenarios;

pub use completions::{run_completions, run_man};
pub use init::run_init;
pub use normalize::run_normalize;
pub use normalize_url::run_normalize_url;
pub use scenarios::run_scenarios;
