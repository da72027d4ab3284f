//! CLI command handlers, one file per command.

mod add;
mod completions;
mod list;
mod remove;
mod show;

pub use add::run_add;
pub use completions::run_completions;
pub use list::run_list;
pub use remove::run_remove;
pub use show::run_show;
