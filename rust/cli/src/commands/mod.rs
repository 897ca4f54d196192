//! Command handler modules for the `showdown` CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) and, for `count`,
//!   the stdin reader are passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

pub mod bench;
pub mod cfg;
pub mod compare;
pub mod count;
pub mod deal;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use count::handle_count_command;
pub use deal::handle_deal_command;
