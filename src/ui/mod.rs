//! Terminal output for the CLI
//!
//! Uses `cliclack` for spinners and styled log lines on a terminal, with
//! plain `[OK]`/`[WARN]` lines when output is piped or running in CI.

mod context;
mod output;
mod progress;
mod prompts;

pub use context::UiContext;
pub use output::{
    intro, key_value, key_value_status, outro_success, step_ok_detail, step_warn_hint,
};
pub use progress::TaskSpinner;
pub use prompts::confirm;
