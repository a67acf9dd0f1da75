//! Terminal UI
//!
//! Uses `cliclack` for prompts and log lines when attached to a terminal,
//! with plain `[OK]`/`[WARN]` output in CI and pipes.

mod context;
mod output;
mod prompts;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, key_value, key_value_status, outro_success, remark, step_info, step_ok,
    step_ok_detail, step_warn, step_warn_hint,
};
pub use prompts::{confirm, optional_text_or_prompt, text_or_prompt};
pub use theme::{init_theme, BrewTheme};
