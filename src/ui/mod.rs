//! User interface module - formatting of everything npub prints.
//!
//! npub never prompts: the confirmation is a timed pause (see
//! [crate::delay]), so this module is output only.

pub mod formatter;

pub use formatter::{
    blank_line, display_announcement, display_error, display_hint, display_notice, display_plan,
    display_step, display_success, display_warning,
};
