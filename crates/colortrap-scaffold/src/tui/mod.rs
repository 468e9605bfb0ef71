//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use prompts::{finish, run, run_status, SetupArgs, StatusArgs, CANCELLED_EXIT_CODE};

/// Restore the cursor on panic and turn Ctrl+C into a clean cancellation
#[cfg(feature = "tui")]
pub fn install_terminal_guards() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        eprintln!("\n\n⚠ Cancelled by user");
        std::process::exit(i32::from(CANCELLED_EXIT_CODE));
    })
    .ok();
}
