//! PomoApp: opens the Pomodoro window and runs until it is closed
//!
//! Escape closes the window; a left click prints the cursor position.

use std::process::ExitCode;

use pomo_shell::prelude::*;

fn main() -> ExitCode {
    pomo_shell::logging::init();
    log::info!("Starting PomoApp");

    let mut shell = Shell::new(GlfwPlatform::new(), ShellConfig::default(), std::io::stdout());
    match shell.run() {
        Ok(()) => {
            log::info!("PomoApp exited cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => ExitCode::from(e.exit_code()),
    }
}
