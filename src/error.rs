use std::io::stdout;
use std::panic;

use color_eyre::eyre::Result;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode, is_raw_mode_enabled};

/// Report errors with color-eyre and hand the terminal back before any panic
/// message is printed.
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        tracing::error!(panic = %panic_info, "Panicked");
        eprintln!("{}", panic_hook.panic_report(panic_info));
    }));

    Ok(())
}

pub fn restore_terminal() -> Result<()> {
    if is_raw_mode_enabled()? {
        execute!(stdout(), LeaveAlternateScreen, Show)?;
        disable_raw_mode()?;
    }
    Ok(())
}
