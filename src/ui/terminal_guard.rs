//! Restores the terminal on every exit path: normal return, `?`, or panic.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Owns raw mode and the alternate screen while alive
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen
    pub fn enter() -> anyhow::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Restore the terminal now. Drop becomes a no-op afterwards.
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        restore()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore() {
                tracing::debug!(error = %e, "Terminal cleanup failed in Drop");
            }
        }
    }
}

fn restore() -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, Show)?;
    stdout.flush()?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed.
/// Call early in main(), before the terminal is set up.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore() {
            tracing::debug!(error = %e, "Failed to restore terminal in panic hook");
        }
        original_hook(panic_info);
    }));
}
