use super::app::WellTuneApp;
use super::event::{Event, EventHandler};
use super::keys::map_key;
use crate::config::Config;
use crate::error::{ErrorContext, WellTuneError, WellTuneResult};
use crate::logging::{log_debug, log_error, log_info, log_panic_info};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::env;
use std::io;
use std::process::Command;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run_interactive_mode(config: &Config) -> WellTuneResult<()> {
    log_info("Starting interactive mode");
    install_panic_hook();

    enable_raw_mode()?;
    let mut terminal = rollback_on_error(setup_terminal(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;
    log_debug("Terminal initialized");

    let mut app = WellTuneApp::new(config);
    let result = run_loop(&mut terminal, &mut app, config.tick_rate_ms);

    restore_terminal(&mut terminal)?;
    log_info("Exiting interactive mode");
    result
}

fn setup_terminal() -> WellTuneResult<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Run `undo` when `result` is an error, then hand the result back
fn rollback_on_error<T, F>(result: WellTuneResult<T>, undo: F) -> WellTuneResult<T>
where
    F: FnOnce(),
{
    if let Err(e) = &result {
        log_error(&format!("Terminal setup failed: {}", e));
        undo();
    }
    result
}

fn run_loop(terminal: &mut Tui, app: &mut WellTuneApp, tick_rate_ms: u64) -> WellTuneResult<()> {
    let events = EventHandler::new(tick_rate_ms);

    loop {
        if app.launch_editor {
            app.launch_editor = false;
            let current = app
                .feed
                .upload
                .as_ref()
                .map(|form| form.description.value().to_string())
                .unwrap_or_default();
            log_debug(&format!("Launching editor with content length: {}", current.len()));
            events.gate().pause();
            let edited = launch_external_editor(terminal, &current);
            events.gate().resume();
            let edited = edited?;
            app.apply_editor_result(edited);
        }

        terminal.draw(|f| super::ui::draw(f, app)).map_err(|e| {
            log_error(&format!("Error drawing UI: {}", e));
            WellTuneError::TerminalError(e.to_string())
        })?;

        let event = events
            .recv()
            .map_err(|e| WellTuneError::TerminalError(format!("Event channel closed: {}", e)))?;
        match event {
            Event::Key(key) => {
                let upload_open = app.feed.upload.is_some();
                let action = map_key(key, app.screen(), app.popup, upload_open);
                log_debug(&format!("Key {:?} on {} -> {:?}", key.code, app.screen(), action));
                app.handle_action(action);
            }
            Event::Resize => {}
            Event::Tick => app.prune_notifications(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn restore_terminal(terminal: &mut Tui) -> WellTuneResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Leave the alternate screen before the default hook prints the panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log_panic_info(info);
        default_hook(info);
    }));
}

fn editor_command() -> String {
    env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| {
            let available = |name: &str| {
                Command::new("which")
                    .arg(name)
                    .output()
                    .map(|o| o.status.success())
                    .unwrap_or(false)
            };
            ["nano", "vim", "vi"]
                .into_iter()
                .find(|name| available(name))
                .unwrap_or("nano")
                .to_string()
        })
}

/// Suspend the TUI, edit `content` in the user's editor and come back.
/// Returns None when the editor exits with an error.
fn launch_external_editor(terminal: &mut Tui, content: &str) -> WellTuneResult<Option<String>> {
    let temp_file = tempfile::Builder::new()
        .prefix("welltune-upload-")
        .suffix(".md")
        .tempfile()?;
    std::fs::write(temp_file.path(), content)?;

    let editor = editor_command();

    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    terminal.show_cursor()?;

    log_debug(&format!("Launching editor: {}", editor));
    let status = Command::new(&editor).arg(temp_file.path()).status();

    enable_raw_mode()?;
    execute!(terminal.backend_mut(), EnterAlternateScreen)?;
    terminal.hide_cursor()?;
    terminal.clear()?;

    match status {
        Ok(status) if status.success() => {
            let edited = std::fs::read_to_string(temp_file.path())
                .context("Failed to read the edited description")?;
            Ok(Some(edited.trim_end().to_string()))
        }
        Ok(_) => Ok(None),
        Err(e) => {
            log_error(&format!("Failed to launch editor '{}': {}", editor, e));
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_rollback_runs_only_on_error() {
        let undone = Cell::new(false);
        let ok: WellTuneResult<u8> = rollback_on_error(Ok(1), || undone.set(true));
        assert_eq!(ok.ok(), Some(1));
        assert!(!undone.get());

        let failed: WellTuneResult<u8> = rollback_on_error(
            Err(WellTuneError::TerminalError("no tty".to_string())),
            || undone.set(true),
        );
        assert!(matches!(failed, Err(WellTuneError::TerminalError(_))));
        assert!(undone.get());
    }
}
