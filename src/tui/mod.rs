// File: src/tui/mod.rs
pub mod action;
pub mod state;
pub mod view;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::config::Config;
use crate::format;
use crate::tui::action::{Action, CopyTarget};
use crate::tui::state::AppState;

// Short poll so the copy acknowledgment expires without user input.
const TICK_RATE: Duration = Duration::from_millis(200);

/// Run the TUI until the user quits. Terminal setup and teardown (raw
/// mode, alternate screen, panic hook) are handled by ratatui.
pub fn run(config: Config) -> Result<()> {
    let mut terminal = ratatui::init();
    let mut state = AppState::new(&config);

    let res = event_loop(&mut terminal, &mut state);
    ratatui::restore();
    res
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| view::draw(f, state))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = state.handle_key(key)
        {
            match action {
                Action::Quit => return Ok(()),
                Action::Copy(target) => copy_snippet(state, target),
                Action::SaveDefaults => save_defaults(state),
            }
        }

        state.tick();
    }
}

// Clipboard write is fire-and-forget: a failure is logged, never surfaced
// as an error state. The acknowledgment simply does not appear.
fn copy_snippet(state: &mut AppState, target: CopyTarget) {
    let prefix = state.effective_prefix();
    let text = match target {
        CopyTarget::CssVariables => format::css_variables(&state.palette, prefix),
        CopyTarget::TailwindConfig => format::tailwind_config(&state.palette, prefix),
    };

    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
        Ok(()) => state.mark_copied(target),
        Err(e) => log::warn!("Clipboard error: {}", e),
    }
}

fn save_defaults(state: &mut AppState) {
    let config = Config {
        default_color: state.color_input.clone(),
        default_prefix: state.prefix_input.clone(),
    };
    state.status = Some(match config.save() {
        Ok(()) => "Defaults saved".to_string(),
        Err(e) => format!("Config save failed: {}", e),
    });
}
