// File: src/tui/state.rs
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::palette::{self, Palette};
use crate::tui::action::{Action, CopyTarget};

/// How long the "copied" acknowledgment stays on screen.
pub const COPY_ACK_TTL: Duration = Duration::from_secs(2);

/// Prefix presets, matching the stock Tailwind family names. "custom"
/// (free text) sits in front of them when cycling.
pub const PRESET_PREFIXES: [&str; 22] = [
    "blue", "red", "green", "yellow", "indigo", "purple", "pink", "gray", "slate", "zinc",
    "neutral", "stone", "lime", "emerald", "teal", "cyan", "sky", "violet", "fuchsia", "rose",
    "orange", "amber",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Color,
    Prefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct AppState {
    // Inputs
    pub color_input: String,
    pub prefix_input: String,
    pub focus: Focus,
    pub mode: InputMode,

    // Derived data
    pub palette: Palette,

    // Transient UI state
    pub copied: Option<(CopyTarget, Instant)>,
    pub status: Option<String>,
    pub show_help: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let color_input = config.default_color.clone();
        let palette = palette::generate(&color_input);
        Self {
            color_input,
            prefix_input: config.default_prefix.clone(),
            focus: Focus::Color,
            mode: InputMode::Normal,
            palette,
            copied: None,
            status: None,
            show_help: false,
        }
    }

    /// The prefix used in generated snippets. An empty custom prefix falls
    /// back to "custom".
    pub fn effective_prefix(&self) -> &str {
        let trimmed = self.prefix_input.trim();
        if trimmed.is_empty() { "custom" } else { trimmed }
    }

    pub fn mark_copied(&mut self, target: CopyTarget) {
        // A newer copy overwrites the timestamp, so the latest copy always
        // gets the full TTL.
        self.copied = Some((target, Instant::now()));
    }

    /// Expire the transient copy acknowledgment.
    pub fn tick(&mut self) {
        if let Some((_, at)) = self.copied
            && at.elapsed() >= COPY_ACK_TTL
        {
            self.copied = None;
        }
    }

    /// Pure key handling: mutates state, returns the side effects to run.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        match self.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('i') | KeyCode::Enter => self.mode = InputMode::Editing,
            KeyCode::Char('c') => return Some(Action::Copy(CopyTarget::CssVariables)),
            KeyCode::Char('t') => return Some(Action::Copy(CopyTarget::TailwindConfig)),
            KeyCode::Char('s') => return Some(Action::SaveDefaults),
            KeyCode::Left | KeyCode::Char('h') => self.cycle_preset(-1),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_preset(1),
            _ => {}
        }
        None
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = InputMode::Normal,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Backspace => {
                self.active_input_mut().pop();
                if self.focus == Focus::Color {
                    self.regenerate();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.active_input_mut().push(c);
                if self.focus == Focus::Color {
                    self.regenerate();
                }
            }
            _ => {}
        }
        None
    }

    // Full recompute on every edit; the ramp is cheap enough that caching
    // is not worth it.
    fn regenerate(&mut self) {
        self.palette = palette::generate(&self.color_input);
    }

    fn active_input_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::Color => &mut self.color_input,
            Focus::Prefix => &mut self.prefix_input,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Color => Focus::Prefix,
            Focus::Prefix => Focus::Color,
        };
    }

    /// Step the prefix through "custom" plus the stock family names.
    fn cycle_preset(&mut self, dir: i32) {
        let count = PRESET_PREFIXES.len() as i32 + 1;
        let current = PRESET_PREFIXES
            .iter()
            .position(|p| *p == self.prefix_input)
            .map(|i| i as i32 + 1)
            .unwrap_or(0);
        let next = (current + dir).rem_euclid(count);
        self.prefix_input = if next == 0 {
            "custom".to_string()
        } else {
            PRESET_PREFIXES[next as usize - 1].to_string()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fresh() -> AppState {
        AppState::new(&Config::default())
    }

    #[test]
    fn starts_with_a_generated_palette() {
        let state = fresh();
        assert_eq!(state.palette.len(), 11);
        assert_eq!(state.effective_prefix(), "custom");
    }

    #[test]
    fn typing_a_color_regenerates_live() {
        let mut state = fresh();
        state.handle_key(press(KeyCode::Enter));
        assert_eq!(state.mode, InputMode::Editing);

        // Mid-edit the input is invalid; the palette empties out.
        state.color_input.clear();
        state.handle_key(press(KeyCode::Char('#')));
        assert!(state.palette.is_empty());

        for c in "808080".chars() {
            state.handle_key(press(KeyCode::Char(c)));
        }
        assert_eq!(state.palette.len(), 11);

        state.handle_key(press(KeyCode::Backspace));
        assert!(state.palette.is_empty());
    }

    #[test]
    fn normal_mode_maps_keys_to_actions() {
        let mut state = fresh();
        assert_eq!(state.handle_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            state.handle_key(press(KeyCode::Char('c'))),
            Some(Action::Copy(CopyTarget::CssVariables))
        );
        assert_eq!(
            state.handle_key(press(KeyCode::Char('t'))),
            Some(Action::Copy(CopyTarget::TailwindConfig))
        );
        assert_eq!(
            state.handle_key(press(KeyCode::Char('s'))),
            Some(Action::SaveDefaults)
        );
    }

    #[test]
    fn preset_cycling_wraps_both_ways() {
        let mut state = fresh();
        state.handle_key(press(KeyCode::Right));
        assert_eq!(state.prefix_input, "blue");
        state.handle_key(press(KeyCode::Left));
        assert_eq!(state.prefix_input, "custom");
        state.handle_key(press(KeyCode::Left));
        assert_eq!(state.prefix_input, "amber");
    }

    #[test]
    fn empty_prefix_falls_back_to_custom() {
        let mut state = fresh();
        state.prefix_input = "  ".to_string();
        assert_eq!(state.effective_prefix(), "custom");
        state.prefix_input = "brand".to_string();
        assert_eq!(state.effective_prefix(), "brand");
    }

    #[test]
    fn copy_acknowledgment_expires_after_ttl() {
        let mut state = fresh();
        state.mark_copied(CopyTarget::CssVariables);
        state.tick();
        assert!(state.copied.is_some());

        state.copied = Some((
            CopyTarget::CssVariables,
            Instant::now() - (COPY_ACK_TTL + Duration::from_millis(100)),
        ));
        state.tick();
        assert!(state.copied.is_none());
    }

    #[test]
    fn newer_copy_supersedes_the_pending_ack() {
        let mut state = fresh();
        state.copied = Some((
            CopyTarget::CssVariables,
            Instant::now() - (COPY_ACK_TTL + Duration::from_millis(100)),
        ));
        state.mark_copied(CopyTarget::TailwindConfig);
        state.tick();
        assert_eq!(
            state.copied.map(|(t, _)| t),
            Some(CopyTarget::TailwindConfig)
        );
    }
}
