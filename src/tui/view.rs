// File: src/tui/view.rs
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::format;
use crate::tui::action::CopyTarget;
use crate::tui::state::{AppState, Focus, InputMode};

pub fn draw(f: &mut Frame, state: &AppState) {
    let full_help_text = vec![
        Line::from(vec![
            Span::styled(
                " GLOBAL ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Tab:Switch Field  ?:Toggle Help  q/Esc:Quit"),
        ]),
        Line::from(vec![
            Span::styled(
                " INPUT ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" i/Enter:Edit Field  Esc:Done  h/l:Cycle Prefix Preset"),
        ]),
        Line::from(vec![
            Span::styled(
                " OUTPUT ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" c:Copy CSS Variables  t:Copy Tailwind Config  s:Save Defaults"),
        ]),
    ];

    let footer_height = if state.show_help {
        Constraint::Length(full_help_text.len() as u16 + 2)
    } else {
        Constraint::Length(3)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // inputs
            Constraint::Length(4), // swatch strip
            Constraint::Min(0),    // snippet panes
            footer_height,
        ])
        .split(f.area());

    draw_inputs(f, state, v_chunks[0]);
    draw_swatches(f, state, v_chunks[1]);
    draw_snippets(f, state, v_chunks[2]);
    draw_footer(f, state, v_chunks[3], full_help_text);
}

fn field_style(state: &AppState, field: Focus) -> Style {
    if state.focus != field {
        return Style::default();
    }
    match state.mode {
        InputMode::Editing => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        InputMode::Normal => Style::default().fg(Color::Yellow),
    }
}

fn draw_inputs(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let color_box = Paragraph::new(state.color_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Base Color ")
            .border_style(field_style(state, Focus::Color)),
    );
    f.render_widget(color_box, chunks[0]);

    let prefix_box = Paragraph::new(state.prefix_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Prefix ")
            .border_style(field_style(state, Focus::Prefix)),
    );
    f.render_widget(prefix_box, chunks[1]);
}

fn draw_swatches(f: &mut Frame, state: &AppState, area: Rect) {
    // Invalid input: the strip stays blank.
    if state.palette.is_empty() {
        return;
    }

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, 11); 11])
        .split(area);

    for (i, (step, color)) in state.palette.iter().enumerate() {
        let fg = if color.is_dark() {
            Color::White
        } else {
            Color::Black
        };
        let swatch = Paragraph::new(vec![Line::from(step.label()), Line::from(color.hex())])
            .alignment(Alignment::Center)
            .style(Style::default().fg(fg).bg(Color::Rgb(color.r, color.g, color.b)));
        f.render_widget(swatch, cells[i]);
    }
}

fn draw_snippets(f: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let prefix = state.effective_prefix();
    let css = format::css_variables(&state.palette, prefix);
    let config = format::tailwind_config(&state.palette, prefix);

    f.render_widget(
        snippet_pane(state, " CSS Variables (c) ", css, CopyTarget::CssVariables),
        chunks[0],
    );
    f.render_widget(
        snippet_pane(state, " Tailwind Config (t) ", config, CopyTarget::TailwindConfig),
        chunks[1],
    );
}

fn snippet_pane(
    state: &AppState,
    title: &'static str,
    body: String,
    target: CopyTarget,
) -> Paragraph<'static> {
    let copied = matches!(state.copied, Some((t, _)) if t == target);
    let title_line = if copied {
        Line::from(vec![
            Span::raw(title),
            Span::styled(
                "Copied! ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(title)
    };

    Paragraph::new(body).block(Block::default().borders(Borders::ALL).title(title_line))
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect, full_help_text: Vec<Line>) {
    if state.show_help {
        let help = Paragraph::new(full_help_text)
            .block(Block::default().borders(Borders::ALL).title(" Help "));
        f.render_widget(help, area);
        return;
    }

    let line = if let Some(status) = &state.status {
        Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Cyan),
        ))
    } else {
        Line::from(" Tab:Switch  i:Edit  h/l:Preset  c/t:Copy  s:Save  ?:Help  q:Quit")
    };
    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}
