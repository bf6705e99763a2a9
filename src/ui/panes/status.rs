//! Status bar rendering with keybindings and run state

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_running: bool,
    pub is_paused: bool,
    pub comparisons: usize,
    pub swaps: usize,
}

/// Badge text and color for the current run state
pub fn run_badge(is_running: bool, is_paused: bool) -> (&'static str, Color) {
    match (is_running, is_paused) {
        (true, true) => (" ❚❚ PAUSED ", DEFAULT_THEME.warning),
        (true, false) => (" ▶ SORTING ", DEFAULT_THEME.secondary),
        (false, _) => (" IDLE ", DEFAULT_THEME.success),
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (badge, badge_color) = run_badge(data.is_running, data.is_paused);
    let bar_style = Style::default().bg(DEFAULT_THEME.status_bg);

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} cmp · {} swp ", data.comparisons, data.swaps),
            bar_style.fg(DEFAULT_THEME.number),
        ),
        Span::styled(" | ", bar_style.fg(DEFAULT_THEME.comment)),
        Span::styled(format!(" {} ", data.message), bar_style.fg(DEFAULT_THEME.fg)),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar_style)
            .alignment(Alignment::Left),
        layout[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let disabled_key_style = bar_style.fg(DEFAULT_THEME.comment);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    let (start_key, pause_key) = if data.is_running {
        (disabled_key_style, key_style)
    } else {
        (key_style, disabled_key_style)
    };

    let right_spans = vec![
        Span::styled(" s ", start_key),
        Span::styled(" start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", pause_key),
        Span::styled(" pause ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" -/+ ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", start_key),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar_style)
            .alignment(Alignment::Right),
        layout[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(is_running: bool, is_paused: bool) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(140, 1)).unwrap();
        terminal
            .draw(|f| {
                render_status_bar(
                    f,
                    f.area(),
                    StatusRenderData {
                        message: "Ready!",
                        is_running,
                        is_paused,
                        comparisons: 3,
                        swaps: 2,
                    },
                )
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Column where `needle` starts on row 0
    fn find(buf: &Buffer, needle: &str) -> u16 {
        let len = needle.chars().count() as u16;
        (0..buf.area.width.saturating_sub(len))
            .find(|&x| {
                let text: String = (x..x + len).map(|c| buf[(c, 0)].symbol()).collect();
                text == needle
            })
            .unwrap_or_else(|| panic!("{:?} not found", needle))
    }

    #[test]
    fn test_start_hint_dimmed_while_running() {
        let idle = render(false, false);
        let key = find(&idle, " start ") - 2;
        assert_eq!(idle[(key, 0)].symbol(), "s");
        assert_eq!(idle[(key, 0)].bg, DEFAULT_THEME.comment);

        let running = render(true, false);
        let key = find(&running, " start ") - 2;
        assert_eq!(running[(key, 0)].symbol(), "s");
        assert_eq!(running[(key, 0)].bg, DEFAULT_THEME.status_bg);
        assert_eq!(running[(key, 0)].fg, DEFAULT_THEME.comment);
    }

    #[test]
    fn test_pause_hint_dimmed_while_idle() {
        let idle = render(false, false);
        let key = find(&idle, " pause ") - 2;
        assert_eq!(idle[(key, 0)].symbol(), "⎵");
        assert_eq!(idle[(key, 0)].bg, DEFAULT_THEME.status_bg);

        let running = render(true, false);
        let key = find(&running, " pause ") - 2;
        assert_eq!(running[(key, 0)].bg, DEFAULT_THEME.comment);
    }

    #[test]
    fn test_left_side_shows_badge_and_counters() {
        let buf = render(true, true);
        find(&buf, "PAUSED");
        find(&buf, " 3 cmp · 2 swp ");
        find(&buf, " Ready! ");
    }

    #[test]
    fn test_run_badge() {
        assert_eq!(run_badge(false, false).0, " IDLE ");
        assert_eq!(run_badge(false, true).0, " IDLE ");
        assert_eq!(run_badge(true, false).0, " ▶ SORTING ");
        assert_eq!(run_badge(true, true).0, " ❚❚ PAUSED ");
    }
}
