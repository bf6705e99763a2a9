//! Controls strip under the chart: start and pause buttons plus the speed slider

use crate::driver::SpeedControl;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
    Frame,
};

/// What the controls strip needs to know about the run
pub struct ControlsRenderData<'a> {
    pub is_running: bool,
    pub is_paused: bool,
    pub speed: &'a SpeedControl,
}

/// Slider position in `[0, 1]`
pub fn slider_ratio(speed: &SpeedControl) -> f64 {
    let span = speed.max().saturating_sub(speed.min());
    if span == 0 {
        return 1.0;
    }
    f64::from(speed.value() - speed.min()) / f64::from(span)
}

fn button(label: &str, key: &str, enabled: bool, color: Color) -> Vec<Span<'static>> {
    let style = if enabled {
        Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(DEFAULT_THEME.status_bg).fg(DEFAULT_THEME.comment)
    };
    vec![
        Span::styled(format!(" {} [{}] ", label, key), style),
        Span::raw("  "),
    ]
}

/// Render the controls strip
pub fn render_controls_pane(frame: &mut Frame, area: Rect, data: ControlsRenderData) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(inner);

    // Start is disabled while running, pause/resume while idle
    let (pause_label, pause_color) = if data.is_paused {
        ("Resume", DEFAULT_THEME.success)
    } else {
        ("Pause", DEFAULT_THEME.warning)
    };
    let mut spans = button("Start Sort", "s", !data.is_running, DEFAULT_THEME.primary);
    spans.extend(button(pause_label, "space", data.is_running, pause_color));
    frame.render_widget(Paragraph::new(Line::from(spans)), columns[0]);

    let delay_ms = data.speed.step_delay().as_millis();
    let gauge = LineGauge::default()
        .ratio(slider_ratio(data.speed))
        .label(format!("Speed {} ({}ms) [-/+]", data.speed.value(), delay_ms))
        .line_set(symbols::line::THICK)
        .filled_style(Style::default().fg(DEFAULT_THEME.secondary))
        .unfilled_style(Style::default().fg(DEFAULT_THEME.comment));
    frame.render_widget(gauge, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;

    fn render(is_running: bool, is_paused: bool) -> Buffer {
        let speed = SpeedControl::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|f| {
                render_controls_pane(
                    f,
                    f.area(),
                    ControlsRenderData {
                        is_running,
                        is_paused,
                        speed: &speed,
                    },
                )
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_start_enabled_only_while_idle() {
        let idle = render(false, false);
        assert_eq!(idle[(2, 1)].symbol(), "S");
        assert_eq!(idle[(2, 1)].bg, DEFAULT_THEME.primary);

        let running = render(true, false);
        assert_eq!(running[(2, 1)].symbol(), "S");
        assert_eq!(running[(2, 1)].bg, DEFAULT_THEME.status_bg);
        assert_eq!(running[(2, 1)].fg, DEFAULT_THEME.comment);
    }

    #[test]
    fn test_pause_button_follows_run_state() {
        // Start button and its spacing take 18 cells after the border
        let idle = render(false, false);
        assert!(row_text(&idle, 1).contains("Pause [space]"));
        assert_eq!(idle[(20, 1)].symbol(), "P");
        assert_eq!(idle[(20, 1)].bg, DEFAULT_THEME.status_bg);

        let running = render(true, false);
        assert_eq!(running[(20, 1)].bg, DEFAULT_THEME.warning);

        let paused = render(true, true);
        assert!(row_text(&paused, 1).contains("Resume [space]"));
        assert!(!row_text(&paused, 1).contains("Pause [space]"));
        assert_eq!(paused[(20, 1)].symbol(), "R");
        assert_eq!(paused[(20, 1)].bg, DEFAULT_THEME.success);
    }

    #[test]
    fn test_slider_label_shows_speed_and_delay() {
        let buf = render(false, false);
        assert!(row_text(&buf, 1).contains("Speed 500 (500ms)"));
    }

    #[test]
    fn test_slider_ratio() {
        let speed = SpeedControl::default();
        speed.set(100);
        assert_eq!(slider_ratio(&speed), 0.0);
        speed.set(1000);
        assert_eq!(slider_ratio(&speed), 1.0);

        let half = SpeedControl::new(0, 1000, 100, 500, Duration::from_millis(1000));
        assert_eq!(slider_ratio(&half), 0.5);

        let fixed = SpeedControl::new(300, 300, 100, 300, Duration::from_millis(1000));
        assert_eq!(slider_ratio(&fixed), 1.0);
    }
}
