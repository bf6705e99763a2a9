//! Parameters pane: the driver's loop variables during a run

use crate::state::MemoryEntry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// One `label: value` row
fn entry_line(entry: &MemoryEntry) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}:", entry.label),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            entry.value.to_string(),
            Style::default().fg(DEFAULT_THEME.number),
        ),
    ])
}

/// Render the parameters pane, or "Idle" when there is no snapshot
pub fn render_parameters_pane(frame: &mut Frame, area: Rect, memory: &[MemoryEntry]) {
    let block = Block::default()
        .title(" Parameters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 1, 0));

    if memory.is_empty() {
        let paragraph = Paragraph::new("Idle")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = memory
        .iter()
        .map(|entry| ListItem::new(entry_line(entry)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}
