//! Bar chart pane
//!
//! Redrawn from scratch every frame: one bar per array element, scaled
//! linearly from `[0, max]` onto the available rows, with the value printed
//! directly above each bar. The bar under comparison is drawn in the
//! highlight color.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
    Frame,
};

/// Linear map from `[0, domain_max]` to `[0, range_max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_max: f64,
    range_max: f64,
}

impl LinearScale {
    pub fn new(domain_max: f64, range_max: f64) -> Self {
        LinearScale {
            domain_max,
            range_max,
        }
    }

    /// Scale `value`. A degenerate domain maps everything to 0.
    pub fn apply(&self, value: f64) -> f64 {
        if self.domain_max <= 0.0 {
            return 0.0;
        }
        value / self.domain_max * self.range_max
    }
}

/// Position and size of one bar, in buffer cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLayout {
    pub x: u16,
    pub width: u16,
    /// Cells reserved for this bar, gap included
    pub slot: u16,
    pub height: u16,
    pub label: String,
    pub highlighted: bool,
}

/// Compute bar geometry for `values` inside `area`.
///
/// The top row of `area` is reserved so the tallest bar still has room for
/// its label. Each bar gets `width / count` cells and leaves the last one
/// empty as a gap, unless that would leave two cells or fewer. Bars that do
/// not fit horizontally are dropped.
pub fn layout_bars(values: &[u32], highlighted: Option<usize>, area: Rect) -> Vec<BarLayout> {
    if values.is_empty() || area.width == 0 || area.height < 2 {
        return Vec::new();
    }

    let count = u16::try_from(values.len()).unwrap_or(u16::MAX);
    let slot = (area.width / count).max(1);
    let width = if slot > 2 { slot - 1 } else { slot };
    let chart_height = area.height - 1;
    let max = values.iter().copied().max().unwrap_or(0);
    let scale = LinearScale::new(f64::from(max), f64::from(chart_height));

    values
        .iter()
        .enumerate()
        .map_while(|(idx, &value)| {
            let offset = slot.checked_mul(u16::try_from(idx).ok()?)?;
            if offset >= area.width {
                return None;
            }
            let height = (scale.apply(f64::from(value)).round() as u16).min(chart_height);
            Some(BarLayout {
                x: area.x + offset,
                width: width.min(area.width - offset),
                slot: slot.min(area.width - offset),
                height,
                label: value.to_string(),
                highlighted: highlighted == Some(idx),
            })
        })
        .collect()
}

/// Widget drawing the bars and their labels
pub struct ArrayChart<'a> {
    pub values: &'a [u32],
    pub highlighted: Option<usize>,
}

impl Widget for ArrayChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bottom = area.bottom();
        for bar in layout_bars(self.values, self.highlighted, area) {
            let color = if bar.highlighted {
                DEFAULT_THEME.bar_highlight
            } else {
                DEFAULT_THEME.bar
            };
            let fill = "█".repeat(bar.width as usize);
            for y in (bottom - bar.height)..bottom {
                buf.set_string(bar.x, y, &fill, Style::default().fg(color));
            }

            // Label sits in the row directly above the bar, centered on it,
            // and is left out when it would spill into the next slot
            let label_len = bar.label.len() as u16;
            if label_len > bar.slot {
                continue;
            }
            let label_y = bottom - bar.height - 1;
            let label_x = bar.x + bar.width.saturating_sub(label_len) / 2;
            let mut label_style = Style::default().fg(DEFAULT_THEME.fg);
            if bar.highlighted {
                label_style = label_style
                    .fg(DEFAULT_THEME.bar_highlight)
                    .add_modifier(Modifier::BOLD);
            }
            buf.set_string(label_x, label_y, &bar.label, label_style);
        }
    }
}

/// Render the chart pane with its border
pub fn render_chart_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[u32],
    highlighted: Option<usize>,
) {
    let block = Block::default()
        .title(" Bubble Sort ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(ArrayChart { values, highlighted }, inner);
}
