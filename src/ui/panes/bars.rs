//! Bar chart of the working array

use super::border_style;
use crate::algorithm::Algorithm;
use crate::driver::PlaybackState;
use crate::steps::Value;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// Data needed to render the bar chart
pub struct BarsRenderData<'a> {
    pub array: &'a [Value],
    pub highlights: &'a [usize],
    pub algorithm: Algorithm,
    pub state: PlaybackState,
}

/// Tallest bar handed to the chart widget; larger ranges are scaled down
pub const MAX_BAR_HEIGHT: u64 = 1_000_000;

/// Bar heights for `array`.
///
/// Non-negative arrays are drawn to scale. When negatives are present every
/// value is shifted so the smallest bar is one unit tall. Ranges taller than
/// [`MAX_BAR_HEIGHT`] are scaled proportionally to fit.
pub fn bar_heights(array: &[Value]) -> Vec<u64> {
    let min = array.iter().copied().min().unwrap_or(0);
    let floor = if min < 0 { i128::from(min) - 1 } else { 0 };
    // Every shifted value is positive and at most 2^64, so it fits a u128
    let raw: Vec<u128> = array
        .iter()
        .map(|&v| (i128::from(v) - floor) as u128)
        .collect();

    let cap = u128::from(MAX_BAR_HEIGHT);
    let max = raw.iter().copied().max().unwrap_or(0);
    raw.into_iter()
        .map(|h| if max > cap { h * cap / max } else { h })
        .map(|h| u64::try_from(h).unwrap_or(MAX_BAR_HEIGHT))
        .collect()
}

fn bar_color(index: usize, data: &BarsRenderData) -> Color {
    if data.highlights.contains(&index) {
        DEFAULT_THEME.bar_highlight
    } else if data.state == PlaybackState::Complete {
        DEFAULT_THEME.bar_sorted
    } else {
        DEFAULT_THEME.bar
    }
}

/// Render the bar chart pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: BarsRenderData) {
    let block = Block::default()
        .title(format!(" {} ", data.algorithm.title()))
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let n = u16::try_from(data.array.len().max(1)).unwrap_or(u16::MAX);
    let inner_width = area.width.saturating_sub(2);
    let gap: u16 = if u32::from(inner_width) >= u32::from(n) * 2 { 1 } else { 0 };
    let bar_width = (inner_width.saturating_sub(gap * (n - 1)) / n).max(1);

    let bars: Vec<Bar> = data
        .array
        .iter()
        .zip(bar_heights(data.array))
        .enumerate()
        .map(|(idx, (&value, height))| {
            let color = bar_color(idx, &data);
            Bar::default()
                .value(height)
                .text_value(value.to_string())
                .label(Line::from(idx.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .bg(color)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(gap)
        .label_style(Style::default().fg(DEFAULT_THEME.comment))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
