//! Saved visualizations pane

use super::{border_style, centered_offset};
use crate::store::VisualizationSummary;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Data needed to render the saved pane
pub struct SavedRenderData<'a> {
    pub entries: &'a [VisualizationSummary],
    pub selected: usize,
    /// Milliseconds since the Unix epoch, for relative ages
    pub now_millis: u64,
}

/// Coarse age such as `just now`, `12m ago`, `3d ago`
pub fn format_age(created_at: u64, now_millis: u64) -> String {
    let secs = now_millis.saturating_sub(created_at) / 1000;
    match secs {
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{}m ago", secs / 60),
        3_600..=86_399 => format!("{}h ago", secs / 3_600),
        _ => format!("{}d ago", secs / 86_400),
    }
}

/// Render the saved visualizations pane
pub fn render_saved_pane(frame: &mut Frame, area: Rect, data: SavedRenderData, is_focused: bool) {
    let block = Block::default()
        .title(format!(" Saved ({}) ", data.entries.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if data.entries.is_empty() {
        let paragraph = Paragraph::new("No saved visualizations found")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let offset = centered_offset(data.selected, data.entries.len(), visible_height);

    let items: Vec<ListItem> = data
        .entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_height)
        .map(|(idx, entry)| {
            let short_id: String = entry.id.chars().take(8).collect();
            let line = Line::from(vec![
                Span::styled(format!("{short_id} "), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    format!("{:<9} ", entry.algorithm.name()),
                    Style::default().fg(DEFAULT_THEME.function),
                ),
                Span::styled(
                    format!("{:>3} el ", entry.elements),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
                Span::styled(
                    format_age(entry.created_at, data.now_millis),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ]);
            let item = ListItem::new(line);
            if idx == data.selected && is_focused {
                item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;
    use crate::ui::panes::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_format_age() {
        let now = 10_000_000_000;
        assert_eq!(format_age(now - 5_000, now), "just now");
        assert_eq!(format_age(now - 120_000, now), "2m ago");
        assert_eq!(format_age(now - 7_200_000, now), "2h ago");
        assert_eq!(format_age(now - 3 * 86_400_000, now), "3d ago");
        assert_eq!(format_age(now + 1, now), "just now");
    }

    #[test]
    fn test_lists_entries() {
        let entries = vec![VisualizationSummary {
            id: "0123456789abcdef".to_string(),
            algorithm: Algorithm::Selection,
            elements: 9,
            created_at: 0,
        }];
        let mut terminal = Terminal::new(TestBackend::new(50, 5)).unwrap();
        terminal
            .draw(|f| {
                render_saved_pane(
                    f,
                    f.area(),
                    SavedRenderData {
                        entries: &entries,
                        selected: 0,
                        now_millis: 60_000,
                    },
                    true,
                )
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("01234567 selection"));
        assert!(text.contains("1m ago"));
    }
}
