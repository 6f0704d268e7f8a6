//! Step log pane: every recorded step, with the last applied one marked

use super::{border_style, centered_offset};
use crate::steps::{Step, StepLog};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Scroll state for the step pane
#[derive(Debug, Clone, Copy)]
pub struct StepsScrollState {
    pub offset: usize,
    /// Keep the cursor in view; cleared when the user scrolls manually
    pub follow: bool,
}

impl Default for StepsScrollState {
    fn default() -> Self {
        StepsScrollState {
            offset: 0,
            follow: true,
        }
    }
}

fn kind_style(step: &Step) -> Style {
    match step {
        Step::Compare { .. } => Style::default().fg(DEFAULT_THEME.primary),
        Step::Overwrite { .. } => Style::default().fg(DEFAULT_THEME.secondary),
        Step::Swap { .. } => Style::default().fg(DEFAULT_THEME.function),
        Step::Unknown => Style::default().fg(DEFAULT_THEME.error),
    }
}

/// Render the step log pane.
///
/// `cursor` is the number of steps applied so far; the step at `cursor - 1`
/// is marked as current.
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    log: &StepLog,
    cursor: usize,
    is_focused: bool,
    scroll: &mut StepsScrollState,
) {
    let counts = log.counts();
    let block = Block::default()
        .title(format!(
            " Steps ({} compares, {} swaps, {} overwrites) ",
            counts.compares, counts.swaps, counts.overwrites
        ))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if log.is_empty() {
        let paragraph = Paragraph::new("(no steps: press space to generate)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let total = log.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let current = cursor.checked_sub(1);

    if scroll.follow {
        scroll.offset = centered_offset(current.unwrap_or(0), total, visible_height);
    } else if total > visible_height {
        scroll.offset = scroll.offset.min(total - visible_height);
    } else {
        scroll.offset = 0;
    }

    let items: Vec<ListItem> = log
        .iter()
        .enumerate()
        .skip(scroll.offset)
        .take(visible_height)
        .map(|(idx, step)| {
            let is_current = Some(idx) == current;
            let applied = idx < cursor;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let mut text_style = kind_style(step);
            if !applied {
                text_style = text_style.add_modifier(Modifier::DIM);
            }
            let line = Line::from(vec![
                Span::styled(format!("{:5} ", idx + 1), num_style),
                Span::styled(step.to_string(), text_style),
            ]);
            let item = ListItem::new(line);
            if is_current {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
