//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: The working array as a bar chart, with touched positions highlighted
//! - [`steps`]: The step log around the cursor
//! - [`pseudocode`]: Pseudocode and complexity of the selected algorithm
//! - [`saved`]: Visualizations in the store
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function plus the small data
//! and scroll-state structs it needs. None of them hold on to application
//! state between frames.

pub mod bars;
pub mod pseudocode;
pub mod saved;
pub mod status;
pub mod steps;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

// Re-export render functions for convenience
pub use bars::{render_bars_pane, BarsRenderData};
pub use pseudocode::render_pseudocode_pane;
pub use saved::{render_saved_pane, SavedRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use steps::{render_steps_pane, StepsScrollState};

pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Start of a window of `visible` rows that keeps `row` roughly centered
pub(crate) fn centered_offset(row: usize, total: usize, visible: usize) -> usize {
    if total <= visible {
        return 0;
    }
    row.saturating_sub(visible / 2).min(total - visible)
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
