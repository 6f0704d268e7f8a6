//! Pseudocode pane with light syntax highlighting

use super::border_style;
use crate::algorithm::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

fn word_style(word: &str) -> Style {
    match word {
        "if" | "for" | "to" | "while" | "and" | "swap" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        // Procedure names are written in capitals
        _ if word.len() > 1 && word.chars().all(|c| c.is_ascii_uppercase() || c == '-') => {
            Style::default().fg(DEFAULT_THEME.function)
        }
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Split a pseudocode line into styled words and delimiters
fn highlight_line(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut word_start = None;

    for (i, c) in line.char_indices() {
        let in_word = c.is_alphanumeric() || c == '_' || c == '-';
        match (in_word, word_start) {
            (true, None) => word_start = Some(i),
            (false, Some(start)) => {
                spans.push(Span::styled(&line[start..i], word_style(&line[start..i])));
                spans.push(Span::raw(&line[i..i + c.len_utf8()]));
                word_start = None;
            }
            (false, None) => spans.push(Span::raw(&line[i..i + c.len_utf8()])),
            (true, Some(_)) => {}
        }
    }
    if let Some(start) = word_start {
        spans.push(Span::styled(&line[start..], word_style(&line[start..])));
    }

    Line::from(spans)
}

/// Render pseudocode and complexity for `algorithm`
pub fn render_pseudocode_pane(frame: &mut Frame, area: Rect, algorithm: Algorithm) {
    let block = Block::default()
        .title(format!(" {} · {} ", algorithm.title(), algorithm.time_complexity()))
        .borders(Borders::ALL)
        .border_style(border_style(false))
        .padding(Padding::new(1, 0, 0, 0));

    let lines: Vec<Line> = algorithm.pseudocode().lines().map(highlight_line).collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
