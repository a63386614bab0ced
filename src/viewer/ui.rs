//! Viewer layout: the plot above a one-line status bar.

use super::ViewerState;
use crate::panel::PlotPanel;
use crate::theme::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the plot and the status bar.
pub(super) fn draw(f: &mut Frame<'_>, panel: &PlotPanel, state: &ViewerState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    f.render_widget(panel, chunks[0]);

    let colors = ThemeColors::from_theme(panel.theme());
    let status = Paragraph::new(state.status.as_str())
        .style(Style::default().fg(colors.status_fg).bg(colors.status_bg));
    f.render_widget(status, chunks[1]);
}
