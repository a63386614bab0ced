//! Interactive terminal viewer for a plot panel.

mod ui;

use crate::config::ViewerConfig;
use crate::error::{PlotError, Result};
use crate::panel::PlotPanel;
use arboard::Clipboard;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

const HELP: &str = "q quit | c palette | T theme | y copy data";

/// What a key press asks the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the viewer.
    Quit,
    /// Cycle the palette of every pixels view.
    CyclePalette,
    /// Switch to the next theme.
    CycleTheme,
    /// Copy the plot data to the clipboard.
    CopyData,
}

impl Action {
    /// Action bound to a key, if any.
    pub fn from_key(modifiers: KeyModifiers, code: KeyCode) -> Option<Self> {
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::NONE, KeyCode::Esc) => {
                Some(Action::Quit)
            },
            (KeyModifiers::NONE, KeyCode::Char('c')) => Some(Action::CyclePalette),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) | (KeyModifiers::NONE, KeyCode::Char('T')) => {
                Some(Action::CycleTheme)
            },
            (KeyModifiers::NONE, KeyCode::Char('y')) => Some(Action::CopyData),
            _ => None,
        }
    }
}

/// Viewer state besides the panel.
#[derive(Debug)]
pub struct ViewerState {
    /// Status message shown at the bottom.
    pub status: String,
    config: ViewerConfig,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl ViewerState {
    /// Create viewer state.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            status: HELP.to_string(),
            config,
        }
    }

    /// Apply an action to the panel. Returns `false` when the viewer should
    /// close.
    pub fn apply(&mut self, action: Action, panel: &mut PlotPanel) -> bool {
        match action {
            Action::Quit => return false,
            Action::CyclePalette => {
                self.status = match panel.cycle_palettes() {
                    Some(palette) => format!("Palette: {}", palette.name()),
                    None => "No pixels to recolor".to_string(),
                };
            },
            Action::CycleTheme => {
                let theme = panel.theme().next();
                panel.set_theme(theme);
                self.status = format!("Theme: {}", theme.name());
            },
            Action::CopyData => {
                self.status = match copy_data(panel) {
                    Ok(lines) => format!("Copied {} lines", lines),
                    Err(e) => format!("Copy failed: {}", e),
                };
            },
        }
        tracing::debug!(?action, status = %self.status, "viewer action");
        true
    }
}

/// Copy the data of all views as tab-separated values. Returns the number
/// of lines copied.
pub fn copy_data(panel: &PlotPanel) -> Result<usize> {
    let text = panel.data_tsv();
    if text.is_empty() {
        return Err(PlotError::UnsupportedInput("plot has no data".to_string()));
    }
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.as_str())?;
    Ok(text.lines().count())
}

/// Show `panel` in the terminal until the user quits.
///
/// The terminal is restored even when drawing or reading events fails.
pub fn run(panel: &mut PlotPanel) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!("viewer started");

    let res = run_loop(&mut terminal, panel, ViewerState::default());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    tracing::info!("viewer closed");

    res
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    panel: &mut PlotPanel,
    mut state: ViewerState,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, panel, &state))
            .map_err(|e| PlotError::Terminal(e.to_string()))?;

        if !event::poll(state.config.poll_interval)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if let Some(action) = Action::from_key(key.modifiers, key.code) {
            if !state.apply(action, panel) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorPalette;
    use crate::panel::Panel;
    use crate::theme::Theme;
    use crate::views::{share, PixelsView};
    use ndarray::Array2;

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(
            Action::from_key(KeyModifiers::NONE, KeyCode::Esc),
            Some(Action::Quit)
        );
        assert_eq!(
            Action::from_key(KeyModifiers::SHIFT, KeyCode::Char('T')),
            Some(Action::CycleTheme)
        );
        assert_eq!(Action::from_key(KeyModifiers::NONE, KeyCode::Char('x')), None);
    }

    #[test]
    fn actions_update_panel_and_status() {
        let mut panel = PlotPanel::default();
        let mut state = ViewerState::default();
        assert!(state.apply(Action::CyclePalette, &mut panel));
        assert_eq!(state.status, "No pixels to recolor");

        panel.add_tiled_view(share(PixelsView::from_array(Array2::zeros((2, 2)))));
        state.apply(Action::CyclePalette, &mut panel);
        assert_eq!(state.status, format!("Palette: {}", ColorPalette::Jet.name()));

        state.apply(Action::CycleTheme, &mut panel);
        assert_eq!(panel.theme(), Theme::GruvboxLight);
        assert!(!state.apply(Action::Quit, &mut panel));
    }

    #[test]
    fn copying_an_empty_plot_fails() {
        assert!(copy_data(&PlotPanel::default()).is_err());
    }
}
