use crossterm::event::KeyCode;
use tracing::{info, warn};

use crate::color::{ColorSource, RandomSource};
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::palette::Palette;
use crate::types::{CellIndex, PALETTE_SIZE};

use super::AppEvent;

/// The top-level application state.
pub struct App<S = RandomSource> {
    pub running: bool,
    pub palette: Palette<S>,
    pub selected_index: CellIndex,
    pub info_visible: bool,
    pub share_popup: Option<SharePopup>,
    pub status: Option<String>,
    pub config: Config,
}

/// The share payload as it will be written, in the chosen format.
#[derive(Clone, Debug)]
pub struct SharePopup {
    pub format: ExportFormat,
    pub payload: String,
}

impl<S: ColorSource> App<S> {
    pub fn new(palette: Palette<S>, config: Config) -> Self {
        let info_visible = config.ui.show_info_on_start;
        Self {
            running: true,
            palette,
            selected_index: 0,
            info_visible,
            share_popup: None,
            status: None,
            config,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.share_popup.is_some() {
            self.handle_share_key(key);
            return;
        }
        if self.info_visible {
            // Any key dismisses the overlay.
            self.info_visible = false;
            return;
        }

        self.status = None;
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => self.select_prev(),
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => self.select_next(),
            KeyCode::Char(c @ '1'..='5') => {
                self.selected_index = c as usize - '1' as usize;
            }
            KeyCode::Enter | KeyCode::Char('r') => self.regenerate_selected(),
            KeyCode::Char(' ') | KeyCode::Char('g') => self.palette.regenerate_all(),
            KeyCode::Char('l') => self.palette.toggle_lock(self.selected_index),
            KeyCode::Char('u') => {
                self.palette.unlock_all();
                self.status = Some("All cells unlocked".to_string());
            }
            KeyCode::Char('i') | KeyCode::Char('?') => self.info_visible = true,
            KeyCode::Char('s') => self.open_share_popup(),
            _ => {}
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = PALETTE_SIZE - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % PALETTE_SIZE;
    }

    fn regenerate_selected(&mut self) {
        if self.palette.is_locked(self.selected_index) {
            self.status = Some(format!("Cell {} is locked", self.selected_index + 1));
            return;
        }
        self.palette.regenerate_one(self.selected_index);
    }

    fn open_share_popup(&mut self) {
        let format = self.config.export.format;
        match self.share_payload(format) {
            Ok(payload) => self.share_popup = Some(SharePopup { format, payload }),
            Err(err) => self.status = Some(format!("Share failed: {err}")),
        }
    }

    fn share_payload(&self, format: ExportFormat) -> crate::Result<String> {
        export::render(&self.palette.colors(), format)
    }

    fn handle_share_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => self.share_popup = None,
            KeyCode::Tab => {
                let Some(popup) = &self.share_popup else {
                    return;
                };
                let format = popup.format.next();
                match self.share_payload(format) {
                    Ok(payload) => self.share_popup = Some(SharePopup { format, payload }),
                    Err(err) => self.status = Some(format!("Share failed: {err}")),
                }
            }
            KeyCode::Enter => self.apply_share_popup(),
            _ => {}
        }
    }

    fn apply_share_popup(&mut self) {
        let Some(popup) = self.share_popup.take() else {
            return;
        };
        let dir = self.config.export_dir();
        match export::save(&self.palette.colors(), popup.format, &dir) {
            Ok(path) => {
                info!(path = %path.display(), "palette shared");
                self.status = Some(format!("Saved {}", path.display()));
            }
            Err(err) => {
                warn!(error = %err, "export failed");
                self.status = Some(format!("Export failed: {err}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::color::HexColor;

    /// Cycles through a fixed list of colors forever.
    struct Cycle(VecDeque<HexColor>);

    impl ColorSource for Cycle {
        fn next_color(&mut self) -> HexColor {
            let color = self.0.pop_front().unwrap();
            self.0.push_back(color);
            color
        }
    }

    fn app_with(config: Config) -> App<Cycle> {
        let colors = ["#101010", "#202020", "#303030", "#404040", "#505050"]
            .map(|hex| hex.parse().unwrap());
        let source = Cycle(VecDeque::from([
            "#A0A0A0".parse().unwrap(),
            "#B0B0B0".parse().unwrap(),
        ]));
        App::new(Palette::with_colors(colors, source), config)
    }

    fn press(app: &mut App<Cycle>, key: KeyCode) {
        app.update(AppEvent::KeyPress(key));
    }

    #[test]
    fn quit_keys_stop_the_app() {
        let mut app = app_with(Config::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = app_with(Config::default());
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_index, PALETTE_SIZE - 1);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_index, 0);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.selected_index, 3);
    }

    #[test]
    fn enter_regenerates_selected_cell_only() {
        let mut app = app_with(Config::default());
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        let colors = app.palette.colors().map(|c| c.to_string());
        assert_eq!(colors, ["#101010", "#202020", "#A0A0A0", "#404040", "#505050"]);
    }

    #[test]
    fn locked_cell_reports_status_instead_of_changing() {
        let mut app = app_with(Config::default());
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.palette.color(0).to_string(), "#101010");
        assert_eq!(app.status.as_deref(), Some("Cell 1 is locked"));
    }

    #[test]
    fn space_regenerates_unlocked_and_u_unlocks() {
        let mut app = app_with(Config::default());
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.palette.color(0).to_string(), "#101010");
        assert_eq!(app.palette.color(1).to_string(), "#A0A0A0");
        assert_eq!(app.palette.color(2).to_string(), "#B0B0B0");

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.palette.locked_count(), 0);
    }

    #[test]
    fn info_overlay_swallows_next_key() {
        let mut app = app_with(Config::default());
        press(&mut app, KeyCode::Char('i'));
        assert!(app.info_visible);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.info_visible);
        assert!(app.running);
    }

    #[test]
    fn info_shown_on_start_when_configured() {
        let mut config = Config::default();
        config.ui.show_info_on_start = true;
        let app = app_with(config);
        assert!(app.info_visible);
    }

    #[test]
    fn share_popup_cycles_format() {
        let mut app = app_with(Config::default());
        press(&mut app, KeyCode::Char('s'));
        let popup = app.share_popup.as_ref().unwrap();
        assert_eq!(popup.format, ExportFormat::Json);
        assert!(popup.payload.contains("\"#101010\""));

        press(&mut app, KeyCode::Tab);
        let popup = app.share_popup.as_ref().unwrap();
        assert_eq!(popup.format, ExportFormat::Text);
        assert!(popup.payload.starts_with("#101010\n#202020"));

        press(&mut app, KeyCode::Esc);
        assert!(app.share_popup.is_none());
        assert!(app.running);
    }

    #[test]
    fn share_enter_writes_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.export.directory = Some(dir.path().to_path_buf());
        config.export.format = ExportFormat::Css;
        let mut app = app_with(config);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Enter);
        assert!(app.share_popup.is_none());
        assert!(app.status.as_deref().unwrap().starts_with("Saved "));

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }
}
