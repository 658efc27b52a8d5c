//! Application state and event handlers.
//!
//! The page owns the DOM and the buttons; it forwards each click to one
//! handler here. A handler mutates the owned [`AppState`], talks to storage,
//! and pushes render data out through a [`Presenter`]. Only one event is
//! handled at a time, so nothing here is shared or locked.
//!
//! Storage write failures never abort a handler: the in-memory state is kept,
//! the failure is recorded in `AppState::last_error` and shown as a toast.

use serde::Serialize;
use tracing::warn;

use crate::clock::Clock;
use crate::config::PickerConfig;
use crate::error::Result;
use crate::format::format_pick;
use crate::generator::generate_pick;
use crate::history::HistoryStore;
use crate::rng::RandomSource;
use crate::storage::KeyValueStore;
use crate::theme::{Theme, ThemeStore};
use crate::types::{demo_pick, Pick};
use crate::view::{render_history, render_pick, HistoryView, PickView};

/// Receives render data and notifications.
pub trait Presenter {
    fn render_pick(&mut self, view: PickView);
    fn render_history(&mut self, view: HistoryView);
    fn apply_theme(&mut self, theme: Theme);
    fn toast(&mut self, message: &str);
    fn hint(&mut self, message: &str);
}

/// Writes copy text somewhere the user can paste from. Returns false when
/// the write is known to have failed.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub current_pick: Pick,
    pub sort_main: bool,
    pub auto_copy: bool,
    pub theme: Theme,
    /// Most recent persistence failure, cleared by the next successful write.
    pub last_error: Option<String>,
}

pub struct App<S, C, R> {
    state: AppState,
    history: HistoryStore<S, C>,
    themes: ThemeStore<S>,
    rng: R,
}

impl<S, C, R> App<S, C, R>
where
    S: KeyValueStore + Clone,
    C: Clock,
    R: RandomSource,
{
    pub fn new(store: S, clock: C, rng: R, config: &PickerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: AppState {
                current_pick: demo_pick(),
                sort_main: config.sort_main,
                auto_copy: config.auto_copy,
                theme: Theme::Dark,
                last_error: None,
            },
            history: HistoryStore::from_config(store.clone(), clock, config),
            themes: ThemeStore::new(store, config.theme_key.clone()),
            rng,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn set_sort_main(&mut self, sort_main: bool) {
        self.state.sort_main = sort_main;
    }

    pub fn set_auto_copy(&mut self, auto_copy: bool) {
        self.state.auto_copy = auto_copy;
    }

    /// Initial render: theme, stored history, and the demo pick.
    pub fn start<P: Presenter>(&mut self, prefers_light: bool, presenter: &mut P) {
        let theme = match self.themes.init(prefers_light) {
            Ok(theme) => {
                self.state.last_error = None;
                theme
            }
            Err(err) => {
                self.record::<()>(Err(err));
                self.themes.resolve(prefers_light)
            }
        };
        self.state.theme = theme;
        presenter.apply_theme(theme);

        presenter.render_history(render_history(&self.history.load()));
        presenter.render_pick(render_pick(&self.state.current_pick));
    }

    pub fn generate<P: Presenter, K: Clipboard>(&mut self, presenter: &mut P, clipboard: &mut K) -> Result<()> {
        let pick = generate_pick(self.state.sort_main, &mut self.rng)?;
        self.state.current_pick = pick;
        presenter.render_pick(render_pick(&self.state.current_pick));

        let saved = match self.history.append(&self.state.current_pick) {
            Ok(history) => {
                self.state.last_error = None;
                presenter.render_history(render_history(&history));
                true
            }
            Err(err) => {
                self.record::<()>(Err(err));
                false
            }
        };
        presenter.hint(&format!("Generated: {} games", self.state.current_pick.len()));

        let message = if self.state.auto_copy {
            let copied = clipboard.write(&format_pick(&self.state.current_pick));
            match (saved, copied) {
                (true, true) => "Generated and copied",
                (true, false) => "Generated (copy failed)",
                (false, true) => "Generated and copied, but history could not be saved",
                (false, false) => "Generated, but copy failed and history could not be saved",
            }
        } else if saved {
            "Generated 5 games"
        } else {
            "Generated, but history could not be saved"
        };
        presenter.toast(message);
        Ok(())
    }

    /// Copy the current pick. Does nothing when there is no pick.
    pub fn copy_current<P: Presenter, K: Clipboard>(&mut self, presenter: &mut P, clipboard: &mut K) {
        if self.state.current_pick.is_empty() {
            return;
        }
        let ok = clipboard.write(&format_pick(&self.state.current_pick));
        presenter.toast(if ok { "Copied" } else { "Copy failed" });
    }

    /// Make the history entry at `index` the current pick. Returns false if
    /// there is no such entry.
    pub fn restore<P: Presenter>(&mut self, index: usize, presenter: &mut P) -> bool {
        let Some(entry) = self.history.load().into_iter().nth(index) else {
            return false;
        };
        self.state.current_pick = entry.games().to_vec();
        presenter.render_pick(render_pick(&self.state.current_pick));
        presenter.hint(&format!("Loaded ({} games)", self.state.current_pick.len()));
        presenter.toast("Loaded 5 games");
        true
    }

    pub fn copy_history<P: Presenter, K: Clipboard>(
        &mut self,
        index: usize,
        presenter: &mut P,
        clipboard: &mut K,
    ) -> bool {
        let Some(entry) = self.history.load().into_iter().nth(index) else {
            return false;
        };
        let ok = clipboard.write(&format_pick(entry.games()));
        presenter.toast(if ok { "Copied" } else { "Copy failed" });
        true
    }

    pub fn clear_history<P: Presenter>(&mut self, presenter: &mut P) {
        let cleared = self.history.clear();
        let ok = cleared.is_ok();
        self.record(cleared);
        presenter.render_history(render_history(&self.history.load()));
        presenter.toast(if ok { "History cleared" } else { "History could not be cleared" });
    }

    pub fn toggle_theme<P: Presenter>(&mut self, presenter: &mut P) {
        let theme = self.state.theme.toggled();
        let saved = self.themes.apply(theme);
        let ok = saved.is_ok();
        self.record(saved);
        self.state.theme = theme;
        presenter.apply_theme(theme);
        presenter.toast(if ok { "Theme switched" } else { "Theme switched, but could not be saved" });
    }

    fn record<T>(&mut self, result: Result<T>) {
        match result {
            Ok(_) => self.state.last_error = None,
            Err(err) => {
                warn!(error = %err, "storage write failed, keeping in-memory state");
                self.state.last_error = Some(err.to_string());
            }
        }
    }
}

/// Everything one handler produced, collected for a caller that renders
/// after the handler returns (the JS bindings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub pick: Option<PickView>,
    pub history: Option<HistoryView>,
    pub theme: Option<Theme>,
    pub toast: Option<String>,
    pub hint: Option<String>,
    pub copy_text: Option<String>,
    pub error: Option<String>,
}

impl Frame {
    pub fn with_error(mut self, state: &AppState) -> Self {
        self.error = state.last_error.clone();
        self
    }
}

impl Presenter for Frame {
    fn render_pick(&mut self, view: PickView) {
        self.pick = Some(view);
    }

    fn render_history(&mut self, view: HistoryView) {
        self.history = Some(view);
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn toast(&mut self, message: &str) {
        self.toast = Some(message.to_string());
    }

    fn hint(&mut self, message: &str) {
        self.hint = Some(message.to_string());
    }
}
