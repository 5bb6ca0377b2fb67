use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::palette::{Palette, resolve_palette};

// display mode
//
// the site starts out dark unless the visitor has toggled it before
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

// wherever the theme survives between sessions
//
// the webapp backs this with local storage; storing is best-effort, so
// implementations log their own failures instead of returning them
pub trait ThemeStorage {
    fn load(&self) -> anyhow::Result<Theme>;

    fn store(&self, theme: Theme);
}

// the single theme value for the app
//
// the store is owned by whoever provides it (a scoped context in the
// webapp) and handed down explicitly rather than living in a global
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeStore {
    theme: Theme,
}

impl ThemeStore {
    pub fn new(theme: Theme) -> Self {
        ThemeStore { theme }
    }

    pub fn load(storage: &impl ThemeStorage) -> Self {
        let theme = match storage.load() {
            Ok(theme) => theme,
            Err(err) => {
                debug!("no persisted theme, using default: {err}");
                Theme::default()
            }
        };

        ThemeStore { theme }
    }

    pub fn get_theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        resolve_palette(self.theme)
    }

    pub fn toggle_theme(&mut self, storage: &impl ThemeStorage) -> Theme {
        self.theme = self.theme.toggled();

        debug!(theme = %self.theme, "theme toggled");
        storage.store(self.theme);

        self.theme
    }
}
