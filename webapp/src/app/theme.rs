use dioxus::prelude::*;
use tracing::debug;

use crate::app::storage::LocalThemeStorage;
use common::{Palette, Theme, ThemeStore};

// the theme store lives in a signal owned by the app root and is handed to the
// rest of the tree as context; writing through it re-renders every reader
pub fn use_theme_provider() -> Signal<ThemeStore> {
    use_context_provider(|| {
        let store = ThemeStore::load(&LocalThemeStorage);
        debug!(theme = %store.get_theme(), "restored theme");
        Signal::new(store)
    })
}

pub fn use_theme_store() -> Signal<ThemeStore> {
    use_context::<Signal<ThemeStore>>()
}

pub fn use_theme() -> Theme {
    use_theme_store().read().get_theme()
}

pub fn use_palette() -> Palette {
    use_theme_store().read().palette()
}

pub fn toggle_theme(mut store: Signal<ThemeStore>) {
    store.write().toggle_theme(&LocalThemeStorage);
}
