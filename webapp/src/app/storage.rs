use gloo_console::{error as console_error, warn as console_warn};
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

use common::theme::{Theme, ThemeStorage};

pub const THEME_KEY: &str = "theme";

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::get(key.clone()).map_err(|err| {
        console_warn!(format!("Failed to fetch local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// the theme survives reloads through local storage
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStorage;

impl ThemeStorage for LocalThemeStorage {
    fn load(&self) -> anyhow::Result<Theme> {
        get_local_storage(THEME_KEY)
    }

    fn store(&self, theme: Theme) {
        set_local_storage(THEME_KEY, theme)
    }
}
