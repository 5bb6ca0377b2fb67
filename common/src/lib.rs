pub mod breakpoints;
pub mod config;
pub mod markdown;
pub mod palette;
pub mod site;
pub mod theme;

pub use breakpoints::{BREAKPOINTS, Breakpoint, Breakpoints, MediaQueries, resolve_breakpoints};
pub use palette::{Palette, resolve_palette};
pub use theme::{Theme, ThemeStorage, ThemeStore};
