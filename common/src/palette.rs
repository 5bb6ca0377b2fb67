use crate::theme::Theme;

// colour families, as (main, lighter variant, darker variant)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorGroup {
    pub main: &'static str,
    pub variant_light: &'static str,
    pub variant_dark: &'static str,
}

// colours drawn on top of the named surfaces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnColors {
    pub on_primary: &'static str,
    pub on_secondary: &'static str,
    pub on_background: &'static str,
    pub on_surface: &'static str,
    pub on_error: &'static str,
}

// the full material-style colour scheme for one theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTheme {
    pub primary: ColorGroup,
    pub secondary: ColorGroup,
    pub background: &'static str,
    pub surface: &'static str,
    pub error: &'static str,
    pub placeholder: &'static str,
    pub on: OnColors,
}

const PRIMARY: ColorGroup = ColorGroup {
    main: "#fff176",
    variant_light: "#ffffa8",
    variant_dark: "#cabf45",
};

const SECONDARY: ColorGroup = ColorGroup {
    main: "#ff8a65",
    variant_light: "#ffbb93",
    variant_dark: "#c75b39",
};

pub const LIGHT_COLORS: ColorTheme = ColorTheme {
    primary: PRIMARY,
    secondary: SECONDARY,
    background: "#FFFFFF",
    surface: "#FFFFFF",
    error: "#B00020",
    placeholder: "#F0F0F0",
    on: OnColors {
        on_primary: "#000000",
        on_secondary: "#000000",
        on_background: "#000000",
        on_surface: "#000000",
        on_error: "#FFFFFF",
    },
};

pub const DARK_COLORS: ColorTheme = ColorTheme {
    primary: PRIMARY,
    secondary: SECONDARY,
    background: "#0e0e0e",
    surface: "#161616",
    error: "#B00020",
    placeholder: "#F0F0F0",
    on: OnColors {
        on_primary: "#FFFFFF",
        on_secondary: "#FFFFFF",
        on_background: "#FFFFFF",
        on_surface: "#FFFFFF",
        on_error: "#FFFFFF",
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub error: &'static str,
    pub links: &'static str,
}

// the handful of colours the site components actually read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub header: &'static str,
    pub background: &'static str,
    pub navbar: &'static str,
    pub text: TextColors,
}

const fn site_palette(colors: &ColorTheme, links: &'static str) -> Palette {
    Palette {
        header: colors.surface,
        background: colors.background,
        navbar: colors.surface,
        text: TextColors {
            primary: colors.on.on_primary,
            secondary: "grey",
            error: colors.error,
            links,
        },
    }
}

pub const LIGHT_PALETTE: Palette = site_palette(&LIGHT_COLORS, "blue");
pub const DARK_PALETTE: Palette = site_palette(&DARK_COLORS, "#71a2c7");

/// Look up the palette for a theme. Nothing but the theme feeds into it.
pub fn resolve_palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT_PALETTE,
        Theme::Dark => DARK_PALETTE,
    }
}

impl Palette {
    /// Render the palette as CSS custom properties on `:root`.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  --header: {};\n  --background: {};\n  --navbar: {};\n  --text-primary: {};\n  --text-secondary: {};\n  --text-error: {};\n  --text-links: {};\n}}\n",
            self.header,
            self.background,
            self.navbar,
            self.text.primary,
            self.text.secondary,
            self.text.error,
            self.text.links,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_idempotent() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(resolve_palette(theme), resolve_palette(theme));
        }
    }

    #[test]
    fn dark_palette() {
        let palette = resolve_palette(Theme::Dark);

        assert_eq!(palette.header, "#161616");
        assert_eq!(palette.background, "#0e0e0e");
        assert_eq!(palette.navbar, "#161616");
        assert_eq!(palette.text.primary, "#FFFFFF");
        assert_eq!(palette.text.links, "#71a2c7");
    }

    #[test]
    fn light_palette() {
        let palette = resolve_palette(Theme::Light);

        assert_eq!(palette.background, "#FFFFFF");
        assert_eq!(palette.text.primary, "#000000");
        assert_eq!(palette.text.secondary, "grey");
        assert_eq!(palette.text.error, "#B00020");
        assert_eq!(palette.text.links, "blue");
    }

    #[test]
    fn palette_derives_from_color_theme() {
        for (theme, colors) in [(Theme::Light, &LIGHT_COLORS), (Theme::Dark, &DARK_COLORS)] {
            let palette = resolve_palette(theme);

            assert_eq!(palette.header, colors.surface);
            assert_eq!(palette.background, colors.background);
            assert_eq!(palette.text.primary, colors.on.on_primary);
        }
    }

    #[test]
    fn css_variables_carry_every_colour() {
        let css = resolve_palette(Theme::Dark).css_variables();

        assert!(css.starts_with(":root {"));
        assert!(css.contains("--background: #0e0e0e;"));
        assert!(css.contains("--text-links: #71a2c7;"));
    }
}
