// static design tokens; the theme-dependent colours come from Palette::css_variables
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Accents, shared by both themes */
  --accent: #ff8a65;
  --accent-dark: #c75b39;
  --accent-light: #ffbb93;
  --highlight: #fff176;

  /* Layout */
  --header-height: 70px;
  --content-width: 1275px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 10px rgba(0, 0, 0, 0.1);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
