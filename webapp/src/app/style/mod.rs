use constcat::concat;

use common::{BREAKPOINTS, Breakpoint};

mod components;
mod content;
mod variables;

pub use components::BASE_COMPONENTS;
pub use content::CONTENT_STYLES;
pub use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    CONTENT_STYLES,
    r#"
/* Application shell */
.site {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  background-color: var(--background);
  color: var(--text-primary);
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.site-main {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
}

.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  display: flex;
  justify-content: center;
  margin: var(--space-2);
  transition: top var(--transition-normal) ease;
}

.nav-container {
  width: 70%;
  max-width: var(--content-width);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-weight: 700;
  font-size: 1.1rem;
}

.nav-links {
  display: flex;
  align-items: center;
  justify-content: center;
  flex-grow: 1;
  max-width: 60%;
  min-width: 420px;
  height: 50px;
  margin: 0 var(--space-1);
  padding: 10px 30px;
  border-radius: 100px;
  background-color: var(--header);
  box-shadow: var(--shadow-md);
}

.nav-link {
  margin: 0 var(--space-6);
  color: var(--text-primary);
}

.nav-link.active {
  color: red;
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.mobile-menu {
  position: fixed;
  top: var(--header-height);
  left: 0;
  right: 0;
  bottom: 0;
  z-index: 999;
  display: flex;
  flex-direction: column;
  padding: var(--space-6);
  background-color: var(--background);
}

.mobile-menu .nav-link {
  margin: var(--space-4) 0;
}

.site-footer {
  display: flex;
  justify-content: center;
  align-items: center;
  flex-wrap: wrap;
  padding: var(--space-4);
  background-color: var(--header);
}

.site-footer a {
  margin: var(--space-4);
  color: var(--text-secondary);
  font-size: 14px;
}
"#
);

// breakpoint-dependent rules, generated from the same thresholds the
// components resolve against; wider breakpoints first so narrower ones win
pub fn responsive_styles() -> String {
    let sm = BREAKPOINTS.max_width_query(Breakpoint::Sm);
    let md = BREAKPOINTS.max_width_query(Breakpoint::Md);

    format!(
        r#"
@media {md} {{
  .card-grid {{ grid-template-columns: repeat(2, minmax(0, 1fr)); }}
}}

@media {sm} {{
  .nav-container {{ width: 100%; }}
  .nav-links {{ display: none; }}
  .card-grid {{ grid-template-columns: minmax(0, 1fr); }}
  .site-footer {{ flex-direction: column; }}
  .page-title {{ font-size: 2rem; }}
}}
"#
    )
}
