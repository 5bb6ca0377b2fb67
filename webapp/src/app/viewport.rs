use dioxus::prelude::*;
use tracing::warn;

use common::{BREAKPOINTS, MediaQueries};

// current viewport width in pixels, fed by a resize listener installed at the root
#[derive(Clone, Copy)]
pub struct Viewport(pub Signal<u32>);

// listener script; posts the width once on install and again on every resize
const RESIZE_LISTENER: &str = r#"
dioxus.send(window.innerWidth);
window.addEventListener("resize", () => dioxus.send(window.innerWidth));
"#;

fn window_width() -> Option<u32> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0) as u32)
}

pub fn use_viewport_provider() {
    // desktop layout until the browser says otherwise
    let Viewport(mut width) = use_context_provider(|| {
        Viewport(Signal::new(window_width().unwrap_or(BREAKPOINTS.lg + 1)))
    });

    use_future(move || async move {
        let mut listener = document::eval(RESIZE_LISTENER);

        loop {
            match listener.recv::<f64>().await {
                Ok(val) => {
                    let val = val.max(0.0) as u32;
                    if *width.peek() != val {
                        width.set(val);
                    }
                }
                Err(err) => {
                    warn!("viewport listener stopped: {err:?}");
                    break;
                }
            }
        }
    });
}

pub fn use_media_queries() -> MediaQueries {
    let Viewport(width) = use_context::<Viewport>();
    BREAKPOINTS.resolve(width())
}
