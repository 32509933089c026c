//! Scroll-reveal wrapper.
//!
//! Wrapped content is marked for the client script to fade in once it
//! enters the viewport. The hidden starting state only applies when the
//! script has run (`html.js`), so content stays visible without it.

use maud::{Markup, html};

/// Wrap `children` for reveal with a delay in seconds.
pub fn reveal(delay: f32, children: &Markup) -> Markup {
    reveal_with("", delay, children)
}

/// [`reveal`] with extra classes on the wrapper.
pub fn reveal_with(class: &str, delay: f32, children: &Markup) -> Markup {
    let class = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {class}")
    };
    html! {
        div class=(class) data-reveal=""
            style=[(delay > 0.0).then(|| format!("--reveal-delay: {delay:.2}s"))] {
            (children)
        }
    }
}

/// Delay for the `index`th item of a staggered grid.
pub fn stagger(index: usize, step: f32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let i = index as f32;
    i * step
}
