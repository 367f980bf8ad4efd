//! Confetti Overlay Component
//!
//! Full-viewport burst of falling pieces. With `repeat` off each piece
//! falls once and stays out of view.

use leptos::prelude::*;
use leptos_viewport::ViewportSize;

use crate::config::ConfettiConfig;
use crate::confetti::layout_pieces;

#[component]
pub fn Confetti(
    config: ConfettiConfig,
    #[prop(into)] viewport: Signal<ViewportSize>,
) -> impl IntoView {
    // Laid out once per burst; resizing only rescales the container
    let size = viewport.get_untracked();
    let (_, fall_px) = size.to_px();
    let pieces = layout_pieces(&config, size.width);
    let repeat = config.repeat;

    let container_style = move || {
        let (width, height) = viewport.get().to_px();
        format!("width: {}px; height: {}px;", width, height)
    };

    view! {
        <div class="confetti-overlay" style=container_style aria-hidden="true">
            {pieces
                .into_iter()
                .map(|piece| view! { <span class="confetti-piece" style=piece.style(fall_px, repeat)></span> })
                .collect_view()}
        </div>
    }
}
