//! Birthday Card Component
//!
//! Candles, balloons, a celebrate button and the confetti overlay.

use leptos::prelude::*;
use leptos_viewport::track_viewport;

use crate::config::CardConfig;
use crate::context::CardContext;
use crate::state::CardStateStoreFields;
use super::{
    BalloonRow, Button, CandleRow, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Confetti,
};

#[component]
pub fn BirthdayCard(config: CardConfig) -> impl IntoView {
    let ctx = CardContext::new(&config);
    provide_context(ctx);
    let store = ctx.store;

    track_viewport(move |size| ctx.resize(size));

    Effect::new(move |_| {
        if store.is_overlay_visible().get() {
            tracing::info!(
                lit = store.lit_count().get_untracked(),
                popped = store.popped_count().get_untracked(),
                "overlay shown"
            );
        }
    });

    let title = config.title();
    let recipient = config.recipient_line();
    let date = config.date_line();
    let confetti = config.confetti.clone();
    let progress = move || {
        format!(
            "{} / {} candles lit · {} / {} balloons popped",
            store.lit_count().get(),
            store.total_candles().get(),
            store.popped_count().get(),
            store.total_balloons().get(),
        )
    };

    view! {
        <div class="birthday-card-page">
            <Show when=move || store.is_overlay_visible().get()>
                <Confetti
                    config=confetti.clone()
                    viewport=Signal::derive(move || store.viewport().get())
                />
            </Show>

            <Card class="birthday-card">
                <CardHeader>
                    <CardTitle>{title}</CardTitle>
                    {recipient.map(|name| view! { <CardDescription>{name}</CardDescription> })}
                    {date.map(|date| view! { <p class="card-date">{date}</p> })}
                </CardHeader>

                <CardContent>
                    <CandleRow />
                    <div class="cake">
                        <div class="cake-icing"></div>
                        <div class="cake-layer"></div>
                        <div class="cake-layer"></div>
                    </div>
                    <BalloonRow />
                </CardContent>

                <CardFooter>
                    <Button
                        class="celebrate-btn"
                        disabled=Signal::derive(move || store.is_celebrating().get())
                        on_click=move |_| {
                            ctx.celebrate();
                        }
                    >
                        {move || if store.is_celebrating().get() { "Celebrating..." } else { "Celebrate!" }}
                    </Button>
                    <p class="card-progress">{progress}</p>
                    <Show when=move || store.is_overlay_visible().get()>
                        <p class="card-message">"Make a wish! 🎉"</p>
                    </Show>
                </CardFooter>
            </Card>
        </div>
    }
}
