//! Button Component

use leptos::prelude::*;

/// Styled button
///
/// # Arguments
/// * `class` - Extra CSS classes appended to `btn`
/// * `disabled` - Reactive disabled state
/// * `on_click` - Callback run on click (not run while disabled)
#[component]
pub fn Button(
    #[prop(into, optional)] class: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=format!("btn {}", class)
            disabled=move || disabled.get()
            on:click=move |ev| {
                ev.stop_propagation();
                if !disabled.get_untracked() {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
