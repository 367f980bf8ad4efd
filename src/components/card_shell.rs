//! Card Shell Components
//!
//! Layout-only building blocks for the card.

use leptos::prelude::*;

#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! {
        <section class=format!("card {}", class)>
            {children()}
        </section>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <header class="card-header">{children()}</header> }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h1 class="card-title">{children()}</h1> }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <p class="card-description">{children()}</p> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}

#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! { <footer class="card-footer">{children()}</footer> }
}
