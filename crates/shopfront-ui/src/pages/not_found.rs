use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found" style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to the shop"</a>
        </div>
    }
}
