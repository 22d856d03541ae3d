//! Snow Scene Component
//!
//! Fixed background picture with a falling-snow overlay. Purely decorative.

use leptos::prelude::*;

#[component]
pub fn SnowScene() -> impl IntoView {
    view! {
        <div class="scene-backdrop">
            <div class="scene-picture"></div>
        </div>
        <div class="snowfall"></div>
    }
}
