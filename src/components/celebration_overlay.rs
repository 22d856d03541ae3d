//! Celebration Overlay Component
//!
//! Shown while a deletion is being celebrated. Confetti is regenerated every
//! time the overlay opens.

use leptos::prelude::*;

use crate::festive::{confetti_pieces, CONFETTI_COUNT};
use crate::store::{use_app_store, TodoStateStoreFields};

#[component]
pub fn CelebrationOverlay() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.celebration().get().is_active()>
            <div class="celebration-overlay">
                <div class="celebration-message">
                    <h2>"Task Complete! 🎉"</h2>
                    <p>"Great job! 🎄✨"</p>
                    <div class="confetti-layer">
                        {confetti_pieces(CONFETTI_COUNT, js_sys::Math::random)
                            .into_iter()
                            .map(|piece| view! { <div class="confetti" style=piece.style()></div> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
