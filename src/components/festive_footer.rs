use leptos::prelude::*;

use crate::festive::footer_line;

#[component]
pub fn FestiveFooter() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="festive-footer">
            <p>{footer_line(year)}</p>
            <p class="footer-wish">"Merry Christmas & Happy Holidays! 🎅✨"</p>
        </footer>
    }
}
