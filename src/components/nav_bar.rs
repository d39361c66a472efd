use leptos::*;
use leptos_router::{use_location, A};

#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let link_class = move |href: &'static str| {
        if pathname() == href {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"\u{2744} Sublimate"</A>
                <div class="nav-links">
                    <A href="/" class=move || link_class("/")>"Simulator"</A>
                    <A href="/process" class=move || link_class("/process")>"The Process"</A>
                </div>
            </div>
        </nav>
    }
}
