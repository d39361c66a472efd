pub mod components;
pub mod pages;
pub mod process;
pub mod storage;

use components::{App, NavBar};
use leptos::*;
use leptos_router::*;
use pages::{NotFoundPage, ProcessPage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Leptos 0.6 router does not always re-render `<Routes>` on browser
/// back/forward, so popstate reloads the page. Product and speed survive
/// through localStorage.
fn setup_popstate_reload() {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::warn!("Reload on popstate failed: {:?}", e);
            }
        }
    }) as Box<dyn Fn(web_sys::Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The animation hit an error. Try refreshing the page or resetting to defaults."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        storage::clear_settings();
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reset & Reload"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

#[component]
fn RootInner() -> impl IntoView {
    view! {
        <Router>
            <NavBar/>
            <Routes>
                <Route path="/" view=App/>
                <Route path="/process" view=ProcessPage/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already initialised: {}", e).into());
    }
    log::info!("Sublimate starting");
    setup_popstate_reload();
    mount_to_body(Root);
}
