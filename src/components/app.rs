use crate::components::{ControlPanel, PhaseIndicator, ProcessAnimation, ProcessChart, ProductSelector};
use crate::process::{resolve, Phase, ProductId};
use crate::storage::{load_settings, save_settings, StoredSettings};
use leptos::*;
use leptos_router::use_query_map;

#[component]
pub fn App() -> impl IntoView {
    // Engine state lives here and nowhere else; children get memos and callbacks
    let engine = create_rw_signal(load_settings().to_engine());

    // `?phase=primary-drying` opens the page at a given phase
    let query = use_query_map();
    let linked_phase = query.with_untracked(|q| q.get("phase").cloned());
    if let Some(key) = linked_phase {
        match key.parse::<Phase>() {
            Ok(phase) => engine.update(|e| e.jump_to(phase)),
            Err(e) => log::warn!("Ignoring phase link: {}", e),
        }
    }

    let phase = create_memo(move |_| engine.with(|e| e.phase()));
    let epoch = create_memo(move |_| engine.with(|e| e.epoch()));
    let speed = create_memo(move |_| engine.with(|e| e.speed()));
    let product = create_memo(move |_| engine.with(|e| e.product_id()));

    let metrics = create_memo(move |_| resolve(phase.get(), product.get()));

    let can_advance = Signal::derive(move || engine.with(|e| e.can_advance()));
    let can_retreat = Signal::derive(move || engine.with(|e| e.can_retreat()));
    let step_label = Signal::derive(move || engine.with(|e| e.step_label()));

    let on_next = Callback::new(move |_: ()| engine.update(|e| e.next()));
    let on_previous = Callback::new(move |_: ()| engine.update(|e| e.previous()));
    let on_jump = Callback::new(move |p: Phase| engine.update(|e| e.jump_to(p)));
    let on_reset = Callback::new(move |_: ()| engine.update(|e| e.reset()));
    let on_speed = Callback::new(move |v: f64| engine.update(|e| e.set_speed(v)));
    let on_select = Callback::new(move |id: ProductId| engine.update(|e| e.select_product(id)));

    // Only product and speed are persisted, so phase changes never reach storage
    let stored = create_memo(move |_| engine.with(StoredSettings::from_engine));
    create_effect(move |_| save_settings(&stored.get()));

    view! {
        <main class="container">
            <header>
                <h1>"Freeze Drying Process Animation"</h1>
                <p class="tagline">"Interactive visualization of lyophilization - the science of sublimation"</p>
            </header>

            <section class="intro">
                <h2>"From Fresh to Shelf-Stable"</h2>
                <p>
                    "Freeze drying removes water without ever letting it melt. The product is frozen solid, "
                    "then the chamber is pumped down to a deep vacuum and gently heated so the ice "
                    "sublimates, turning straight into vapor that is caught on a cold condenser."
                </p>
                <p>
                    "Pick a product, then step through the five phases to watch its water change state "
                    "while the shelf temperature and chamber pressure follow the cycle."
                </p>
            </section>

            <section class="interactive">
                <ProductSelector product=product on_select=on_select/>

                <ProcessAnimation
                    phase=phase
                    epoch=epoch
                    speed=speed
                    product=product
                    metrics=metrics
                />

                <div class="panel-grid">
                    <PhaseIndicator phase=phase product=product metrics=metrics/>
                    <ControlPanel
                        phase=phase
                        speed=speed
                        can_advance=can_advance
                        can_retreat=can_retreat
                        step_label=step_label
                        on_next=on_next
                        on_previous=on_previous
                        on_jump=on_jump
                        on_reset=on_reset
                        on_speed=on_speed
                    />
                </div>

                <ProcessChart phase=phase/>
            </section>

            <footer>
                <p class="disclaimer">
                    "Temperatures, pressures and durations are typical values for illustration. "
                    "Real cycles are tuned per product, load and equipment."
                </p>
                <p>"Runs entirely in your browser · No cookies · No personal data"</p>
            </footer>
        </main>
    }
}
