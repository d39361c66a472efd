use crate::process::{Phase, MAX_SPEED, MIN_SPEED, SPEED_STEP};
use leptos::*;

#[component]
pub fn ControlPanel(
    phase: Memo<Phase>,
    speed: Memo<f64>,
    #[prop(into)] can_advance: Signal<bool>,
    #[prop(into)] can_retreat: Signal<bool>,
    /// "Step n of 5"
    #[prop(into)] step_label: Signal<String>,
    on_next: Callback<()>,
    on_previous: Callback<()>,
    on_jump: Callback<Phase>,
    on_reset: Callback<()>,
    /// Receives the raw slider value; clamping is the engine's job
    on_speed: Callback<f64>,
) -> impl IntoView {
    let jump_buttons = Phase::ALL
        .iter()
        .map(|&p| {
            view! {
                <button
                    class="jump-button"
                    class:active=move || phase.get() == p
                    on:click=move |_| on_jump.call(p)
                >
                    <span class="jump-number">{p.index() + 1}</span>
                    <span class="jump-text">
                        <span class="jump-label">{p.label()}</span>
                        <span class="jump-duration">{p.duration()}</span>
                    </span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="controls">
            <h3>"Navigation Controls"</h3>

            <div class="step-buttons">
                <button
                    class="step-button"
                    disabled=move || !can_retreat.get()
                    on:click=move |_| on_previous.call(())
                >
                    "\u{23EE} Previous"
                </button>
                <span class="step-label">{move || step_label.get()}</span>
                <button
                    class="step-button"
                    disabled=move || !can_advance.get()
                    on:click=move |_| on_next.call(())
                >
                    "Next \u{23ED}"
                </button>
            </div>

            <button class="reset-button" on:click=move |_| on_reset.call(())>
                "\u{21BA} Reset to Beginning"
            </button>

            <div class="control-group">
                <label for="speed">"Animation Speed: " {move || format!("{}x", speed.get())}</label>
                <input
                    type="range"
                    id="speed"
                    min=MIN_SPEED
                    max=MAX_SPEED
                    step=SPEED_STEP
                    prop:value=move || speed.get()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            on_speed.call(v);
                        }
                    }
                />
            </div>

            <h4>"Jump to Phase"</h4>
            <div class="jump-list">{jump_buttons}</div>
        </div>
    }
}
