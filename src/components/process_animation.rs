use crate::process::{
    DefaultMotion, Metrics, MotionPolicy, ParticleField, PendingConversion, Phase, ProductId,
};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::time::Duration;

const ICE_CRYSTALS: usize = 20;

/// Fresh RNG for particle placement, seeded from the browser's Math.random.
fn scatter_rng() -> Pcg32 {
    Pcg32::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Schedule the primary-drying conversion. The field rejects it if the phase
/// has moved on by the time it fires.
fn schedule_conversion(field: RwSignal<ParticleField>, conversion: PendingConversion) -> Option<TimeoutHandle> {
    let token = conversion.token;
    let delay = Duration::from_secs_f64(conversion.delay_ms / 1000.0);
    match set_timeout_with_handle(
        move || {
            field.try_update(|f| f.apply_conversion(token));
        },
        delay,
    ) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("Could not schedule vapor conversion: {:?}", e);
            None
        }
    }
}

#[component]
pub fn ProcessAnimation(
    phase: Memo<Phase>,
    /// Transition token from the engine
    epoch: Memo<u64>,
    speed: Memo<f64>,
    product: Memo<ProductId>,
    metrics: Memo<Metrics>,
) -> impl IntoView {
    let field = create_rw_signal(ParticleField::generate(&mut scatter_rng()));
    let timer = store_value(None::<TimeoutHandle>);

    let crystals: Vec<(f64, f64)> = {
        let mut rng = scatter_rng();
        (0..ICE_CRYSTALS)
            .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect()
    };

    // Re-project the population on every transition; regenerate it when the product changes
    create_effect(move |prev: Option<ProductId>| {
        let product_id = product.get();
        let token = epoch.get();
        let current = phase.get();
        let speed = speed.get_untracked();

        if let Some(handle) = timer.get_value() {
            handle.clear();
            timer.set_value(None);
        }

        let regenerate = prev.is_some_and(|p| p != product_id);
        let pending = field
            .try_update(|f| {
                if regenerate {
                    f.regenerate(&mut scatter_rng(), current, token, speed)
                } else {
                    f.enter_phase(current, token, speed)
                }
            })
            .flatten();

        if let Some(conversion) = pending {
            timer.set_value(schedule_conversion(field, conversion));
        }
        product_id
    });

    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
    });

    let molecules = move || {
        let speed = speed.get();
        field.with(|f| {
            f.particles()
                .iter()
                .map(|p| {
                    let motion = DefaultMotion.motion(p.state, speed);
                    let offset = (p.id % 10) as f64 / 10.0;
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; --amp: {:.1}; animation: {}",
                        p.x,
                        p.y,
                        motion.amplitude,
                        motion.css(offset),
                    );
                    view! { <span class=format!("molecule {}", p.state.key()) style=style></span> }
                })
                .collect_view()
        })
    };

    view! {
        <div class="process-animation">
            <div class="chamber">
                <div class="vacuum-chamber">
                    <span class="chamber-label">"Vacuum Chamber"</span>

                    <div class=move || format!("sample product--{}", product.get().product().color)>
                        <div class="sample-label">
                            {move || product.get().product().glyph}
                            <div>{move || product.get().product().example()}</div>
                        </div>
                        <div class="molecules">{molecules}</div>
                    </div>

                    <Show when=move || phase.get().is_drying()>
                        <span class="pump-indicator">"Vacuum Pump Active"</span>
                        <div class="heat-source"><div class="heat-glow"></div></div>
                    </Show>

                    <Show when=move || phase.get() == Phase::Freezing>
                        <div class="ice-crystals">
                            {crystals
                                .iter()
                                .enumerate()
                                .map(|(i, (x, y))| {
                                    let style = format!(
                                        "left: {:.1}%; top: {:.1}%; animation-delay: {:.1}s",
                                        x,
                                        y,
                                        i as f64 * 0.1,
                                    );
                                    view! { <span class="crystal" style=style></span> }
                                })
                                .collect_view()}
                        </div>
                    </Show>

                    <Show when=move || phase.get() == Phase::Complete>
                        <span class="preserved-badge">"\u{2713} Structure Preserved"</span>
                    </Show>
                </div>

                <div class="condenser">
                    <div class="condenser-label">"Condenser"</div>
                    <div class="condenser-temp">"-80°C"</div>
                    <div class="condenser-ice" class:collecting=move || phase.get().is_drying()></div>
                </div>
            </div>

            <div class="process-info">
                <div class="readings">
                    <div>
                        <span class="reading-label">"Temperature: "</span>
                        <span class=move || metrics.with(|m| m.temperature_tone.class())>
                            {move || metrics.with(|m| m.temperature_reading())}
                        </span>
                    </div>
                    <div>
                        <span class="reading-label">"Pressure: "</span>
                        <span class="reading" class:vacuum=move || metrics.with(|m| m.under_vacuum)>
                            {move || metrics.with(|m| m.pressure_reading())}
                        </span>
                    </div>
                </div>
                <p class="phase-description">{move || metrics.with(|m| m.description_text.clone())}</p>

                <Show when=move || phase.get() == Phase::Complete>
                    <div class="benefits-card">
                        <h4>{move || format!("Freeze-Dried {} Benefits:", product.get().product().example())}</h4>
                        <ul class="benefit-grid">
                            <li>"95%+ nutrition retained"</li>
                            <li>"Original taste preserved"</li>
                            <li>"80% weight reduction"</li>
                            <li>"2-25 year shelf life"</li>
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
