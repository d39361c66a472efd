use crate::process::{Metrics, Phase, ProductId};
use leptos::*;

/// Where a phase sits relative to the current one on the timeline.
fn timeline_class(phase: Phase, current: Phase) -> &'static str {
    if phase == current {
        "timeline-dot active"
    } else if phase < current {
        "timeline-dot done"
    } else {
        "timeline-dot"
    }
}

#[component]
pub fn PhaseIndicator(phase: Memo<Phase>, product: Memo<ProductId>, metrics: Memo<Metrics>) -> impl IntoView {
    let example = move || product.get().product().example();

    let timeline = Phase::ALL
        .iter()
        .map(|&p| {
            view! {
                <span class=move || timeline_class(p, phase.get()) title=p.label()></span>
                {(p != Phase::LAST).then(|| view! {
                    <span class="timeline-bar" class:done=move || p < phase.get()></span>
                })}
            }
        })
        .collect_view();

    view! {
        <div class=move || format!("phase-indicator phase--{}", phase.get().key())>
            <div class="phase-heading">
                <span class="phase-icon">{move || phase.get().icon()}</span>
                <div>
                    <h3>{move || metrics.with(|m| m.headline)}</h3>
                    <p>{move || metrics.with(|m| m.summary.clone())}</p>
                </div>
            </div>

            <div class="timeline">
                <div class="timeline-title">"Process Timeline"</div>
                <div class="timeline-track">{timeline}</div>
                <div class="timeline-step">
                    {move || format!("Step {} of {}", phase.get().index() + 1, Phase::ALL.len())}
                </div>
            </div>

            <div class="details-card">
                <h4>{move || format!("{} Processing Details", example())}</h4>
                <ul>
                    {move || metrics.with(|m| {
                        let conditions = m
                            .detail_temperature
                            .map(|t| view! { <li>"Temperature: " {t}</li> });
                        let pressure = m
                            .detail_pressure
                            .map(|p| view! { <li>"Pressure: " {p}</li> });
                        let facts = m
                            .product_facts
                            .iter()
                            .map(|f| {
                                let (name, value) = (f.name, f.value.clone());
                                view! { <li>{name} ": " {value}</li> }
                            })
                            .collect_view();
                        view! { {conditions} {pressure} {facts} }
                    })}
                    <Show when=move || phase.get() == Phase::Complete>
                        <li>"Ready for packaging"</li>
                    </Show>
                </ul>
            </div>

            <Show when=move || metrics.with(|m| !m.benefits.is_empty())>
                <div class="why-card">
                    <h4>{move || format!("Why Freeze-Dry {}?", example())}</h4>
                    <ul>
                        {move || metrics.with(|m| {
                            m.benefits.iter().map(|b| view! { <li>{*b}</li> }).collect_view()
                        })}
                    </ul>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_classes() {
        assert_eq!(timeline_class(Phase::Initial, Phase::PrimaryDrying), "timeline-dot done");
        assert_eq!(timeline_class(Phase::PrimaryDrying, Phase::PrimaryDrying), "timeline-dot active");
        assert_eq!(timeline_class(Phase::Complete, Phase::PrimaryDrying), "timeline-dot");
    }
}
