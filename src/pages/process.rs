use crate::process::Phase;
use leptos::*;
use leptos_router::A;

struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    details: [&'static str; 4],
}

const STEPS: [Step; 4] = [
    Step {
        icon: "\u{1F321}",
        title: "Freezing Phase",
        description: "Product is frozen to -40°C to -80°C, creating ice crystals that preserve cellular structure.",
        details: [
            "Rapid freezing prevents large ice crystal formation",
            "Maintains product integrity and texture",
            "Temperature controlled environment",
            "Typical duration: 2-4 hours",
        ],
    },
    Step {
        icon: "\u{26A1}",
        title: "Primary Drying (Sublimation)",
        description: "Frozen water sublimes directly from solid to vapor under vacuum and controlled heat.",
        details: [
            "Vacuum pressure: 0.1-0.3 mbar",
            "Temperature: -10°C to -30°C",
            "Removes 95% of water content",
            "Duration: 12-48 hours depending on product",
        ],
    },
    Step {
        icon: "\u{1F4A7}",
        title: "Secondary Drying (Desorption)",
        description: "Removes remaining bound water molecules through controlled temperature increase.",
        details: [
            "Temperature gradually increased to 20-60°C",
            "Removes final 2-5% of water",
            "Ensures product stability",
            "Duration: 4-12 hours",
        ],
    },
    Step {
        icon: "\u{1F4E6}",
        title: "Packaging & Storage",
        description: "Products are packaged in moisture-proof containers in controlled atmosphere.",
        details: [
            "Nitrogen or inert gas atmosphere",
            "Moisture-proof packaging materials",
            "Extended shelf life: 2-25 years",
            "Maintains nutritional value",
        ],
    },
];

const TIMELINE: [&str; 4] = [
    "0-4 hours: Freezing",
    "4-52 hours: Primary Drying",
    "52-64 hours: Secondary Drying",
    "64+ hours: Packaging",
];

/// Simulator link that opens directly on the phase a step describes.
/// Packaging has no phase of its own, so it lands on the finished state.
fn simulator_href(step: usize) -> String {
    let phase = Phase::from_index(step + 1).unwrap_or(Phase::LAST);
    format!("/?phase={}", phase.key())
}

#[component]
pub fn ProcessPage() -> impl IntoView {
    let steps = STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            view! {
                <article class="card process-step">
                    <div class="step-icon">{step.icon}</div>
                    <div class="step-body">
                        <span class="step-badge">{format!("Step {}", i + 1)}</span>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                        <ul>
                            {step.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                        </ul>
                        <A href=simulator_href(i) class="step-link">"See it in the simulator"</A>
                    </div>
                </article>
            }
        })
        .collect_view();

    let timeline = TIMELINE
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            view! {
                <li class="process-timeline-entry" class:left=i % 2 == 0 class:right=i % 2 == 1>
                    <span class="process-timeline-dot"></span>
                    <span class="process-timeline-text">{*entry}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <main class="container process-page">
            <header>
                <h1>"The Freeze Drying Process"</h1>
                <p class="tagline">
                    "Lyophilization follows a precise four-stage process to preserve products while "
                    "maintaining their quality, nutritional value, and structural integrity."
                </p>
            </header>

            <nav class="back-nav">
                <A href="/">"< Back to the simulator"</A>
            </nav>

            <section class="process-steps">{steps}</section>

            <section class="process-timeline">
                <h2>"Typical Process Timeline"</h2>
                <ol>{timeline}</ol>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_links_follow_phase_order() {
        assert_eq!(simulator_href(0), "/?phase=freezing");
        assert_eq!(simulator_href(1), "/?phase=primary-drying");
        assert_eq!(simulator_href(2), "/?phase=secondary-drying");
        assert_eq!(simulator_href(3), "/?phase=complete");
    }

    #[test]
    fn test_steps_and_timeline_line_up() {
        assert_eq!(STEPS.len(), TIMELINE.len());
        assert!(TIMELINE[1].contains("Primary Drying"));
    }
}
