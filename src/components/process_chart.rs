use crate::process::{pressure_series, temperature_series, ChartSeries, Phase, CHART_LEFT, CHART_RIGHT};
use leptos::*;

/// One SVG panel of the temperature/pressure profile.
#[component]
fn SeriesChart(
    title: &'static str,
    /// Modifier class for the line and marker colour
    kind: &'static str,
    series: Memo<ChartSeries>,
) -> impl IntoView {
    view! {
        <div class=format!("chart-panel {}", kind)>
            <h4>{title}</h4>
            <svg viewBox="0 0 300 200" class="profile-chart" role="img">
                <title>{title}</title>
                {move || series.with(|s| {
                    s.grid
                        .iter()
                        .map(|g| {
                            let label = g.label.clone();
                            view! {
                                <g>
                                    <line x1=CHART_LEFT y1=g.y x2=CHART_RIGHT y2=g.y class="grid-line"/>
                                    <text x="25" y=g.y + 4.0 class="axis-label" text-anchor="end">{label}</text>
                                </g>
                            }
                        })
                        .collect_view()
                })}

                <polyline class="series-line" points=move || series.with(|s| s.polyline())/>

                {move || series.with(|s| {
                    s.points
                        .iter()
                        .map(|p| {
                            view! {
                                <g>
                                    <circle
                                        cx=p.x
                                        cy=p.y
                                        r=p.radius()
                                        class="series-point"
                                        class:current=p.current
                                    />
                                    <text x=p.x y="195" class="axis-label" text-anchor="middle">{p.label}</text>
                                </g>
                            }
                        })
                        .collect_view()
                })}
            </svg>
        </div>
    }
}

#[component]
pub fn ProcessChart(phase: Memo<Phase>) -> impl IntoView {
    let temperature = create_memo(move |_| temperature_series(phase.get()));
    let pressure = create_memo(move |_| pressure_series(phase.get()));

    view! {
        <div class="process-chart">
            <h3>"Temperature & Pressure Profile"</h3>
            <div class="chart-grid">
                <SeriesChart title="Temperature (°C)" kind="temperature" series=temperature/>
                <SeriesChart title="Pressure (mbar)" kind="pressure" series=pressure/>
            </div>

            <div class="principles">
                <h4>"Key Scientific Principles"</h4>
                <div class="principle-cards">
                    <div class="card">
                        <h5>"Triple Point of Water"</h5>
                        <p>
                            "At 611.657 Pa and 0.01°C, water can exist as solid, liquid, and gas simultaneously. "
                            "Freeze drying exploits this by operating below the triple point pressure."
                        </p>
                    </div>
                    <div class="card">
                        <h5>"Sublimation Process"</h5>
                        <p>
                            "Ice transitions directly to vapor without melting, preserving cellular structure "
                            "and preventing damage from liquid water formation."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
