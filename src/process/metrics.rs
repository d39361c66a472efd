use super::phase::Phase;
use super::product::{Product, ProductId, CATALOG};
use std::collections::HashMap;
use std::sync::OnceLock;

/// One labelled line in the processing-details card.
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    pub name: &'static str,
    pub value: String,
}

impl Fact {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self { name, value: value.into() }
    }
}

/// Colour band for the temperature readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureTone {
    Cold,
    Neutral,
    Warm,
}

impl TemperatureTone {
    pub fn from_celsius(t: f64) -> Self {
        if t < 0.0 {
            TemperatureTone::Cold
        } else if t > 20.0 {
            TemperatureTone::Warm
        } else {
            TemperatureTone::Neutral
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            TemperatureTone::Cold => "reading cold",
            TemperatureTone::Neutral => "reading",
            TemperatureTone::Warm => "reading warm",
        }
    }
}

/// Everything the panels need to draw one (phase, product) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub phase: Phase,
    pub temperature: f64,
    pub pressure: f64,
    pub temperature_tone: TemperatureTone,
    /// Pressure readout is highlighted below 10 mbar.
    pub under_vacuum: bool,
    pub headline: &'static str,
    /// One-line summary for the phase indicator.
    pub summary: String,
    /// Narrative under the animation.
    pub description_text: String,
    pub detail_temperature: Option<&'static str>,
    pub detail_pressure: Option<&'static str>,
    pub product_facts: Vec<Fact>,
    /// Non-empty only once the cycle is complete.
    pub benefits: &'static [&'static str],
}

type FactTable = HashMap<(Phase, ProductId), Vec<Fact>>;

fn fact_table() -> &'static FactTable {
    static TABLE: OnceLock<FactTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::with_capacity(Phase::ALL.len() * CATALOG.len());
        for product in CATALOG.iter() {
            for phase in Phase::ALL {
                table.insert((phase, product.id), facts_for(phase, product));
            }
        }
        table
    })
}

fn facts_for(phase: Phase, product: &Product) -> Vec<Fact> {
    let id = product.id;
    match phase {
        Phase::Initial => vec![
            Fact::new(
                "Water content",
                match id {
                    ProductId::Meat => "70-75%",
                    ProductId::Fruit => "85-95%",
                    _ => "80-90%",
                },
            ),
            Fact::new("Structure", "Cellular integrity intact"),
            Fact::new("Nutrients", "All nutrients present"),
        ],
        Phase::Freezing => vec![
            Fact::new("Crystal size", "Small ice crystals formed"),
            Fact::new("Cell damage", "Minimal cell wall damage"),
            Fact::new(
                "Time required",
                format!("2-4 hours for {}", product.example().to_lowercase()),
            ),
        ],
        Phase::PrimaryDrying => vec![
            Fact::new("Water removed", "95% of water sublimated"),
            Fact::new("Shape retention", "Original shape maintained"),
            Fact::new(
                "Duration",
                match id {
                    ProductId::Meat => "24-48 hours",
                    _ => "12-24 hours",
                },
            ),
        ],
        Phase::SecondaryDrying => vec![
            Fact::new(
                "Final moisture",
                match id {
                    ProductId::Meat => "<2%",
                    _ => "<5%",
                },
            ),
            Fact::new("Binding removal", "Bound water eliminated"),
            Fact::new("Quality check", "Final quality verification"),
        ],
        Phase::Complete => vec![
            Fact::new(
                "Shelf life",
                match id {
                    ProductId::Fruit => "25+ years",
                    ProductId::Meat => "15+ years",
                    _ => "20+ years",
                },
            ),
            Fact::new("Weight", "80% lighter than original"),
            Fact::new("Nutrition", "97% of original nutrition"),
        ],
    }
}

fn summary(phase: Phase, example: &str) -> String {
    match phase {
        Phase::Initial => format!("Fresh {example} at room temperature"),
        Phase::Freezing => format!("Rapid cooling forms ice crystals in {example}"),
        Phase::PrimaryDrying => format!("Sublimation removes ice from {example}"),
        Phase::SecondaryDrying => format!("Final moisture removal from {example}"),
        Phase::Complete => format!("Freeze-dried {example} achieved"),
    }
}

fn description(phase: Phase, example: &str) -> String {
    match phase {
        Phase::Initial => {
            format!("Fresh {example} contains water molecules moving freely at room temperature")
        }
        Phase::Freezing => format!(
            "Temperature drops to -40°C, water in {example} forms ice crystals that preserve cellular structure"
        ),
        Phase::PrimaryDrying => format!(
            "Under vacuum, ice crystals in {example} sublimate directly to vapor, preserving shape and nutrition"
        ),
        Phase::SecondaryDrying => {
            format!("Temperature rises to remove remaining bound water from {example}")
        }
        Phase::Complete => format!(
            "Freeze-dried {example} is complete - lightweight, preserved, and ready for long-term storage"
        ),
    }
}

/// Whole numbers print without decimals, fractional ones as-is.
fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Resolve the display bundle for a phase and product.
///
/// Pure: the fact table is fixed after first use and nothing else is read.
pub fn resolve(phase: Phase, product: ProductId) -> Metrics {
    let record = product.product();
    let example = record.example().to_lowercase();
    let temperature = phase.temperature_c();
    let pressure = phase.pressure_mbar();
    Metrics {
        phase,
        temperature,
        pressure,
        temperature_tone: TemperatureTone::from_celsius(temperature),
        under_vacuum: pressure < 10.0,
        headline: phase.title(),
        summary: summary(phase, &example),
        description_text: description(phase, &example),
        detail_temperature: phase.detail_temperature(),
        detail_pressure: phase.detail_pressure(),
        product_facts: fact_table()
            .get(&(phase, product))
            .cloned()
            .unwrap_or_default(),
        benefits: if phase == Phase::Complete { record.benefits } else { &[] },
    }
}

impl Metrics {
    /// Temperature readout, e.g. "-40°C".
    pub fn temperature_reading(&self) -> String {
        format!("{}°C", format_reading(self.temperature))
    }

    /// Pressure readout, e.g. "0.2 mbar".
    pub fn pressure_reading(&self) -> String {
        format!("{} mbar", format_reading(self.pressure))
    }

    /// Look up a fact value by name.
    pub fn fact(&self, name: &str) -> Option<&str> {
        self.product_facts
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
