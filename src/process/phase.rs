use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stages of the freeze-drying cycle, in process order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    #[default]
    Initial,
    Freezing,
    PrimaryDrying,
    SecondaryDrying,
    Complete,
}

/// Returned when a stored or routed phase key doesn't name a phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown process phase `{0}`")]
pub struct UnknownPhase(pub String);

impl Phase {
    /// Every phase, in registry order.
    pub const ALL: [Phase; 5] = [
        Phase::Initial,
        Phase::Freezing,
        Phase::PrimaryDrying,
        Phase::SecondaryDrying,
        Phase::Complete,
    ];

    pub const FIRST: Phase = Phase::Initial;
    pub const LAST: Phase = Phase::Complete;

    /// Position in the registry (0..=4).
    pub fn index(self) -> usize {
        match self {
            Phase::Initial => 0,
            Phase::Freezing => 1,
            Phase::PrimaryDrying => 2,
            Phase::SecondaryDrying => 3,
            Phase::Complete => 4,
        }
    }

    /// Look up a phase by registry index. `None` past the last phase.
    pub fn from_index(index: usize) -> Option<Phase> {
        Self::ALL.get(index).copied()
    }

    /// The following phase, or `None` at the end of the cycle.
    pub fn next(self) -> Option<Phase> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding phase, or `None` at the start of the cycle.
    pub fn previous(self) -> Option<Phase> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Stable key used in storage and CSS classes.
    pub fn key(self) -> &'static str {
        match self {
            Phase::Initial => "initial",
            Phase::Freezing => "freezing",
            Phase::PrimaryDrying => "primary-drying",
            Phase::SecondaryDrying => "secondary-drying",
            Phase::Complete => "complete",
        }
    }

    /// Control-panel label
    pub fn label(self) -> &'static str {
        match self {
            Phase::Initial => "Initial State",
            Phase::Freezing => "Freezing",
            Phase::PrimaryDrying => "Primary Drying",
            Phase::SecondaryDrying => "Secondary Drying",
            Phase::Complete => "Complete",
        }
    }

    /// Nominal duration shown next to the label.
    pub fn duration(self) -> &'static str {
        match self {
            Phase::Initial => "Room Temperature",
            Phase::Freezing => "2-4 hours",
            Phase::PrimaryDrying => "12-48 hours",
            Phase::SecondaryDrying => "4-12 hours",
            Phase::Complete => "Final State",
        }
    }

    /// Target shelf temperature in °C
    pub fn temperature_c(self) -> f64 {
        match self {
            Phase::Initial => 20.0,
            Phase::Freezing => -40.0,
            Phase::PrimaryDrying => -20.0,
            Phase::SecondaryDrying => 40.0,
            Phase::Complete => 20.0,
        }
    }

    /// Target chamber pressure in mbar
    pub fn pressure_mbar(self) -> f64 {
        match self {
            Phase::Initial | Phase::Freezing | Phase::Complete => 1013.0,
            Phase::PrimaryDrying => 0.2,
            Phase::SecondaryDrying => 0.1,
        }
    }

    /// Heading used by the phase indicator.
    pub fn title(self) -> &'static str {
        match self {
            Phase::Initial => "Initial State",
            Phase::Freezing => "Freezing Phase",
            Phase::PrimaryDrying => "Primary Drying",
            Phase::SecondaryDrying => "Secondary Drying",
            Phase::Complete => "Process Complete",
        }
    }

    /// X-axis label on the temperature chart.
    pub fn temperature_label(self) -> &'static str {
        match self {
            Phase::Initial => "Room Temp",
            Phase::Freezing => "Freezing",
            Phase::PrimaryDrying => "Primary",
            Phase::SecondaryDrying => "Secondary",
            Phase::Complete => "Complete",
        }
    }

    /// X-axis label on the pressure chart.
    pub fn pressure_label(self) -> &'static str {
        match self {
            Phase::Initial | Phase::Freezing | Phase::Complete => "Atmospheric",
            Phase::PrimaryDrying => "Vacuum",
            Phase::SecondaryDrying => "Deep Vacuum",
        }
    }

    /// Operating temperature range for the processing-details card.
    /// The finished product has no operating conditions.
    pub fn detail_temperature(self) -> Option<&'static str> {
        match self {
            Phase::Initial => Some("~20°C"),
            Phase::Freezing => Some("-40°C to -80°C"),
            Phase::PrimaryDrying => Some("-10°C to -30°C"),
            Phase::SecondaryDrying => Some("20°C to 60°C"),
            Phase::Complete => None,
        }
    }

    /// Operating pressure range for the processing-details card.
    pub fn detail_pressure(self) -> Option<&'static str> {
        match self {
            Phase::Initial => Some("1013 mbar (atmospheric)"),
            Phase::Freezing => Some("1013 mbar"),
            Phase::PrimaryDrying => Some("0.1-0.3 mbar"),
            Phase::SecondaryDrying => Some("<0.1 mbar"),
            Phase::Complete => None,
        }
    }

    /// Glyph for the phase indicator badge.
    pub fn icon(self) -> &'static str {
        match self {
            Phase::Initial => "\u{1F321}",
            Phase::Freezing => "\u{2744}",
            Phase::PrimaryDrying => "\u{26A1}",
            Phase::SecondaryDrying => "\u{1F4A7}",
            Phase::Complete => "\u{2714}",
        }
    }

    /// The chamber is under vacuum with the shelves heated.
    pub fn is_drying(self) -> bool {
        matches!(self, Phase::PrimaryDrying | Phase::SecondaryDrying)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Phase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| UnknownPhase(s.to_string()))
    }
}
