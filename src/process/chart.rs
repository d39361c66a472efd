use super::phase::Phase;

// Chart layout constants (SVG coordinate space within viewBox="0 0 300 200")
pub const CHART_HEIGHT: f64 = 200.0;
pub const CHART_LEFT: f64 = 30.0;
pub const CHART_RIGHT: f64 = 270.0;
pub const POINT_SPACING: f64 = 60.0;

pub const TEMP_MIN_C: f64 = -50.0;
pub const TEMP_MAX_C: f64 = 50.0;
pub const PRESSURE_MIN_MBAR: f64 = 0.1;
pub const PRESSURE_MAX_MBAR: f64 = 1013.0;

pub const MARKER_RADIUS: f64 = 4.0;
pub const CURRENT_MARKER_RADIUS: f64 = 6.0;

const TEMPERATURE_GRID: [f64; 5] = [-40.0, -20.0, 0.0, 20.0, 40.0];
const PRESSURE_GRID: [f64; 5] = [0.1, 1.0, 10.0, 100.0, 1000.0];

/// Linear, inverted: hotter is higher up the chart.
pub fn temperature_y(temp_c: f64) -> f64 {
    let y = CHART_HEIGHT - ((temp_c - TEMP_MIN_C) / (TEMP_MAX_C - TEMP_MIN_C)) * CHART_HEIGHT;
    y.clamp(0.0, CHART_HEIGHT)
}

/// Log10 scale, inverted: higher pressure is higher up the chart.
///
/// Non-positive or non-finite pressure has no logarithm and is clamped to the
/// bottom of the scale.
pub fn pressure_y(pressure_mbar: f64) -> f64 {
    let p = if pressure_mbar.is_finite() && pressure_mbar > 0.0 {
        pressure_mbar
    } else {
        PRESSURE_MIN_MBAR
    };
    let min_log = PRESSURE_MIN_MBAR.log10();
    let max_log = PRESSURE_MAX_MBAR.log10();
    let y = CHART_HEIGHT - ((p.log10() - min_log) / (max_log - min_log)) * CHART_HEIGHT;
    y.clamp(0.0, CHART_HEIGHT)
}

/// X position of the `index`-th phase.
pub fn phase_x(index: usize) -> f64 {
    CHART_LEFT + index as f64 * POINT_SPACING
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: &'static str,
    pub current: bool,
}

impl ChartPoint {
    pub fn radius(&self) -> f64 {
        if self.current { CURRENT_MARKER_RADIUS } else { MARKER_RADIUS }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub label: String,
}

/// One quantity plotted across the five phases.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub grid: Vec<GridLine>,
}

impl ChartSeries {
    /// SVG polyline `points` attribute.
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn series(
    current: Phase,
    value: impl Fn(Phase) -> f64,
    to_y: impl Fn(f64) -> f64,
    label: impl Fn(Phase) -> &'static str,
    grid: Vec<GridLine>,
) -> ChartSeries {
    let points = Phase::ALL
        .iter()
        .enumerate()
        .map(|(i, &phase)| ChartPoint {
            x: phase_x(i),
            y: to_y(value(phase)),
            label: label(phase),
            current: phase == current,
        })
        .collect();
    ChartSeries { points, grid }
}

pub fn temperature_series(current: Phase) -> ChartSeries {
    let grid = TEMPERATURE_GRID
        .iter()
        .map(|&t| GridLine { y: temperature_y(t), label: format!("{t}°") })
        .collect();
    series(current, Phase::temperature_c, temperature_y, Phase::temperature_label, grid)
}

pub fn pressure_series(current: Phase) -> ChartSeries {
    let grid = PRESSURE_GRID
        .iter()
        .map(|&p| GridLine {
            y: pressure_y(p),
            label: if p < 1.0 { format!("{p:.1}") } else { format!("{p}") },
        })
        .collect();
    series(current, Phase::pressure_mbar, pressure_y, Phase::pressure_label, grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_axis_inverted_and_bounded() {
        let warm = temperature_y(20.0);
        let cold = temperature_y(-40.0);
        assert!(warm < cold);
        assert!((0.0..=CHART_HEIGHT).contains(&warm));
        assert!((0.0..=CHART_HEIGHT).contains(&cold));
        assert!((temperature_y(50.0) - 0.0).abs() < 1e-9);
        assert!((temperature_y(-50.0) - 200.0).abs() < 1e-9);
        assert!((temperature_y(0.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_outside_domain_is_clamped() {
        assert_eq!(temperature_y(120.0), 0.0);
        assert_eq!(temperature_y(-90.0), CHART_HEIGHT);
    }

    #[test]
    fn test_pressure_axis_log_inverted() {
        let atm = pressure_y(1013.0);
        let vac = pressure_y(0.1);
        assert!(atm < vac);
        assert!(atm.abs() < 1e-9);
        assert!((vac - CHART_HEIGHT).abs() < 1e-9);
        // One decade above the floor is a quarter-ish of the way up
        let decade = CHART_HEIGHT / (1013.0_f64.log10() + 1.0);
        assert!((pressure_y(1.0) - (CHART_HEIGHT - decade)).abs() < 1e-9);
    }

    #[test]
    fn test_pressure_guard_for_invalid_input() {
        assert_eq!(pressure_y(0.0), CHART_HEIGHT);
        assert_eq!(pressure_y(-5.0), CHART_HEIGHT);
        assert_eq!(pressure_y(f64::NAN), CHART_HEIGHT);
        assert_eq!(pressure_y(1e6), 0.0);
    }

    #[test]
    fn test_exactly_one_current_marker() {
        for phase in Phase::ALL {
            for series in [temperature_series(phase), pressure_series(phase)] {
                let current: Vec<_> = series.points.iter().filter(|p| p.current).collect();
                assert_eq!(current.len(), 1);
                assert_eq!(current[0].x, phase_x(phase.index()));
                assert_eq!(current[0].radius(), CURRENT_MARKER_RADIUS);
            }
        }
    }

    #[test]
    fn test_series_layout() {
        let s = temperature_series(Phase::Initial);
        let xs: Vec<f64> = s.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![30.0, 90.0, 150.0, 210.0, 270.0]);
        assert_eq!(s.points[0].label, "Room Temp");
        assert_eq!(s.points[1].radius(), MARKER_RADIUS);
        assert_eq!(s.polyline().split(' ').count(), 5);
        assert!(s.polyline().starts_with("30.0,60.0"));
    }

    #[test]
    fn test_grid_labels() {
        let labels: Vec<String> = pressure_series(Phase::Initial).grid.into_iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["0.1", "1", "10", "100", "1000"]);
        let labels: Vec<String> = temperature_series(Phase::Initial).grid.into_iter().map(|g| g.label).collect();
        assert_eq!(labels[0], "-40°");
    }
}
