mod app;
mod control_panel;
mod nav_bar;
mod phase_indicator;
mod process_animation;
mod process_chart;
mod product_selector;

pub use app::App;
pub use control_panel::ControlPanel;
pub use nav_bar::NavBar;
pub use phase_indicator::PhaseIndicator;
pub use process_animation::ProcessAnimation;
pub use process_chart::ProcessChart;
pub use product_selector::ProductSelector;
