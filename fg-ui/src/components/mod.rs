//! Reusable Dioxus RSX components for the FloodGuard page.

mod back_button;
mod emergency_map;
mod error_display;
mod flood_alert;
mod loading_spinner;
mod map_legend;
mod page_header;
mod prediction_banner;
mod prediction_form;
mod reading_input;

pub use back_button::BackButton;
pub use emergency_map::{EmergencyMap, MAP_CONTAINER_ID};
pub use error_display::ErrorDisplay;
pub use flood_alert::FloodAlert;
pub use loading_spinner::LoadingSpinner;
pub use map_legend::MapLegend;
pub use page_header::PageHeader;
pub use prediction_banner::PredictionBanner;
pub use prediction_form::PredictionForm;
pub use reading_input::ReadingInput;
