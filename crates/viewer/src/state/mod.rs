pub mod selection;
pub mod settings;

pub use selection::PanelSelection;
pub use settings::{AppearanceSettings, CameraSettings, ViewerSettings};
