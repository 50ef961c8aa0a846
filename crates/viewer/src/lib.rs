// Library crate: the engine-agnostic viewer core, the headless harness and
// fixtures used by integration tests. The egui demo host stays in the binary.

pub mod command;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod layout;
pub mod lifecycle;
pub mod render;
pub mod scene;
pub mod state;
pub mod validation;
pub mod viewport;

pub use error::ViewerError;
pub use lifecycle::Viewer;
pub use scene::{SyncOutcome, ViewInputs};
pub use state::settings::ViewerSettings;
pub use viewport::ContainerSize;
