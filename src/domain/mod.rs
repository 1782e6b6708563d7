pub mod draft;
pub mod types;

pub use draft::Draft;
pub use types::{PredictionRequest, SpamStatus};
