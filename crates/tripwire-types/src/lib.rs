pub mod types;

pub use types::{AreaKind, CaptureRegion, Credentials};
