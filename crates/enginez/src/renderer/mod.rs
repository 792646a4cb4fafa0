pub mod instance;
pub mod traits;

pub use traits::{RecordingSink, RenderSink};
