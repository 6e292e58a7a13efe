//! Core scanning functionality: filtering, walking, extraction and aggregation

pub mod aggregator;
pub mod collector;
pub mod dispatcher;
pub mod filter;
pub mod pipeline;
pub mod version;
pub mod walker;

pub use aggregator::aggregate;
pub use collector::{collect, denormalise};
pub use dispatcher::{process_path, Dispatcher};
pub use filter::{is_file_required, is_path_excluded, PathFilter};
pub use pipeline::Pipeline;
pub use walker::Walker;
