mod find;
mod probe;

pub use find::{execute_find_pipeline, FindOptions};
pub use probe::execute_probe_pipeline;
