pub mod entry;
pub mod loaders;
pub mod result;
pub mod samples;

pub use entry::{AnalysisRequestItem, Entry, EntryUpdate};
pub use loaders::{load_text_file, load_toml_batch, non_blank_lines};
pub use result::{AnalysisResult, Sentiment};
pub use samples::sample_items;
