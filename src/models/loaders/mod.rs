pub mod text_loader;
pub mod toml_loader;

pub use text_loader::{load_text_file, non_blank_lines, TextFile};
pub use toml_loader::load_toml_batch;
