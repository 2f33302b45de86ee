pub mod disorder_renderer;
pub mod handle_extractor;

pub use disorder_renderer::{classify, render};
pub use handle_extractor::{extract_result_handle, HandleExtraction};
