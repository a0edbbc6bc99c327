pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::Args;
pub use paged_text_core::{
    available_encodings, EncodingChoice, PagedReader, PagingMode, PAGE_SIZE,
};
