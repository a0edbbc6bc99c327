pub mod file_reader;
pub mod paged_reader;
pub mod progress;

// Re-export commonly used types
pub use file_reader::{available_encodings, detect_encoding, EncodingChoice};
pub use paged_reader::{PagedReader, PagingMode, PAGE_SIZE};
