pub mod content;

pub use content::{Content, ContentKey, MediaDetail, MediaType};
