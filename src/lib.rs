pub mod blog_index;
pub mod config;
pub mod content;
pub mod error;
pub mod index_document;
pub mod logger;
pub mod post_index;
pub mod text_utils;
pub mod view;
mod test_data;
