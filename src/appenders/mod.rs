//! Appender implementations

pub mod buffer;
pub mod console;

pub use buffer::SharedBuffer;
pub use console::ConsoleAppender;

// Re-export the trait next to its implementations
pub use crate::core::Appender;
