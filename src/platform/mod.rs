//! OS adapters for the clipboard and foreground-app seams.

pub mod clipboard;
pub mod foreground;

pub use clipboard::SystemClipboard;
pub use foreground::SystemForeground;
