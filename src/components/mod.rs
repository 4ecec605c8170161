// Shared chrome rendered around and over screens

pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod message_box;

pub use footer::{Footer, FOOTER_HEIGHT};
pub use header::{Header, Step, HEADER_HEIGHT};
pub use help_overlay::HelpOverlay;
pub use message_box::{MessageBox, MessageKind};
