pub mod help;
pub mod helpers;
pub mod text_input;

pub use help::HelpModal;
pub use text_input::TextInputModal;
