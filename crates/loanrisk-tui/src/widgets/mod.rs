//! Custom widget components

mod error_banner;
mod form_panel;
mod header;
mod key_hints;
mod result_card;

pub use error_banner::{banner_text, ErrorBanner};
pub use form_panel::FormPanel;
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use result_card::ResultCard;
