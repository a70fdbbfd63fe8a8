//! UI Components

pub mod navbar;
pub mod wallet_selector;

pub use navbar::Navbar;
pub use wallet_selector::WalletSelector;
