pub mod account;
pub mod asset;
pub mod studio;
pub mod config;
pub mod event;
pub mod error;


pub use error::{DebitRefusal, StudioError};
pub type Result<T> = std::result::Result<T, StudioError>;
