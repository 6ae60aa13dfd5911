//! Data model and quiz logic of the grammar hub, independent of any UI.

pub mod blanks;
pub mod card;
pub mod config;
pub mod discovery;
pub mod error;
pub mod index;
pub mod menu;
pub mod params;
pub mod question;
pub mod resource;
pub mod selection;
pub mod session;
pub mod ui_state;

pub use error::{Error, ResourceError, Result};
