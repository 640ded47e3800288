pub mod app;
pub mod editor;
pub mod factory;
pub mod handler;

pub use crate::domain::model::Advertisement;
pub use crate::domain::ports::{AdDestination, AdSource, Prompter};
pub use crate::utils::error::Result;
