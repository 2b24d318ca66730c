//! Type definitions for shop-catalog

mod error;
mod service;
mod slot;
mod state;

pub use error::*;
pub use service::*;
pub use slot::*;
pub use state::*;
