//! Service taxonomy and faceted catalog engine for auto shop booking.
//!
//! Turns free-text catalog entries into structured attributes, groups them
//! into category tabs, sorts and filters them for display, and estimates
//! multi-day stays against closing time. Every operation is a pure function
//! of its arguments.

pub mod cli;
pub mod config;
pub mod logging;
pub mod parsers;
pub mod services;
pub mod types;
