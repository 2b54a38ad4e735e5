#![doc = include_str!("../README.md")]

pub mod cli;
pub mod consts;
pub mod driver;
pub mod emit;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod log;
pub mod normalize;
pub mod selectors;
pub mod text;
pub mod types;

pub use error::{Result, ScrapeError};
pub use types::*;
