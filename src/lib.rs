#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod fetch;
pub mod log;
pub mod report;
pub mod scan;
pub mod selectors;


pub use api::*;
pub use error::*;
