// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod exchange;
pub mod learning;
pub mod persistence;
pub mod quiz;
pub mod simulation;
pub use crate::core::engine::EcoPalEngine;
pub use crate::core::resolver::ResponseResolver;
pub use crate::error::{EcoPalError, Result};
