//! Core data structures for lottery drawing applications.
//!
//! This crate provides the plain, randomness-free building blocks shared by the
//! generator, the picker session model, and the desktop application.
//!
//! # Overview
//!
//! - [`pool`]: The inclusive range of numbers a draw is taken from ([`PoolRange`]).
//! - [`config`]: Validated, immutable picker configuration ([`PickerConfig`]).
//! - [`draw`]: A sorted, duplicate-free set of drawn numbers ([`Draw`]).
//!
//! # Examples
//!
//! ```
//! use lotto_core::{Draw, PickerConfig, PoolRange};
//!
//! let config = PickerConfig::new(PoolRange::new(1, 49), 6, 6).unwrap();
//! assert_eq!(config.pool().len(), 49);
//!
//! let draw = Draw::from_numbers(&config, vec![3, 11, 17, 24, 38, 49]).unwrap();
//! assert_eq!(draw.to_string(), "3, 11, 17, 24, 38, 49");
//! ```

pub mod config;
pub mod draw;
pub mod pool;

pub use self::{
    config::{ConfigError, PickerConfig},
    draw::{Draw, DrawError},
    pool::PoolRange,
};
