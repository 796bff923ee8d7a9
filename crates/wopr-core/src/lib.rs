//! Core types and definitions for the WOPR war simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! sides, target kinds, missile and explosion components, commands,
//! the game result contract, configuration, and constants.
//! It has no dependency on any terminal or runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{Result, WoprError};
