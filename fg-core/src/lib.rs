//! Core types for the FloodGuard flood-risk page.
//!
//! This crate is platform-free and holds everything the UI decides on:
//! - `reading` / `form`: the prediction form's fields and state machine
//! - `prediction`: canned results and the simulated predictor
//! - `location` / `style`: the emergency facility table and marker styles
//! - `info_window`: marker popup markup
//! - `config`: JSON configuration with defaults

pub mod config;
pub mod error;
pub mod form;
pub mod info_window;
pub mod location;
pub mod prediction;
pub mod reading;
pub mod style;
