//! TimeTrack engine
//!
//! This crate provides salary calculation for the supported pay schemes
//! (hourly, monthly, commission, performance, fixed and mixed), statutory
//! charge computation, and the network allow-list policy that gates
//! clocking in and logging in.

#![warn(missing_docs)]

pub mod access;
pub mod api;
pub mod calculation;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
