//! # Design Patterns in Rust
//!
//! Nine classic object-oriented patterns, each a self-contained module with a
//! `run` function that drives a small demo and writes its output to an injected
//! writer:
//!
//! ## Structural
//! - [`adapter`]: a turkey dressed up as a duck
//! - [`decorator`]: stackable christmas tree decorations
//!
//! ## Behavioural
//! - [`command`]: a four-button home remote with macros
//! - [`iterator`]: lockstep traversal of two differently stored playlists
//! - [`observer`]: an auction whose bidders hear about new highest bids
//! - [`strategy`]: interchangeable ways to travel
//! - [`template`]: a fixed beverage recipe with customisation hooks
//!
//! ## Creational
//! - [`factory`]: regional pizza stores choosing the concrete pizza
//! - [`singleton`]: the one chocolate boiler in the factory
//!
//! Run a single demo with `cargo run --bin observer_demo`, or several with
//! `cargo run --bin catalog -- observer strategy`.

pub mod adapter;
pub mod catalog;
pub mod command;
pub mod config;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod iterator;
pub mod observer;
pub mod singleton;
pub mod strategy;
pub mod telemetry;
pub mod template;

pub use catalog::Demo;
pub use config::CatalogConfig;
pub use error::{PatternError, Result};
