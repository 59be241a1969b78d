//! Texstitch - pack sprite PNGs into a power-of-two texture atlas
//!
//! This library provides functionality to:
//! - Load a directory of sprite PNGs in parallel
//! - Estimate the smallest square power-of-two canvas that holds them
//! - Place sprites with a row/shelf heuristic and compose the atlas image
//! - Render a placement manifest (Lua call script or JSON) for a runtime

pub mod cli;
pub mod compositor;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod output;
pub mod pack;
pub mod sprite;
pub mod telemetry;
