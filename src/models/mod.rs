//! Domain models
//!
//! Value types and the player skeleton configuration. Models are pure
//! data with minimal logic; the computations live in `services`.

pub mod constants;
pub mod errors;
pub mod player_model;
pub mod vector;
