//! Presentation
//!
//! Formats model results for the command line, keeping printing out of
//! the computations.

pub mod presenters;
