//! Valentine planner
//!
//! An invitation gate in front of a three-step picker (food, drinks,
//! movies) whose finished plan is posted to a form endpoint.

pub mod catalog;
pub mod config;
pub mod runtime;
pub mod state_machine;
pub mod submit;
pub mod tui;
