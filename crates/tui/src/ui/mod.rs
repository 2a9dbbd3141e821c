//! UI rendering module for the TUI application.
//!
//! Holds the components, the top-level view that lays them out, and the
//! runtime that drives them.

pub mod components;
pub mod main_component;
pub mod runtime;
