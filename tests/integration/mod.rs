//! Integration tests for shuttle verification runs
//!
//! These tests drive the real reqwest transport against an in-process
//! HTTP stub standing in for the frontend and backend.

pub mod checks;
pub mod helpers;
pub mod run;
pub mod scan;
