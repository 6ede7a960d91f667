//! Test Module
//!
//! Test suite for the MoodBot core.
//!
//! ## Test Categories
//! - `brain_tests`: crisis override, bucketing, tagging and reply composition
//! - `database_tests`: append/history contract of the SQLite conversation log
//! - `integration_tests`: full turns through the chat service and console
//! - `support`: test doubles for the scorer, random source and log

pub mod brain_tests;
pub mod support;
