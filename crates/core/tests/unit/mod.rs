//! # Unit Components
//!
//! Central hub for the converter unit tests, split by the module under test.
