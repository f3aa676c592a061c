//! Unit tests for the derive implementations
