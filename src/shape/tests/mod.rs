//! Unit tests for the shape-area scenario.
