//! Integration tests for tagterm.
//!
//! This module contains integration tests organized by feature:
//!
//! - `fixtures` - Test helpers for scripted consoles and temporary config dirs
//! - `render_tests` - Markup rendering properties
//! - `menu_tests` - Validated menu behaviour
//! - `config_tests` - Configuration loading and style overrides
//! - `cli_tests` - CLI interface tests
//! - `snapshot_tests` - Output snapshot tests using insta

pub mod config_tests;
pub mod menu_tests;
