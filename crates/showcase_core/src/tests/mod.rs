//! Tests that exercise several page components together.
//!
//! Each component has its own unit tests next to its code; these cover the
//! interactions that only show up once components share a key dispatcher.

mod keyboard_tests;
