//! Integration test harness.

mod helpers;

mod session_test;
