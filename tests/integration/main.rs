//! Integration test harness.

mod stripper_test;
