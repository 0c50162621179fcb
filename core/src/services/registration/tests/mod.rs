//! Tests for the registration service

mod mocks;
mod service_tests;
