//! CI policy helpers.

pub mod property_test_profile;
