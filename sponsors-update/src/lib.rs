// ABOUTME: Library exports for the sponsors updater modules
// ABOUTME: Makes the aggregation loop and renderer available to integration tests

pub mod constants;
pub mod paths;
pub mod render;
pub mod update;
