/// Integration test suite entry point
mod workflow;
