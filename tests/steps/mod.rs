//! Step definitions for the Cucumber runner.

mod deploy_steps;
