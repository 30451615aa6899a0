//! Test doubles and fixtures for driving `deploy_steps` handlers without a
//! cluster.
//!
//! The doubles record every request they receive so tests can assert on the
//! exact resource a step submitted.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use deploy_steps::{Data, TemplateHolderProvider};
//! use deploy_steps_testing::RecordingDeployer;
//!
//! let deployer = Arc::new(RecordingDeployer::new());
//! let data = Data::new("ns", "/examples", Arc::new(TemplateHolderProvider::new()), deployer.clone());
//! data.deploy_folder_from_example_service("svc").unwrap();
//! assert_eq!(deployer.last().unwrap().app.source_uri(), "/examples/svc/src/main/resources");
//! ```

pub mod doubles;
pub mod logging;

pub use doubles::{DeployCall, HolderRequest, RecordingDeployer, StubHolderProvider, scenario_data};
pub use logging::{LoggerHandle, logger};
