//! Declarative description of a service to deploy.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{error::HolderError, table::ParameterTable};

/// API group and version of the deployment resource.
pub const API_VERSION: &str = "app.kiegroup.org/v1alpha1";
/// Kind of the deployment resource.
pub const KIND: &str = "KogitoApp";

/// Runtime a service is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Runtime {
    /// Quarkus services.
    Quarkus,
    /// Spring Boot services.
    Springboot,
}

impl Runtime {
    /// Identifier used in step parameters and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quarkus => "quarkus",
            Self::Springboot => "springboot",
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Runtime {
    type Err = HolderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quarkus" => Ok(Self::Quarkus),
            "springboot" => Ok(Self::Springboot),
            other => Err(HolderError::UnknownRuntime(other.to_owned())),
        }
    }
}

/// Where the build fetches sources from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitSource {
    /// Repository URI or source path.
    pub uri: String,
    /// Branch, tag or commit to build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Directory inside the repository holding the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_dir: Option<String>,
}

/// Build configuration of a service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSpec {
    pub git_source: GitSource,
    #[serde(default)]
    pub native: bool,
}

/// Identity of the resource inside the cluster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
}

/// Desired state of the deployed service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSpec {
    pub runtime: Runtime,
    pub replicas: u32,
    pub build: BuildSpec,
    /// Parameters forwarded from the step that requested the holder.
    #[serde(default, skip_serializing_if = "ParameterTable::is_empty")]
    pub parameters: ParameterTable,
}

/// Deployment resource submitted to the cluster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentResource {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: AppSpec,
}

impl DeploymentResource {
    /// Build a single-replica resource with an empty build source.
    #[must_use]
    pub fn new(namespace: &str, name: &str, runtime: Runtime) -> Self {
        Self {
            api_version: API_VERSION.to_owned(),
            kind: KIND.to_owned(),
            metadata: ObjectMeta {
                name: name.to_owned(),
                namespace: namespace.to_owned(),
            },
            spec: AppSpec {
                runtime,
                replicas: 1,
                build: BuildSpec::default(),
                parameters: ParameterTable::new(),
            },
        }
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.metadata.name }

    #[must_use]
    pub fn namespace(&self) -> &str { &self.metadata.namespace }

    /// URI the build fetches sources from.
    #[must_use]
    pub fn source_uri(&self) -> &str { &self.spec.build.git_source.uri }
}

/// Mutable handle on a [`DeploymentResource`] for the duration of one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppHolder {
    app: DeploymentResource,
}

impl AppHolder {
    #[must_use]
    pub const fn new(app: DeploymentResource) -> Self { Self { app } }

    /// Borrow the wrapped resource.
    #[must_use]
    pub const fn app(&self) -> &DeploymentResource { &self.app }

    /// Mutably borrow the wrapped resource.
    pub fn app_mut(&mut self) -> &mut DeploymentResource { &mut self.app }

    /// Replace the build source URI. Any previous value is discarded.
    pub fn set_source_uri(&mut self, uri: impl Into<String>) {
        self.app.spec.build.git_source.uri = uri.into();
    }
}
