//! Errors raised while looking up or constructing holders.

use thiserror::Error;

use super::resource::Runtime;

/// Errors that prevent a [`super::AppHolder`] from being produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum HolderError {
    /// The service name is not a valid resource name.
    #[error("invalid service name {name:?}: {reason}")]
    InvalidServiceName {
        /// Rejected name.
        name: String,
        /// Rule the name broke.
        reason: &'static str,
    },
    /// No template exists for the requested runtime.
    #[error("unknown runtime {0:?}")]
    UnknownRuntime(String),
    /// A prepared holder exists for the service but targets another runtime.
    #[error("holder for {name} in {namespace} uses runtime {found}, not {requested}")]
    RuntimeMismatch {
        /// Namespace of the prepared holder.
        namespace: String,
        /// Service name of the prepared holder.
        name: String,
        /// Runtime asked for by the caller.
        requested: Runtime,
        /// Runtime recorded on the prepared holder.
        found: Runtime,
    },
}
