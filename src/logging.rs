//! Namespace-scoped logging for step handlers.
//!
//! Events go through `tracing` with a `namespace` field. The crate enables
//! `tracing`'s `log` bridge, so the same events also reach a `log` logger
//! when no subscriber is installed.

use std::fmt;

/// Logger tagging every event with the namespace under test.
#[derive(Clone, Copy, Debug)]
pub struct NamespaceLogger<'a> {
    namespace: &'a str,
}

/// Logger for events concerning `namespace`.
#[must_use]
pub const fn for_namespace(namespace: &str) -> NamespaceLogger<'_> { NamespaceLogger { namespace } }

impl NamespaceLogger<'_> {
    pub fn info(&self, message: fmt::Arguments<'_>) {
        tracing::info!(namespace = self.namespace, "{message}");
    }

    pub fn debug(&self, message: fmt::Arguments<'_>) {
        tracing::debug!(namespace = self.namespace, "{message}");
    }
}
