//! Lookup and construction of holders.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use super::{
    error::HolderError,
    resource::{AppHolder, DeploymentResource, Runtime},
    table::ParameterTable,
};

const MAX_NAME_LEN: usize = 63;

/// Source of [`AppHolder`]s for step handlers.
pub trait HolderProvider: Send + Sync {
    /// Retrieve or create the holder identified by `namespace` and
    /// `service_name`, built for `runtime`.
    ///
    /// # Errors
    ///
    /// Returns a [`HolderError`] when no holder can be produced for the
    /// request.
    fn app_holder(
        &self,
        namespace: &str,
        runtime: &str,
        service_name: &str,
        parameters: &ParameterTable,
    ) -> Result<AppHolder, HolderError>;
}

/// Check that `name` is usable as a resource name (an RFC 1123 label).
///
/// # Errors
///
/// Returns [`HolderError::InvalidServiceName`] naming the broken rule.
pub fn validate_service_name(name: &str) -> Result<(), HolderError> {
    let reject = |reason| {
        Err(HolderError::InvalidServiceName {
            name: name.to_owned(),
            reason,
        })
    };
    if name.is_empty() {
        return reject("name is empty");
    }
    if name.len() > MAX_NAME_LEN {
        return reject("name is longer than 63 characters");
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return reject("name may only contain lowercase letters, digits and '-'");
    }
    if name.starts_with('-') || name.ends_with('-') {
        return reject("name must start and end with a letter or digit");
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct HolderKey {
    namespace: String,
    name: String,
}

/// Builds holders from per-runtime templates, preferring holders prepared
/// earlier in the scenario.
#[derive(Debug, Default)]
pub struct TemplateHolderProvider {
    prepared: Mutex<HashMap<HolderKey, AppHolder>>,
}

impl TemplateHolderProvider {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Register `holder` so later lookups for its namespace and name return
    /// a copy of it. A holder prepared earlier for the same pair is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`HolderError::InvalidServiceName`] if the holder's name is
    /// not a valid resource name.
    pub fn prepare(&self, holder: AppHolder) -> Result<(), HolderError> {
        validate_service_name(holder.app().name())?;
        let key = HolderKey {
            namespace: holder.app().namespace().to_owned(),
            name: holder.app().name().to_owned(),
        };
        self.prepared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, holder);
        Ok(())
    }

    fn prepared(&self, namespace: &str, name: &str) -> Option<AppHolder> {
        let key = HolderKey {
            namespace: namespace.to_owned(),
            name: name.to_owned(),
        };
        self.prepared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }
}

impl HolderProvider for TemplateHolderProvider {
    fn app_holder(
        &self,
        namespace: &str,
        runtime: &str,
        service_name: &str,
        parameters: &ParameterTable,
    ) -> Result<AppHolder, HolderError> {
        validate_service_name(service_name)?;
        let runtime: Runtime = runtime.parse()?;

        let mut holder = match self.prepared(namespace, service_name) {
            Some(holder) if holder.app().spec.runtime != runtime => {
                return Err(HolderError::RuntimeMismatch {
                    namespace: namespace.to_owned(),
                    name: service_name.to_owned(),
                    requested: runtime,
                    found: holder.app().spec.runtime,
                });
            }
            Some(holder) => holder,
            None => AppHolder::new(DeploymentResource::new(namespace, service_name, runtime)),
        };
        if !parameters.is_empty() {
            holder.app_mut().spec.parameters = parameters.clone();
        }
        Ok(holder)
    }
}
