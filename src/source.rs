//! Source locations of example services.
//!
//! A [`SourcePath`] addresses files inside a version-controlled source tree
//! rather than the local file system, so its segments are always joined with
//! `/` whatever the host platform uses.

use std::fmt;

/// Directory, relative to a service root, holding deployable resource files.
pub const SOURCE_LOCATION: &str = "src/main/resources";

/// Location of the resource files deployed for an example service.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourcePath(String);

impl SourcePath {
    /// Path of a single resource file of `service_name`.
    ///
    /// ```
    /// use deploy_steps::SourcePath;
    ///
    /// let path = SourcePath::file("/examples", "my-service", "config.yml");
    /// assert_eq!(path.as_str(), "/examples/my-service/src/main/resources/config.yml");
    /// ```
    #[must_use]
    pub fn file(examples_location: &str, service_name: &str, file: &str) -> Self {
        Self([examples_location, service_name, SOURCE_LOCATION, file].join("/"))
    }

    /// Path of the whole resource folder of `service_name`, without a
    /// trailing separator.
    #[must_use]
    pub fn folder(examples_location: &str, service_name: &str) -> Self {
        Self([examples_location, service_name, SOURCE_LOCATION].join("/"))
    }

    /// Borrow the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }

    /// Consume the path, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String { self.0 }
}

impl AsRef<str> for SourcePath {
    fn as_ref(&self) -> &str { &self.0 }
}

impl From<SourcePath> for String {
    fn from(path: SourcePath) -> Self { path.0 }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}
