//! Registration table mapping step patterns to handlers.

use log::debug;
use regex::{Captures, Regex};

use super::error::{RegistrarError, ScenarioFailure, StepError};

/// Handler invoked with the scenario world and the captures of its pattern.
pub type StepHandler<W> =
    Box<dyn Fn(&mut W, &StepCaptures<'_>) -> Result<(), StepError> + Send + Sync>;

/// Capture groups of a matched step.
#[derive(Debug)]
pub struct StepCaptures<'s> {
    step: &'s str,
    captures: Captures<'s>,
}

impl<'s> StepCaptures<'s> {
    /// Text of capture group `index`; group 0 is the whole match.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::MissingCapture`] if the group did not
    /// participate in the match.
    pub fn get(&self, index: usize) -> Result<&'s str, StepError> {
        self.captures
            .get(index)
            .map(|m| m.as_str())
            .ok_or_else(|| StepError::MissingCapture {
                step: self.step.to_owned(),
                index,
            })
    }
}

struct RegisteredStep<W> {
    pattern: Regex,
    handler: StepHandler<W>,
}

/// Step patterns and their handlers, built once at suite start.
pub struct StepRegistry<W> {
    steps: Vec<RegisteredStep<W>>,
}

impl<W> Default for StepRegistry<W> {
    fn default() -> Self { Self { steps: Vec::new() } }
}

impl<W> std::fmt::Debug for StepRegistry<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistry")
            .field("patterns", &self.patterns().collect::<Vec<_>>())
            .finish()
    }
}

impl<W> StepRegistry<W> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Register a step that maps `pattern` to `handler`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::DuplicatePattern`] if `pattern` is already
    /// registered and [`RegistrarError::MalformedPattern`] if it does not
    /// compile.
    pub fn step<F>(mut self, pattern: &str, handler: F) -> Result<Self, RegistrarError>
    where
        F: Fn(&mut W, &StepCaptures<'_>) -> Result<(), StepError> + Send + Sync + 'static,
    {
        if self.steps.iter().any(|s| s.pattern.as_str() == pattern) {
            return Err(RegistrarError::DuplicatePattern(pattern.to_owned()));
        }
        let compiled = Regex::new(pattern).map_err(|source| RegistrarError::MalformedPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        self.steps.push(RegisteredStep {
            pattern: compiled,
            handler: Box::new(handler),
        });
        Ok(self)
    }

    /// Registered patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> { self.steps.iter().map(|s| s.pattern.as_str()) }

    #[must_use]
    pub fn len(&self) -> usize { self.steps.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    /// Run the single handler whose pattern matches `step`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Undefined`] or [`StepError::Ambiguous`] when
    /// zero or several patterns match, otherwise whatever the handler
    /// returns.
    pub fn dispatch(&self, world: &mut W, step: &str) -> Result<(), StepError> {
        let mut matched = self
            .steps
            .iter()
            .filter_map(|s| s.pattern.captures(step).map(|captures| (s, captures)));
        let Some((registered, captures)) = matched.next() else {
            return Err(StepError::Undefined(step.to_owned()));
        };
        let others: Vec<String> = matched.map(|(s, _)| s.pattern.as_str().to_owned()).collect();
        if !others.is_empty() {
            let mut patterns = vec![registered.pattern.as_str().to_owned()];
            patterns.extend(others);
            return Err(StepError::Ambiguous {
                step: step.to_owned(),
                patterns,
            });
        }

        debug!("step {step:?} matched {}", registered.pattern.as_str());
        (registered.handler)(world, &StepCaptures { step, captures })
    }

    /// Run `steps` in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns a [`ScenarioFailure`] naming the failing step; steps after it
    /// do not run.
    pub fn run_scenario<I>(&self, world: &mut W, steps: I) -> Result<(), ScenarioFailure>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for (index, item) in steps.into_iter().enumerate() {
            let step = item.as_ref();
            self.dispatch(world, step)
                .map_err(|source| ScenarioFailure {
                    index,
                    step: step.to_owned(),
                    source,
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{StepCaptures, StepRegistry};
    use crate::steps::{RegistrarError, StepError};

    #[derive(Debug, Default)]
    struct Tally {
        seen: Vec<String>,
    }

    fn record(tally: &mut Tally, captures: &StepCaptures<'_>) -> Result<(), StepError> {
        tally.seen.push(captures.get(1)?.to_owned());
        Ok(())
    }

    #[fixture]
    fn registry() -> StepRegistry<Tally> {
        StepRegistry::new()
            .step(r#"^count "([^"]*)"$"#, record)
            .expect("register count")
    }

    #[rstest]
    fn dispatch_passes_captures(registry: StepRegistry<Tally>) {
        let mut tally = Tally::default();
        registry
            .dispatch(&mut tally, r#"count "apples""#)
            .expect("dispatch");
        assert_eq!(tally.seen, ["apples"]);
    }

    #[rstest]
    fn duplicate_pattern_is_rejected(registry: StepRegistry<Tally>) {
        let err = registry
            .step(r#"^count "([^"]*)"$"#, record)
            .expect_err("duplicate");
        assert!(matches!(err, RegistrarError::DuplicatePattern(_)));
    }

    #[test]
    fn malformed_pattern_is_rejected() {
        let err = StepRegistry::<Tally>::new()
            .step("^count (unclosed$", record)
            .expect_err("malformed");
        assert!(matches!(err, RegistrarError::MalformedPattern { .. }));
    }

    #[rstest]
    fn missing_capture_is_reported() {
        let registry = StepRegistry::new()
            .step("^count nothing$", record)
            .expect("register");
        let err = registry
            .dispatch(&mut Tally::default(), "count nothing")
            .expect_err("missing capture");
        assert!(matches!(err, StepError::MissingCapture { index: 1, .. }));
    }

    #[rstest]
    fn debug_lists_patterns(registry: StepRegistry<Tally>) {
        assert!(format!("{registry:?}").contains("count"));
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }
}
