//! # Text Pipeline

use core::{fmt, str::FromStr};

use crate::{errors::StrkitError, pipeline::step::Step};

/// The separator between steps in the text form of a [`Pipeline`].
pub const STEP_SEPARATOR: char = '|';

/// A string to string transform.
pub trait TextTransform: Send + Sync {
    /// Transform a single text.
    fn apply(
        &self,
        text: &str,
    ) -> String;

    /// Transform a batch of texts.
    ///
    /// The default implementation is sequential.
    fn apply_batch(
        &self,
        batch: &[String],
    ) -> Vec<String> {
        batch.iter().map(|text| self.apply(text)).collect()
    }
}

impl TextTransform for Step {
    fn apply(
        &self,
        text: &str,
    ) -> String {
        Step::apply(self, text)
    }
}

/// An ordered chain of [`Step`]s.
///
/// The empty pipeline is the identity.
///
/// ## Style Hints
///
/// Instance names should prefer `pipeline`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Build a new, empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn with_step(
        mut self,
        step: Step,
    ) -> Self {
        self.steps.push(step);
        self
    }

    /// Append several steps.
    pub fn with_steps<I>(
        mut self,
        steps: I,
    ) -> Self
    where
        I: IntoIterator<Item = Step>,
    {
        self.steps.extend(steps);
        self
    }

    /// The steps, in application order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Is this the identity pipeline?
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<Step> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new().with_steps(iter)
    }
}

impl TextTransform for Pipeline {
    fn apply(
        &self,
        text: &str,
    ) -> String {
        let mut current = text.to_string();
        for step in &self.steps {
            log::trace!("applying step {step}");
            current = step.apply(&current);
        }
        current
    }

    fn apply_batch(
        &self,
        batch: &[String],
    ) -> Vec<String> {
        log::debug!(
            "applying {} step pipeline to {} texts",
            self.steps.len(),
            batch.len()
        );
        batch.iter().map(|text| self.apply(text)).collect()
    }
}

impl fmt::Display for Pipeline {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (idx, step) in self.steps.iter().enumerate() {
            if idx > 0 {
                write!(f, " {STEP_SEPARATOR} ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl FromStr for Pipeline {
    type Err = StrkitError;

    /// Parse `step | step | ...`; blank input is the empty pipeline.
    ///
    /// Leading whitespace of each step and one space before each separator
    /// are dropped. Other whitespace belongs to the step, so a trailing
    /// `singularize: ` keeps its space argument.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut parts = s.split(STEP_SEPARATOR).peekable();
        let mut pipeline = Self::new();
        while let Some(part) = parts.next() {
            let mut step = part.trim_start();
            if parts.peek().is_some() {
                step = step.strip_suffix(' ').unwrap_or(step);
            }
            pipeline.steps.push(step.parse::<Step>()?);
        }
        Ok(pipeline)
    }
}
