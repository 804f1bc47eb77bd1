//! Pipeline definition and validated construction.

use crate::client::GenerationOptions;
use crate::errors::ConfigError;
use crate::stage::StageSpec;
use std::collections::HashSet;

/// An ordered, forward-only chain of stages for one meeting topic.
///
/// A `Pipeline` can only be obtained through [`PipelineBuilder`], which
/// guarantees that every dependency references an earlier stage. Sequence
/// order defines both execution order and the only permitted dependency
/// direction, so cycles are unrepresentable.
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    topic: String,
    title: String,
    disclaimer: Option<String>,
    defaults: GenerationOptions,
    stages: Vec<StageSpec>,
}

impl Pipeline {
    /// Returns the pipeline name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the meeting topic.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the report title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the report disclaimer, if any.
    #[must_use]
    pub fn disclaimer(&self) -> Option<&str> {
        self.disclaimer.as_deref()
    }

    /// Returns the default generation options.
    #[must_use]
    pub fn defaults(&self) -> GenerationOptions {
        self.defaults
    }

    /// Returns the stages in execution order.
    #[must_use]
    pub fn stages(&self) -> &[StageSpec] {
        &self.stages
    }

    /// Returns the number of stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

/// Builder for creating validated pipelines.
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    name: String,
    topic: String,
    title: Option<String>,
    disclaimer: Option<String>,
    defaults: GenerationOptions,
    stages: Vec<StageSpec>,
}

impl PipelineBuilder {
    /// Creates a new pipeline builder for the given topic.
    #[must_use]
    pub fn new(name: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topic: topic.into(),
            title: None,
            disclaimer: None,
            defaults: GenerationOptions::default(),
            stages: Vec::new(),
        }
    }

    /// Sets the report title. Defaults to the topic.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the report disclaimer paragraph.
    #[must_use]
    pub fn disclaimer(mut self, disclaimer: impl Into<String>) -> Self {
        self.disclaimer = Some(disclaimer.into());
        self
    }

    /// Sets the default generation options.
    #[must_use]
    pub fn defaults(mut self, defaults: GenerationOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Adds a stage to the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the stage id is empty or duplicated, or if any
    /// dependency does not reference a stage added earlier.
    pub fn stage(mut self, spec: StageSpec) -> Result<Self, ConfigError> {
        spec.validate()?;

        if self.stages.iter().any(|existing| existing.id == spec.id) {
            return Err(ConfigError::new(format!("Duplicate stage id '{}'", spec.id))
                .with_stages(vec![spec.id.clone()])
                .with_hint("Give every stage a unique id."));
        }

        let earlier: HashSet<&str> = self.stages.iter().map(|s| s.id.as_str()).collect();
        for dep in &spec.dependencies {
            if !earlier.contains(dep.as_str()) {
                return Err(ConfigError::new(format!(
                    "Stage '{}' depends on '{}', which is not an earlier stage",
                    spec.id, dep
                ))
                .with_stages(vec![spec.id.clone(), dep.clone()])
                .with_hint(
                    "Dependencies may only point at stages added before the dependent stage.",
                ));
            }
        }

        self.stages.push(spec);
        Ok(self)
    }

    /// Builds the pipeline.
    ///
    /// # Errors
    ///
    /// Returns an error if the builder has no stages or any generation
    /// options are invalid.
    pub fn build(self) -> Result<Pipeline, ConfigError> {
        if self.stages.is_empty() {
            return Err(ConfigError::new("Pipeline has no stages")
                .with_hint("Add at least one stage before building."));
        }

        self.defaults.validate()?;
        for stage in &self.stages {
            if let Some(options) = &stage.role.options {
                options.validate().map_err(|err| {
                    ConfigError::new(format!(
                        "Invalid generation options on role '{}': {}",
                        stage.role.id, err.message
                    ))
                    .with_stages(vec![stage.id.clone()])
                })?;
            }
        }

        Ok(Pipeline {
            title: self.title.unwrap_or_else(|| self.topic.clone()),
            name: self.name,
            topic: self.topic,
            disclaimer: self.disclaimer,
            defaults: self.defaults,
            stages: self.stages,
        })
    }

    /// Returns the number of stages added so far.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}
