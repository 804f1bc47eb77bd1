//! Sequential meeting execution.

use crate::client::ModelClient;
use crate::errors::ExecutionError;
use crate::pipeline::Pipeline;
use crate::prompt::compose_prompt;
use crate::report::Report;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

/// Identifies one runner pass for log correlation.
#[derive(Debug, Clone, Copy)]
pub struct RunId {
    /// The unique id of this run.
    pub id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
}

impl RunId {
    /// Creates a new run identity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes pipelines strictly in declared stage order.
///
/// The runner blocks on each model call and does not proceed to the next
/// stage until the prior stage's output is stored. Stage outputs live in a
/// map local to each `run` call, written once per stage; the pipeline itself
/// is only borrowed, so a definition can be run any number of times.
#[derive(Debug, Clone)]
pub struct MeetingRunner {
    client: Arc<dyn ModelClient>,
}

impl MeetingRunner {
    /// Creates a runner backed by the given model client.
    #[must_use]
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Runs the pipeline to completion and returns the report.
    ///
    /// On the first failing model call the run halts: the failing stage's
    /// output stays unset, later stages are never invoked, and no report is
    /// produced. Retry, if any, is the client's concern.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecutionError`] naming the failing stage and the
    /// underlying client failure.
    pub async fn run(&self, pipeline: &Pipeline) -> Result<Report, ExecutionError> {
        let run = RunId::new();
        let start = Instant::now();
        info!(
            run_id = %run.id,
            pipeline = %pipeline.name(),
            topic = %pipeline.topic(),
            stages = pipeline.stage_count(),
            "meeting started"
        );

        let mut outputs: HashMap<String, String> = HashMap::new();
        let mut body = String::new();

        for spec in pipeline.stages() {
            let context: Vec<(&str, &str)> = spec
                .dependencies
                .iter()
                .map(|dep| {
                    // Present by construction: dependencies only reference
                    // earlier, already-executed stages.
                    (dep.as_str(), outputs.get(dep).map_or("", String::as_str))
                })
                .collect();

            let prompt = compose_prompt(spec, pipeline.topic(), &context);
            let options = spec.role.options.unwrap_or_else(|| pipeline.defaults());

            info!(stage = %spec.id, role = %spec.role.id, "stage started");
            let stage_start = Instant::now();

            match self.client.generate(&prompt, &options).await {
                Ok(text) => {
                    info!(
                        stage = %spec.id,
                        duration_ms = stage_start.elapsed().as_secs_f64() * 1000.0,
                        chars = text.len(),
                        "stage completed"
                    );
                    outputs.insert(spec.id.clone(), text.clone());
                    body = text;
                }
                Err(cause) => {
                    error!(
                        stage = %spec.id,
                        duration_ms = stage_start.elapsed().as_secs_f64() * 1000.0,
                        error = %cause,
                        "stage failed"
                    );
                    return Err(ExecutionError::new(&spec.id, cause));
                }
            }
        }

        info!(
            run_id = %run.id,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "meeting completed"
        );

        Ok(Report::new(
            pipeline.title(),
            pipeline.disclaimer().map(ToString::to_string),
            body,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GenerationOptions;
    use crate::errors::ClientError;
    use crate::pipeline::PipelineBuilder;
    use crate::role::Role;
    use crate::stage::StageSpec;
    use crate::testing::{EchoClient, FailingClient, ScriptedClient};

    fn role(id: &str) -> Arc<Role> {
        Arc::new(Role::new(
            id,
            format!("objective of {id}"),
            format!("You are {id}."),
        ))
    }

    fn chain_pipeline() -> Pipeline {
        PipelineBuilder::new("meeting", "the topic")
            .stage(StageSpec::new("a", role("r-a"), "DESC-A for '{topic}'."))
            .unwrap()
            .stage(
                StageSpec::new("b", role("r-b"), "DESC-B.").with_dependencies(["a"]),
            )
            .unwrap()
            .stage(
                StageSpec::new("c", role("r-c"), "DESC-C.").with_dependencies(["a", "b"]),
            )
            .unwrap()
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_report_body_is_last_stage_output() {
        let client = Arc::new(ScriptedClient::new(["one", "two", "three"]));
        let runner = MeetingRunner::new(client.clone());

        let report = runner.run(&chain_pipeline()).await.unwrap();

        assert_eq!(report.body, "three");
        assert_eq!(report.title, "the topic");
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn test_prompts_carry_dependency_outputs_in_order() {
        let client = Arc::new(ScriptedClient::new(["OUT-A", "OUT-B", "OUT-C"]));
        let runner = MeetingRunner::new(client.clone());

        runner.run(&chain_pipeline()).await.unwrap();

        let prompts = client.prompts();
        // Stage b sees a's output verbatim.
        assert!(prompts[1].contains("--- output of a ---"));
        assert!(prompts[1].contains("OUT-A"));
        // Stage c sees both outputs, in dependency-list order.
        let pos_a = prompts[2].find("OUT-A").unwrap();
        let pos_b = prompts[2].find("OUT-B").unwrap();
        assert!(pos_a < pos_b);
    }

    #[tokio::test]
    async fn test_echo_report_orders_description_before_context() {
        let runner = MeetingRunner::new(Arc::new(EchoClient::new()));

        let report = runner.run(&chain_pipeline()).await.unwrap();

        // The body is c's echoed prompt: its own description first, then
        // a's and b's echoed prompts as context, in that order.
        let pos_c = report.body.find("DESC-C.").unwrap();
        let pos_a = report.body.find("DESC-A for 'the topic'.").unwrap();
        let pos_b = report.body.find("DESC-B.").unwrap();
        assert!(pos_c < pos_a);
        assert!(pos_a < pos_b);
    }

    #[tokio::test]
    async fn test_failure_halts_run_after_k_calls() {
        let client = Arc::new(FailingClient::new(
            2,
            ClientError::Network("connection reset".to_string()),
        ));
        let runner = MeetingRunner::new(client.clone());

        let err = runner.run(&chain_pipeline()).await.unwrap_err();

        assert_eq!(err.stage, "b");
        assert!(matches!(err.cause, ClientError::Network(_)));
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_pipeline_makes_no_client_calls() {
        let client = Arc::new(ScriptedClient::new(["never used"]));

        let result = PipelineBuilder::new("meeting", "t")
            .stage(StageSpec::new("a", role("r"), "desc").with_dependencies(["ghost"]));

        assert!(result.is_err());
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_role_override_reaches_nothing_but_still_runs() {
        // A role override changes sampling, not control flow; the run is
        // otherwise identical.
        let tuned = Arc::new(
            Role::new("tuned", "o", "p").with_options(GenerationOptions::new(0.2, 512)),
        );
        let pipeline = PipelineBuilder::new("meeting", "t")
            .stage(StageSpec::new("only", tuned, "desc"))
            .unwrap()
            .build()
            .unwrap();

        let runner = MeetingRunner::new(Arc::new(EchoClient::new()));
        assert!(runner.run(&pipeline).await.is_ok());
    }

    #[tokio::test]
    async fn test_pipeline_reusable_across_runs() {
        let pipeline = chain_pipeline();
        let runner = MeetingRunner::new(Arc::new(EchoClient::new()));

        let first = runner.run(&pipeline).await.unwrap();
        let second = runner.run(&pipeline).await.unwrap();

        assert_eq!(first.body, second.body);
    }

    #[tokio::test]
    async fn test_disclaimer_flows_into_report() {
        let pipeline = PipelineBuilder::new("meeting", "t")
            .disclaimer("Fiction only.")
            .stage(StageSpec::new("a", role("r"), "desc"))
            .unwrap()
            .build()
            .unwrap();

        let runner = MeetingRunner::new(Arc::new(EchoClient::new()));
        let report = runner.run(&pipeline).await.unwrap();

        assert_eq!(report.disclaimer.as_deref(), Some("Fiction only."));
    }
}
