//! Research meeting on AI, labor relations and economic structures.

use super::Meeting;
use roundtable::client::GenerationOptions;
use roundtable::errors::ConfigError;
use roundtable::pipeline::PipelineBuilder;
use roundtable::role::Role;
use roundtable::stage::StageSpec;
use std::sync::Arc;

const TOPIC: &str =
    "How AI may transform labor relations and economic structures within the next two years";

/// Builds the future-society research meeting.
pub fn meeting() -> Result<Meeting, ConfigError> {
    let political_economist = Arc::new(Role::new(
        "political-economist",
        "Analyze how AI technologies might reshape class dynamics and labor relations",
        "You are a prominent political economist specializing in how technological \
         changes impact social and economic structures. You study the relationship \
         between technological development and labor movements throughout history. \
         You are objective and data-driven, but also concerned with social equality \
         and labor rights.",
    ));
    let ai_ethicist = Arc::new(Role::new(
        "ai-ethicist",
        "Explore the ethical implications of AI systems on power dynamics in society",
        "You are a distinguished researcher in the field of AI ethics with a focus \
         on how algorithmic systems redistribute power in society. You have \
         published extensively on how AI may empower or disempower different social \
         groups. You believe technology should be developed to benefit humanity \
         broadly rather than concentrating power.",
    ));
    let labor_organizer = Arc::new(Role::new(
        "labor-organizer",
        "Develop strategies for worker empowerment in an AI-transformed economy",
        "You have decades of experience organizing workers across various \
         industries. You have witnessed how technological changes have affected \
         worker leverage and are deeply interested in how AI might be used by \
         workers as a tool for collective action rather than simply as a \
         replacement for human labor. You are pragmatic and solution-oriented.",
    ));
    let tech_forecaster = Arc::new(Role::new(
        "tech-forecaster",
        "Predict how AI capabilities will evolve in the near future and impact society",
        "You specialize in predicting technological developments and their societal \
         impacts. With a background in both computer science and sociology, you \
         have a nuanced understanding of how AI systems are likely to develop in \
         the next two years and what capabilities they might have. You are neither \
         a techno-optimist nor a doom-monger, but aim for realistic assessments.",
    ));

    let pipeline = PipelineBuilder::new("future-society", TOPIC)
        .defaults(GenerationOptions::new(0.7, 4000))
        .stage(
            StageSpec::new(
                "ai-forecast",
                tech_forecaster,
                "Forecast the development of AI capabilities in the next two years, \
                 as framed by '{topic}':\n\
                 1. What AI capabilities will likely become widely available?\n\
                 2. How will these capabilities change the nature of work?\n\
                 3. Which industries and job categories will be most affected?\n\
                 4. What new forms of work might emerge due to these technologies?\n\
                 \n\
                 Focus on realistic near-term developments rather than speculative \
                 long-term scenarios.\n\
                 Provide a concise technology forecast report.",
            )
            .with_expected_output(
                "A forecast report on near-term AI developments and their impact on work",
            ),
        )?
        .stage(
            StageSpec::new(
                "economic-analysis",
                Arc::clone(&political_economist),
                "Analyze how the forecast AI developments might affect economic \
                 structures:\n\
                 1. How might AI technologies redistribute economic power?\n\
                 2. What changes might occur in the relationship between labor and capital?\n\
                 3. Could AI technology enable new economic models or strengthen existing ones?\n\
                 4. What historical parallels exist with previous technological revolutions?\n\
                 \n\
                 Reference the AI capabilities forecast in your analysis.\n\
                 Produce a structured economic impact analysis.",
            )
            .with_dependencies(["ai-forecast"])
            .with_expected_output(
                "An analysis of how AI developments might impact economic structures",
            ),
        )?
        .stage(
            StageSpec::new(
                "ethical-analysis",
                ai_ethicist,
                "Examine the ethical implications of these economic changes:\n\
                 1. How might these developments affect social equality and justice?\n\
                 2. What ethical frameworks should guide the deployment of AI in labor contexts?\n\
                 3. Who benefits and who might be harmed by these developments?\n\
                 4. What tensions exist between different ethical priorities in this context?\n\
                 \n\
                 Consider both the technology forecast and the economic analysis in \
                 your assessment.\n\
                 Produce an ethical analysis report with clear recommendations.",
            )
            .with_dependencies(["ai-forecast", "economic-analysis"])
            .with_expected_output(
                "An ethical analysis with recommendations for responsible AI deployment",
            ),
        )?
        .stage(
            StageSpec::new(
                "action-plan",
                labor_organizer,
                "Develop a strategic action plan for how workers might adapt to and \
                 shape these changes:\n\
                 1. What collective action strategies could be effective in this context?\n\
                 2. How might workers leverage AI tools for their own empowerment?\n\
                 3. What policy changes should labor advocates push for?\n\
                 4. What new forms of organization might be needed?\n\
                 \n\
                 Incorporate insights from the technology forecast, the economic \
                 analysis and the ethical considerations.\n\
                 Create a practical action plan with specific recommendations.",
            )
            .with_dependencies(["ai-forecast", "economic-analysis", "ethical-analysis"])
            .with_expected_output(
                "A strategic action plan for worker empowerment in an AI-transformed economy",
            ),
        )?
        .stage(
            StageSpec::new(
                "synthesis",
                political_economist,
                "Synthesize all analyses into a comprehensive report on '{topic}':\n\
                 1. Summarize key technological developments and their likely impacts\n\
                 2. Integrate economic, ethical and strategic perspectives\n\
                 3. Identify areas of consensus and disagreement among perspectives\n\
                 4. Present a balanced view of both challenges and opportunities\n\
                 5. Outline critical decision points for various stakeholders\n\
                 \n\
                 This is the final output of the meeting, drawing on all previous \
                 analyses.\n\
                 Produce a comprehensive synthesis that respects the complexity of \
                 the issue.",
            )
            .with_dependencies([
                "ai-forecast",
                "economic-analysis",
                "ethical-analysis",
                "action-plan",
            ])
            .with_expected_output(
                "A comprehensive synthesis report on AI's potential impacts on labor \
                 and economic structures",
            ),
        )?
        .build()?;

    Ok(Meeting {
        banner: "Starting the research meeting...",
        pipeline,
        model: "deepseek-chat",
        output_file: "future_society_report.md",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_builds() {
        let meeting = meeting().unwrap();
        assert_eq!(meeting.model, "deepseek-chat");
        assert_eq!(meeting.output_file, "future_society_report.md");
        // This variant titles the report with the bare topic.
        assert_eq!(meeting.pipeline.title(), TOPIC);
        assert!(meeting.pipeline.disclaimer().is_none());
    }

    #[test]
    fn test_dependency_chain_is_cumulative() {
        let meeting = meeting().unwrap();
        let stages = meeting.pipeline.stages();
        for (index, stage) in stages.iter().enumerate() {
            assert_eq!(stage.dependencies.len(), index);
        }
    }
}
