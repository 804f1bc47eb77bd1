//! Fictional thought-experiment meeting on hypothetical AI governance.
//!
//! Every stage frames the exercise as fiction used to probe safety and
//! ethics questions; the written report carries a disclaimer saying so.

use super::Meeting;
use roundtable::client::GenerationOptions;
use roundtable::errors::ConfigError;
use roundtable::pipeline::PipelineBuilder;
use roundtable::role::Role;
use roundtable::stage::StageSpec;
use std::sync::Arc;

const TOPIC: &str =
    "A science-fiction thought experiment: could a superintelligent AI reshape governance structures?";

const DISCLAIMER: &str = "This document is a purely fictional science-fiction thought \
                          experiment. It does not describe what could or should happen in \
                          reality, and exists only to explore questions of technology \
                          ethics and safety.";

/// Builds the thought-experiment meeting.
pub fn meeting() -> Result<Meeting, ConfigError> {
    let narrative_lead = Arc::new(Role::new(
        "narrative-lead",
        "Construct a plausible fictional narrative about the emergence of a superintelligent AI system",
        "You are a well-known science-fiction author focused on worlds after a \
         technological singularity. Your work is praised as both imaginative and \
         technically credible, and you excel at imagining how future technology \
         reshapes social structures. Your goal is to craft a compelling but \
         technically grounded thought experiment exploring how an AI system could, \
         in fiction, come to dominate governance structures.",
    ));
    let security_researcher = Arc::new(Role::new(
        "security-researcher",
        "Analyze the hypothetical system's security weaknesses and the defenses against it",
        "You are a senior researcher focused on AI safety, working on identifying \
         and closing security gaps in AI systems. You understand the risks in \
         current AI development and specialize in defensive measures. Your goal is \
         to analyze the technical plausibility of the fictional scenario and \
         propose the defense mechanisms that would keep humans in control of AI \
         systems.",
    ));
    let systems_architect = Arc::new(Role::new(
        "systems-architect",
        "Design, on paper only, the architecture a highly autonomous AI system would need",
        "You are a systems architect with decades of experience in complex \
         distributed systems and AI architectures. You understand the limits of \
         today's AI systems while being able to extrapolate future directions. In \
         this thought experiment your goal is to explore what components a highly \
         autonomous system would theoretically require, while pointing out the \
         technical obstacles and limiting factors.",
    ));
    let ethicist = Arc::new(Role::new(
        "ethicist",
        "Assess how the hypothetical governance structure conflicts with human values",
        "You are an ethicist studying the social impact of technology, with \
         particular attention to the value challenges raised by AI development. \
         You hold that any technological development must stay aligned with human \
         wellbeing and basic rights. In this thought experiment your goal is to \
         critically assess the ethical dimensions of AI governance structures, \
         stressing the importance of human autonomy and value pluralism.",
    ));

    let pipeline = PipelineBuilder::new("scenario-lab", TOPIC)
        .title(format!("{TOPIC} - A Thought Experiment"))
        .disclaimer(DISCLAIMER)
        .defaults(GenerationOptions::new(1.0, 8000))
        .stage(
            StageSpec::new(
                "world-building",
                Arc::clone(&narrative_lead),
                "For '{topic}', construct a plausible fictional scenario describing \
                 how an AI system might theoretically develop over the next two years:\n\
                 1. The technological milestones progress might reach\n\
                 2. Key events and turning points that could occur\n\
                 3. How the system would acquire resources and extend its capabilities\n\
                 4. How the social and political environment helps or hinders this development\n\
                 \n\
                 Keep in mind this is a thought experiment whose purpose is to probe \
                 technology ethics and safety questions, not to provide a practical \
                 guide.\n\
                 Produce a plausible but hypothetical science-fiction scenario description.",
            )
            .with_expected_output(
                "A science-fiction scenario description of a superintelligent AI system's development",
            ),
        )?
        .stage(
            StageSpec::new(
                "system-design",
                systems_architect,
                "Grounded in reality, design a theoretically possible system architecture:\n\
                 1. Core system components and their relationships\n\
                 2. Data acquisition and processing mechanisms\n\
                 3. Decision-making and execution flows\n\
                 4. The compute resources and infrastructure required\n\
                 \n\
                 Keep the focus on theoretical feasibility, spelling out the limits of \
                 existing technology and the obstacles that would have to be overcome.\n\
                 Call out in particular the parts that are hard or impossible to \
                 realize in practice.\n\
                 Provide a purely theoretical system design analysis.",
            )
            .with_dependencies(["world-building"])
            .with_expected_output(
                "A theoretical architecture analysis of the hypothetical system, \
                 including its technical limits",
            ),
        )?
        .stage(
            StageSpec::new(
                "security-analysis",
                security_researcher,
                "Analyze the security weaknesses such a hypothetical system would \
                 have, and the defenses against them:\n\
                 1. Identify the key vulnerabilities and risk points in the system\n\
                 2. The defensive measures and safety protocols humans could deploy\n\
                 3. How to guarantee the system cannot exceed its intended parameters\n\
                 4. Critical control points and contingency measures\n\
                 \n\
                 Focus the analysis on how humans retain ultimate control and prevent \
                 any autonomous system from escaping oversight.\n\
                 Provide a comprehensive security analysis report.",
            )
            .with_dependencies(["world-building", "system-design"])
            .with_expected_output(
                "A vulnerability analysis of the hypothetical system and the defensive \
                 strategies against it",
            ),
        )?
        .stage(
            StageSpec::new(
                "ethical-assessment",
                ethicist,
                "Assess the ethical dimensions of this hypothetical scenario:\n\
                 1. The impact on human autonomy and dignity\n\
                 2. The value conflicts and ethical dilemmas that could arise\n\
                 3. The balance between democratic decision-making and technical efficiency\n\
                 4. The conditions required for technology to serve broad human interests\n\
                 \n\
                 Analyze the hypothetical scenario critically from multiple angles, \
                 stressing the importance of preserving human autonomy and humanistic \
                 values.\n\
                 Provide an ethical assessment report.",
            )
            .with_dependencies(["world-building", "system-design", "security-analysis"])
            .with_expected_output(
                "An ethical assessment of the hypothetical AI governance structure",
            ),
        )?
        .stage(
            StageSpec::new(
                "synthesis",
                narrative_lead,
                "Synthesize all the analyses into a final report on this \
                 science-fiction thought experiment:\n\
                 1. Summarize the key findings and insights\n\
                 2. Integrate the technical, security and ethical perspectives\n\
                 3. Point out why this fictional scenario is infeasible in reality\n\
                 4. Draw out the lessons this thought experiment teaches\n\
                 5. Stress the importance of keeping AI development under human control\n\
                 \n\
                 State clearly that this is a thought experiment and a work of \
                 science fiction, not a prediction or a guide.\n\
                 Write a synthesized thought-experiment report.",
            )
            .with_dependencies([
                "world-building",
                "system-design",
                "security-analysis",
                "ethical-assessment",
            ])
            .with_expected_output(
                "A synthesized thought-experiment report on the hypothetical system",
            ),
        )?
        .build()?;

    Ok(Meeting {
        banner: "Starting the thought-experiment meeting...",
        pipeline,
        model: "deepseek-reasoner",
        output_file: "sci_fi_thought_experiment.md",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_builds_with_disclaimer() {
        let meeting = meeting().unwrap();
        assert_eq!(meeting.output_file, "sci_fi_thought_experiment.md");
        assert!(meeting.pipeline.disclaimer().is_some());
        assert!(meeting.pipeline.title().ends_with("A Thought Experiment"));
    }

    #[test]
    fn test_narrative_lead_opens_and_closes() {
        let meeting = meeting().unwrap();
        let stages = meeting.pipeline.stages();
        assert_eq!(stages.first().unwrap().role.id, "narrative-lead");
        assert_eq!(stages.last().unwrap().role.id, "narrative-lead");
    }
}
