//! Project kickoff meeting: market analysis through project proposal.

use super::Meeting;
use roundtable::client::GenerationOptions;
use roundtable::errors::ConfigError;
use roundtable::pipeline::PipelineBuilder;
use roundtable::role::Role;
use roundtable::stage::StageSpec;
use std::sync::Arc;

const TOPIC: &str = "An AI-powered personal reading assistant";

/// Builds the project kickoff meeting.
pub fn meeting() -> Result<Meeting, ConfigError> {
    let product_manager = Arc::new(Role::new(
        "product-manager",
        "Define an innovative and feasible product plan",
        "You are an experienced product manager, skilled at capturing market needs \
         and turning them into product features. You lead the product definition in \
         this meeting, making sure the product is innovative while still meeting \
         real user needs.",
    ));
    let tech_architect = Arc::new(Role::new(
        "tech-architect",
        "Design a technically feasible and efficient system architecture",
        "You are a senior technical architect, fluent in a wide range of technology \
         stacks and architecture patterns. You assess the technical feasibility of \
         product requirements and propose the best implementation approach.",
    ));
    let market_analyst = Arc::new(Role::new(
        "market-analyst",
        "Provide accurate market insight and competitor analysis",
        "You are a sharp market analyst, skilled at studying market trends and the \
         competitive landscape. You analyze the needs and opportunities of the \
         target market and the strengths and weaknesses of similar products.",
    ));
    let ux_designer = Arc::new(Role::new(
        "ux-designer",
        "Make sure the product offers an excellent user experience",
        "You are a creative user experience designer, skilled at intuitive and \
         engaging interactions. You weigh the product's ease of use and user \
         satisfaction, and contribute design recommendations.",
    ));

    let pipeline = PipelineBuilder::new("product-kickoff", TOPIC)
        .title(format!("{TOPIC} - Project Proposal"))
        .defaults(GenerationOptions::new(1.0, 8000))
        .stage(
            StageSpec::new(
                "market-analysis",
                market_analyst,
                "Analyze the market opportunity for '{topic}':\n\
                 1. Target market size and growth trends\n\
                 2. Main competitors and their strengths and weaknesses\n\
                 3. Potential user pain points and needs\n\
                 4. Opportunities for market differentiation\n\
                 \n\
                 Produce a short market analysis report.",
            )
            .with_expected_output(
                "A market analysis report covering market size, competitive landscape, \
                 user needs and differentiation opportunities",
            ),
        )?
        .stage(
            StageSpec::new(
                "product-definition",
                Arc::clone(&product_manager),
                "Based on the market analysis, define the product plan for '{topic}':\n\
                 1. Core features and capabilities\n\
                 2. Target user groups\n\
                 3. Value proposition\n\
                 4. Product vision and goals\n\
                 \n\
                 Use the market analysis results to complete this task.\n\
                 Produce a product definition document.",
            )
            .with_dependencies(["market-analysis"])
            .with_expected_output(
                "A product definition document with the feature list, target users, \
                 value proposition and product vision",
            ),
        )?
        .stage(
            StageSpec::new(
                "tech-solution",
                tech_architect,
                "Based on the product definition, design the technical solution for '{topic}':\n\
                 1. System architecture\n\
                 2. Technology stack choices\n\
                 3. Implementation approach for the core features\n\
                 4. Technical risks and their mitigations\n\
                 \n\
                 Use the product definition results to complete this task.\n\
                 Produce a technical implementation plan.",
            )
            .with_dependencies(["product-definition"])
            .with_expected_output(
                "A technical implementation plan covering architecture, stack, \
                 implementation approach and risk countermeasures",
            ),
        )?
        .stage(
            StageSpec::new(
                "ux-design",
                ux_designer,
                "Based on the product definition and the technical solution, propose \
                 the user experience design for '{topic}':\n\
                 1. Key user interface elements\n\
                 2. User flows and interactions\n\
                 3. Emotional design considerations\n\
                 4. Usability principles\n\
                 \n\
                 Use the product definition and technical solution results to complete \
                 this task.\n\
                 Produce a user experience design outline.",
            )
            .with_dependencies(["product-definition", "tech-solution"])
            .with_expected_output(
                "A user experience design outline covering interface elements, user \
                 flows, emotional design and usability principles",
            ),
        )?
        .stage(
            StageSpec::new(
                "project-proposal",
                product_manager,
                "Integrate all the analysis and design results into a complete project \
                 proposal for '{topic}':\n\
                 1. Project overview\n\
                 2. Market analysis summary\n\
                 3. Product features and capabilities\n\
                 4. Technical implementation roadmap\n\
                 5. User experience highlights\n\
                 6. Project resource requirements\n\
                 7. Risk assessment\n\
                 8. Implementation plan\n\
                 \n\
                 This is the final outcome of the meeting and must draw on all of the \
                 earlier analysis and design results.\n\
                 Produce a complete project proposal document.",
            )
            .with_dependencies([
                "market-analysis",
                "product-definition",
                "tech-solution",
                "ux-design",
            ])
            .with_expected_output("A complete project proposal document"),
        )?
        .build()?;

    Ok(Meeting {
        banner: "Starting the project kickoff meeting...",
        pipeline,
        model: "deepseek-reasoner",
        output_file: "meeting_result.md",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_builds() {
        let meeting = meeting().unwrap();
        assert_eq!(meeting.model, "deepseek-reasoner");
        assert_eq!(meeting.output_file, "meeting_result.md");
        assert!(meeting.pipeline.title().ends_with("Project Proposal"));
    }

    #[test]
    fn test_product_manager_speaks_twice() {
        let meeting = meeting().unwrap();
        let count = meeting
            .pipeline
            .stages()
            .iter()
            .filter(|s| s.role.id == "product-manager")
            .count();
        assert_eq!(count, 2);
    }
}
