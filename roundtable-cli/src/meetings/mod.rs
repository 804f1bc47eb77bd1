//! The baked-in meeting variants.

pub mod future_society;
pub mod product_kickoff;
pub mod scenario_lab;

use roundtable::pipeline::Pipeline;

/// A fully configured meeting variant.
#[derive(Debug, Clone)]
pub struct Meeting {
    /// Line printed when the meeting starts.
    pub banner: &'static str,
    /// The validated pipeline for this variant.
    pub pipeline: Pipeline,
    /// Model identifier requested from the provider.
    pub model: &'static str,
    /// Relative path of the written report.
    pub output_file: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_meetings() -> Vec<Meeting> {
        vec![
            product_kickoff::meeting().unwrap(),
            future_society::meeting().unwrap(),
            scenario_lab::meeting().unwrap(),
        ]
    }

    #[test]
    fn test_every_variant_builds_five_stages() {
        for meeting in all_meetings() {
            assert_eq!(meeting.pipeline.stage_count(), 5, "{}", meeting.pipeline.name());
        }
    }

    #[test]
    fn test_final_stage_depends_on_all_earlier_stages() {
        for meeting in all_meetings() {
            let stages = meeting.pipeline.stages();
            let last = stages.last().unwrap();
            let earlier: Vec<&str> = stages[..stages.len() - 1]
                .iter()
                .map(|s| s.id.as_str())
                .collect();
            assert_eq!(last.dependencies, earlier, "{}", meeting.pipeline.name());
        }
    }

    #[test]
    fn test_output_files_are_distinct() {
        let meetings = all_meetings();
        let mut files: Vec<&str> = meetings.iter().map(|m| m.output_file).collect();
        files.sort_unstable();
        files.dedup();
        assert_eq!(files.len(), meetings.len());
    }

    #[test]
    fn test_descriptions_embed_the_topic() {
        // Every variant's opening stage frames the topic explicitly.
        for meeting in all_meetings() {
            let first = &meeting.pipeline.stages()[0];
            assert!(
                first.description.contains("{topic}"),
                "{}",
                meeting.pipeline.name()
            );
        }
    }
}
