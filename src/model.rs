use serde::{Deserialize, Serialize};

/// Outcome of one pipeline run.
///
/// The wire format is an open set of strings; anything that is not
/// `"Passed"` or `"Failed"` collapses to [`RunResult::Unknown`] so a new
/// server-side status can never break deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RunResult {
    Passed,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Record of one past run, newest-first in a pipeline's history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HistoryEntry {
    #[serde(default)]
    pub result: RunResult,
}

/// A named collection of pipelines, as returned by the group listing.
///
/// The order of `pipelines` defines the display order on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PipelineGroup {
    pub name: String,
    pub pipelines: Vec<String>,
}

/// One pipeline joined with its fetched history, rebuilt every refresh
/// cycle and handed to the layout engine. A pipeline whose history fetch
/// failed carries an empty `histories`.
#[derive(Debug, Clone)]
pub struct RenderablePipeline {
    pub name: String,
    pub histories: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_listing_deserializes_pascal_case() {
        let groups: Vec<PipelineGroup> =
            serde_json::from_str(r#"[{"Name":"build","Pipelines":["api","web"]}]"#).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "build");
        assert_eq!(groups[0].pipelines, vec!["api", "web"]);
    }

    #[test]
    fn test_history_result_known_tags() {
        let history: Vec<HistoryEntry> =
            serde_json::from_str(r#"[{"Result":"Passed"},{"Result":"Failed"}]"#).unwrap();

        assert_eq!(history[0].result, RunResult::Passed);
        assert_eq!(history[1].result, RunResult::Failed);
    }

    #[test]
    fn test_history_result_unrecognized_tag_is_unknown() {
        let history: Vec<HistoryEntry> =
            serde_json::from_str(r#"[{"Result":"Cancelled"}]"#).unwrap();

        assert_eq!(history[0].result, RunResult::Unknown);
    }

    #[test]
    fn test_history_result_missing_field_is_unknown() {
        let history: Vec<HistoryEntry> = serde_json::from_str(r#"[{}]"#).unwrap();

        assert_eq!(history[0].result, RunResult::Unknown);
    }
}
