//! Searchable text derived from tool descriptors.

use crate::types::ToolDescriptor;

/// Verbs recognised in tool names and indexed as dedicated action tokens.
pub const ACTION_TYPES: [&str; 6] = ["create", "update", "delete", "get", "list", "search"];

/// Number of times the tool name is repeated to weight name matches.
const NAME_REPEAT: usize = 3;

/// Indexed text for one tool.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusEntry {
    pub name: String,
    /// First `_`-delimited segment of the name (`hris` in `hris_list_employees`).
    pub category: String,
    pub actions: Vec<String>,
    pub text: String,
}

impl CorpusEntry {
    pub fn from_descriptor(descriptor: &ToolDescriptor) -> Self {
        let segments: Vec<&str> = descriptor.name_segments().collect();
        let category = segments.first().copied().unwrap_or_default().to_string();

        let actions: Vec<String> = ACTION_TYPES
            .iter()
            .filter(|action| {
                segments
                    .iter()
                    .any(|segment| segment.eq_ignore_ascii_case(action))
            })
            .map(|action| action.to_string())
            .collect();

        let mut parts: Vec<&str> = Vec::with_capacity(NAME_REPEAT + 3 + segments.len());
        parts.extend(std::iter::repeat_n(descriptor.name.as_str(), NAME_REPEAT));
        parts.push(&category);
        parts.extend(actions.iter().map(String::as_str));
        parts.push(&descriptor.description);
        parts.extend(segments.iter().copied());

        let text = parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            name: descriptor.name.clone(),
            category,
            actions,
            text,
        }
    }
}

/// Builds corpus entries in catalog order.
pub fn build_corpus<'a>(descriptors: impl IntoIterator<Item = &'a ToolDescriptor>) -> Vec<CorpusEntry> {
    descriptors
        .into_iter()
        .map(CorpusEntry::from_descriptor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::search::tokenize;

    fn descriptor(name: &str, description: &str) -> ToolDescriptor {
        ToolDescriptor::new(name, description, serde_json::json!({"type": "object"}))
    }

    #[test]
    fn test_entry_layout() {
        let entry =
            CorpusEntry::from_descriptor(&descriptor("hris_list_employees", "List all employees"));

        assert_eq!(entry.name, "hris_list_employees");
        assert_eq!(entry.category, "hris");
        assert_eq!(entry.actions, vec!["list"]);
        assert_eq!(
            entry.text,
            "hris_list_employees hris_list_employees hris_list_employees hris list \
             List all employees hris list employees"
        );
    }

    #[test]
    fn test_name_weighted_three_times() {
        let entry = CorpusEntry::from_descriptor(&descriptor("crm_get_deal", "Fetch a deal"));
        let tokens = tokenize(&entry.text);
        let name_count = tokens.iter().filter(|t| *t == "crm_get_deal").count();
        assert_eq!(name_count, 3);
    }

    #[test]
    fn test_multiple_actions_in_canonical_order() {
        let entry = CorpusEntry::from_descriptor(&descriptor("search_or_create_lead", ""));
        assert_eq!(entry.actions, vec!["create", "search"]);
        assert_eq!(entry.category, "search");
    }

    #[test]
    fn test_no_action_tokens() {
        let entry = CorpusEntry::from_descriptor(&descriptor("ats_jobs", "Job postings"));
        assert!(entry.actions.is_empty());
    }

    #[test]
    fn test_build_corpus_preserves_order() {
        let tools = [descriptor("b_tool", ""), descriptor("a_tool", "")];
        let names: Vec<_> = build_corpus(&tools).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["b_tool", "a_tool"]);
    }
}
