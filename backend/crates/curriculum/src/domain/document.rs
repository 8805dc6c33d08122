//! Curriculum Document Tree
//!
//! Typed representation of a module JSON file, validated at load time.
//! Maps are BTreeMaps so that serializing a document is deterministic.
//! Fields the tree does not model are kept in flattened `extra` maps and
//! round-trip unchanged through `/api/getmodule`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One module JSON file. The file nests its module under a `modules` map
/// keyed by the module's own id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDocument {
    #[serde(default)]
    pub modules: BTreeMap<String, Module>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A module: a titled, ordered collection of parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub title: String,

    #[serde(default)]
    pub parts: BTreeMap<String, Part>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A part: an ordered collection of questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub questions: Vec<Question>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A question: prompt content with an optional title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The slice served for one part: the owning module's title plus the
/// part's questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartSlice {
    pub title: String,
    pub questions: Vec<Question>,
}

impl ModuleDocument {
    /// Look up a module by its exact key. No case or whitespace
    /// normalization is applied.
    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.get(module_id)
    }

    /// Extract the part slice for `(module_id, part_id)`.
    ///
    /// Returns `None` for a missing module, a missing part, and a part
    /// with no questions alike.
    pub fn part_slice(&self, module_id: &str, part_id: &str) -> Option<PartSlice> {
        let module = self.modules.get(module_id)?;
        let part = module.parts.get(part_id)?;

        if part.questions.is_empty() {
            return None;
        }

        Some(PartSlice {
            title: module.title.clone(),
            questions: part.questions.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> ModuleDocument {
        serde_json::from_str(
            r#"{
                "modules": {
                    "1": {
                        "title": "Linear Equations",
                        "parts": {
                            "1": {
                                "questions": [
                                    {"title": "Warmup", "prompt": "Solve x + 2 = 5"},
                                    {"prompt": "Solve 2x = 8"}
                                ]
                            },
                            "2": {"questions": []}
                        }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_part_slice_returns_module_title() {
        let doc = sample_document();
        let slice = doc.part_slice("1", "1").unwrap();
        assert_eq!(slice.title, "Linear Equations");
        assert_eq!(slice.questions.len(), 2);
        assert_eq!(slice.questions[0].title.as_deref(), Some("Warmup"));
    }

    #[test]
    fn test_missing_part_and_empty_part_are_alike() {
        let doc = sample_document();
        // Part "2" exists but has no questions; part "9" does not exist
        assert!(doc.part_slice("1", "2").is_none());
        assert!(doc.part_slice("1", "9").is_none());
        assert!(doc.part_slice("7", "1").is_none());
    }

    #[test]
    fn test_lookup_keys_are_exact() {
        let doc = serde_json::from_str::<ModuleDocument>(
            r#"{"modules": {"Alg": {"title": "Algebra", "parts": {}}}}"#,
        )
        .unwrap();
        assert!(doc.module("Alg").is_some());
        assert!(doc.module("alg").is_none());
        assert!(doc.module(" Alg").is_none());
    }

    #[test]
    fn test_unmodeled_fields_round_trip() {
        let raw = r#"{"modules":{"1":{"title":"T","parts":{},"difficulty":"easy"}},"version":3}"#;
        let doc: ModuleDocument = serde_json::from_str(raw).unwrap();

        assert_eq!(doc.extra.get("version"), Some(&Value::from(3)));
        let module = doc.module("1").unwrap();
        assert_eq!(module.extra.get("difficulty"), Some(&Value::from("easy")));

        let reserialized = serde_json::to_value(&doc).unwrap();
        assert_eq!(reserialized["version"], Value::from(3));
        assert_eq!(reserialized["modules"]["1"]["difficulty"], "easy");
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let doc = sample_document();
        let first = serde_json::to_string(&doc).unwrap();
        let second = serde_json::to_string(&doc).unwrap();
        assert_eq!(first, second);
    }
}
