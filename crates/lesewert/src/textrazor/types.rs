//! Wire types for the TextRazor extraction service.
//!
//! DTO field names follow the wire format (`entityId`, `confidenceScore`).
//! The filter thresholds and caps applied to a raw response live here next
//! to the types they act on.

use serde::Deserialize;

/// Minimum topic score for a topic to count as a keyword.
pub const MIN_TOPIC_SCORE: f64 = 0.5;

/// Minimum confidence for an entity to be retained.
pub const MIN_ENTITY_CONFIDENCE: f64 = 0.5;

/// Maximum number of topics kept as keywords.
pub const MAX_TOPICS: usize = 10;

/// Maximum number of entities kept.
pub const MAX_ENTITIES: usize = 5;

/// Top-level TextRazor reply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextRazorEnvelope {
    #[serde(default)]
    pub response: TextRazorResponse,
}

/// The `response` object of a TextRazor reply.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextRazorResponse {
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// A topic with its relevance score.
///
/// Missing fields decode to the empty label / zero score, which the filters
/// below reject.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub score: f64,
}

/// A recognized entity with its confidence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(default)]
    pub entity_id: String,
    #[serde(default)]
    pub confidence_score: f64,
}

/// Filtered topics and entities extracted from a TextRazor reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicExtraction {
    /// Topic labels passing the score filter, capped at [`MAX_TOPICS`].
    pub keywords: Vec<String>,
    /// Entity identifiers passing the confidence filter, capped at
    /// [`MAX_ENTITIES`].
    pub entities: Vec<String>,
}

impl TextRazorEnvelope {
    /// Apply the score and confidence filters and the result caps.
    pub fn into_extraction(self) -> TopicExtraction {
        let keywords = self
            .response
            .topics
            .into_iter()
            .filter(|topic| !topic.label.is_empty() && topic.score > MIN_TOPIC_SCORE)
            .take(MAX_TOPICS)
            .map(|topic| topic.label)
            .collect();

        let entities = self
            .response
            .entities
            .into_iter()
            .filter(|entity| !entity.entity_id.is_empty() && entity.confidence_score > MIN_ENTITY_CONFIDENCE)
            .take(MAX_ENTITIES)
            .map(|entity| entity.entity_id)
            .collect();

        TopicExtraction { keywords, entities }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: serde_json::Value) -> TextRazorEnvelope {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_decodes_wire_field_names() {
        let envelope = decode(serde_json::json!({
            "response": {
                "topics": [{"label": "Rust", "score": 0.9}],
                "entities": [{"entityId": "Rust_(programming_language)", "confidenceScore": 2.5}]
            }
        }));

        let extraction = envelope.into_extraction();
        assert_eq!(extraction.keywords, vec!["Rust"]);
        assert_eq!(extraction.entities, vec!["Rust_(programming_language)"]);
    }

    #[test]
    fn test_filters_low_scores() {
        let envelope = decode(serde_json::json!({
            "response": {
                "topics": [
                    {"label": "Kept", "score": 0.51},
                    {"label": "Border", "score": 0.5},
                    {"label": "Dropped", "score": 0.2}
                ],
                "entities": [
                    {"entityId": "Kept", "confidenceScore": 0.6},
                    {"entityId": "Dropped", "confidenceScore": 0.5}
                ]
            }
        }));

        let extraction = envelope.into_extraction();
        assert_eq!(extraction.keywords, vec!["Kept"]);
        assert_eq!(extraction.entities, vec!["Kept"]);
    }

    #[test]
    fn test_filters_missing_labels_and_ids() {
        let envelope = decode(serde_json::json!({
            "response": {
                "topics": [
                    {"score": 0.9},
                    {"label": "", "score": 0.9},
                    {"label": "Named", "score": 0.9}
                ],
                "entities": [
                    {"confidenceScore": 0.9},
                    {"entityId": "Named", "confidenceScore": 0.9}
                ]
            }
        }));

        let extraction = envelope.into_extraction();
        assert_eq!(extraction.keywords, vec!["Named"]);
        assert_eq!(extraction.entities, vec!["Named"]);
    }

    #[test]
    fn test_caps_applied_after_filtering() {
        let topics: Vec<serde_json::Value> = (0..15)
            .map(|i| serde_json::json!({"label": format!("topic-{i}"), "score": 0.9}))
            .collect();
        let entities: Vec<serde_json::Value> = (0..8)
            .map(|i| serde_json::json!({"entityId": format!("entity-{i}"), "confidenceScore": 0.9}))
            .collect();

        let extraction = decode(serde_json::json!({
            "response": {"topics": topics, "entities": entities}
        }))
        .into_extraction();

        assert_eq!(extraction.keywords.len(), MAX_TOPICS);
        assert_eq!(extraction.entities.len(), MAX_ENTITIES);
        assert_eq!(extraction.keywords[0], "topic-0");
        assert_eq!(extraction.entities[4], "entity-4");
    }

    #[test]
    fn test_empty_reply_decodes_to_empty_extraction() {
        let extraction = decode(serde_json::json!({})).into_extraction();
        assert!(extraction.keywords.is_empty());
        assert!(extraction.entities.is_empty());

        let extraction = decode(serde_json::json!({"response": {}})).into_extraction();
        assert!(extraction.keywords.is_empty());
        assert!(extraction.entities.is_empty());
    }
}
