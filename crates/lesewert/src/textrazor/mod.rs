//! Optional TextRazor integration.
//!
//! When an API key is configured, the analyzer asks TextRazor for topics and
//! entities and uses the filtered topics as keywords. Every failure mode
//! (transport, status, decode, empty topics) degrades to local frequency
//! extraction without failing the request.

pub mod client;
pub mod types;

pub use client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, TextRazorClient, TextRazorConfig};
pub use types::{MAX_ENTITIES, MAX_TOPICS, MIN_ENTITY_CONFIDENCE, MIN_TOPIC_SCORE, TopicExtraction};
