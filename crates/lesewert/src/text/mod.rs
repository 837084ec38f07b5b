pub mod optimize;
pub mod readability;
pub mod segment;
pub mod suggestions;
pub mod syllables;
pub mod tokenize;

pub use optimize::weave_keywords;
pub use readability::{difficulty_label, reading_ease};
pub use segment::{sentence_count, split_with_terminators, word_count};
pub use suggestions::build_suggestions;
pub use syllables::{count_syllables, word_syllables};
pub use tokenize::tokenize;
