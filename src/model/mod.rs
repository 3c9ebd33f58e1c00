pub mod builder;
pub mod filter;
pub mod frequency;
pub mod types;

// Re-export specific structs for easier access
pub use self::builder::{BuildOutcome, ModelBuilder, DEFAULT_WINDOW_SIZES};
pub use self::filter::{FilterClause, FilterKind, FilterSet};
pub use self::frequency::MAX_WINDOW_SIZE;
pub use self::types::{ModelSet, Ngram, Role, StatisticalModel, User, UserSet, WordFrequency};
