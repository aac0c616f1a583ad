pub mod error;
pub mod forms;
pub mod impact;
pub mod parsing;
pub mod types;

// Re-exports
pub use error::ParseError;
pub use forms::{parse_filing, FormType, ParsedFiling};
pub use impact::{ImpactAssessment, MarketImpact};
pub use types::{BasicDocumentInfo, ConsistentDocumentFields, ParsedDocument, UueFile};
