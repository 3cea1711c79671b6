/// docclass version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical publication-type token that forces `unknown` under the margin profile.
pub const PROTOCOL_TOKEN: &str = "protocol";

/// Canonical publication-type token for the meta-analysis override.
pub const META_ANALYSIS_TOKEN: &str = "meta-analysis";

/// Canonical publication-type token for the guideline override.
pub const GUIDELINE_TOKEN: &str = "guideline";

/// MeSH descriptor that must accompany a guideline for the guideline override.
pub const GUIDELINE_TOPIC_DESCRIPTOR: &str = "practice guidelines as topic";

/// Raw cell values treated as absent.
pub const NULL_LIKE_VALUES: &[&str] = &["nan", "none", "null", "n/a"];

/// Decimal places used when rendering scores for logs and output files.
pub const DISPLAY_DECIMALS: i32 = 3;
