// Single source of truth for all default values.

// --- Engine ---
pub const DEFAULT_SEPARATORS: &str = "|;,/";
pub const DEFAULT_EVIDENCE_LIMIT: usize = 10;

// --- Margin profile ---
pub const DEFAULT_THRESHOLD: f64 = 1.0;

// --- Vote profile / MeSH refinement ---
pub const DEFAULT_DELTA: f64 = 0.5;
pub const DEFAULT_K_MIN: usize = 3;
pub const DEFAULT_UNKNOWN_MODE: bool = false;
pub const DEFAULT_PREFER_PUBMED_EPSILON: f64 = 0.0;
pub const DEFAULT_TOP_MESH_TERMS: usize = 5;

// --- Class-vote profile ---
pub const DEFAULT_MIN_REVIEW_SCORE: f64 = 1.0;
pub const DEFAULT_MIN_UNKNOWN_SCORE: f64 = 2.0;
pub const DEFAULT_MIN_EXPERIMENTAL_SCORE: f64 = 1.0;
