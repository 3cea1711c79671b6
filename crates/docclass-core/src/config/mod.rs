//! Configuration system. TOML-based, layered: CLI > env > file > defaults.

pub mod class_vote_config;
pub mod defaults;
pub mod docclass_config;
pub mod engine_config;
pub mod margin_config;
pub mod paths_config;
pub mod vote_config;

pub use class_vote_config::ClassVoteConfig;
pub use docclass_config::{CliOverrides, DocclassConfig};
pub use engine_config::{EngineConfig, ProfileKind};
pub use margin_config::MarginConfig;
pub use paths_config::PathsConfig;
pub use vote_config::VoteConfig;
