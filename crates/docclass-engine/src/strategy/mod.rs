//! Decision strategies, one per scoring profile.
//!
//! Every strategy is a pure function of a record's canonical tokens and the
//! immutable term tables; none of them can fail.

pub mod class_vote;
pub mod margin;
pub mod vote;

pub use class_vote::ClassVoteStrategy;
pub use margin::MarginStrategy;
pub use vote::VoteStrategy;
