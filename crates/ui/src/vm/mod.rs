mod challenge_vm;
mod completed_vm;
mod time_fmt;

pub use challenge_vm::{ChallengeCardVm, map_challenge_cards};
pub use completed_vm::{CompletedChallengeVm, map_completed_challenges};
pub use time_fmt::format_seconds;
