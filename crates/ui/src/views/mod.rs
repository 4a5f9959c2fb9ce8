mod challenge_detail;
mod challenge_list;
mod login;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use challenge_detail::ChallengeDetailView;
pub use challenge_list::ChallengeListView;
pub use login::LoginView;
pub use state::{ViewError, ViewState, view_state_from_resource};
