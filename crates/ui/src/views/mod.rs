mod question;
mod results;
mod state;

pub use question::QuestionView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use test::TestView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
