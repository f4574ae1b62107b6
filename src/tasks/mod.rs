pub mod results_poller;

pub use results_poller::{PresenterState, ResultsPoller, UPDATE_INTERVAL};
