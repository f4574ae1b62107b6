use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};

use crate::presenter::{Render, ResultsSource, ResultsView, error_message};

pub const UPDATE_INTERVAL: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq)]
pub enum PresenterState {
    Idle,
    Fetching,
    Displaying(ResultsView),
    ErrorDisplay(ResultsView),
}

pub struct ResultsPoller<S, R> {
    source: S,
    renderer: R,
    state: PresenterState,
}

impl<S: ResultsSource, R: Render> ResultsPoller<S, R> {
    pub fn new(source: S, renderer: R) -> Self {
        Self {
            source,
            renderer,
            state: PresenterState::Idle,
        }
    }

    pub fn state(&self) -> &PresenterState {
        &self.state
    }

    pub fn into_parts(self) -> (S, R) {
        (self.source, self.renderer)
    }

    /// One fetch-and-render cycle. Failures only change what is displayed.
    pub async fn tick(&mut self) -> &PresenterState {
        self.state = PresenterState::Fetching;

        self.state = match self.source.fetch().await {
            Ok(summary) => {
                debug!("Received results: {:?}", summary);
                PresenterState::Displaying(ResultsView::from_summary(&summary))
            }
            Err(e) => {
                warn!("Error fetching results: {}", e);
                PresenterState::ErrorDisplay(ResultsView::unavailable(error_message(&e)))
            }
        };

        match &self.state {
            PresenterState::Displaying(view) | PresenterState::ErrorDisplay(view) => {
                self.renderer.render(view)
            }
            PresenterState::Idle | PresenterState::Fetching => {}
        }

        &self.state
    }

    /// Fetch now, then every `UPDATE_INTERVAL` until `shutdown` flips to true
    /// or its sender goes away. A cycle always finishes before the next tick
    /// is awaited, so fetches never overlap.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Self {
        info!("Polling results every {} ms", UPDATE_INTERVAL.as_millis());
        let mut ticker = interval(UPDATE_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = ticker.tick() => {
                    self.tick().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        info!("Results polling stopped");
        self
    }
}
