use crate::constants::DISTANCE_DISPLAY_DECIMALS;
use crate::error::AppError;
use crate::models::{Dataset, DistanceKm, HomeChoice, Stall};
use crate::services::clock::{Clock, SystemClock};
use crate::services::directions::{directions_url, MapLauncher, SystemLauncher};
use crate::services::selector::{pick_stall, qualifying_stalls, Chooser, RandomChooser};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// What the user currently sees. Replaced as a whole after every action.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SessionState {
    pub home_choice: HomeChoice,
    pub selected_stall: Option<Stall>,
    pub distance_km: Option<DistanceKm>,
    pub directions_url: Option<String>,
    pub error: Option<String>,
}

/// Drives picks for one user. Actions take `&mut self`, so callers are
/// expected to issue them one at a time.
pub struct Session {
    dataset: Arc<Dataset>,
    clock: Box<dyn Clock>,
    chooser: Box<dyn Chooser>,
    launcher: Arc<dyn MapLauncher>,
    state: SessionState,
    launch_errors_tx: mpsc::UnboundedSender<String>,
    launch_errors_rx: mpsc::UnboundedReceiver<String>,
}

impl Session {
    pub fn new(dataset: Arc<Dataset>, home_choice: HomeChoice) -> Self {
        let (launch_errors_tx, launch_errors_rx) = mpsc::unbounded_channel();
        Session {
            dataset,
            clock: Box::new(SystemClock::default()),
            chooser: Box::new(RandomChooser::new()),
            launcher: Arc::new(SystemLauncher::default()),
            state: SessionState {
                home_choice,
                ..SessionState::default()
            },
            launch_errors_tx,
            launch_errors_rx,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_chooser(mut self, chooser: impl Chooser + 'static) -> Self {
        self.chooser = Box::new(chooser);
        self
    }

    pub fn with_launcher(mut self, launcher: Arc<dyn MapLauncher>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn home_choice(&self) -> HomeChoice {
        self.state.home_choice
    }

    /// Switch home list and stall list. The previous pick stays on screen
    /// until the next [`Session::pick`].
    pub fn set_home_choice(&mut self, choice: HomeChoice) {
        self.apply_launch_errors();
        tracing::debug!("Home choice {} -> {}", self.state.home_choice, choice);
        self.state = SessionState {
            home_choice: choice,
            ..self.state.clone()
        };
    }

    /// Pick a random open stall from the current list and work out how to
    /// get there.
    pub fn pick(&mut self) -> &SessionState {
        self.apply_launch_errors();

        let now = self.clock.now();
        let choice = self.state.home_choice;
        let stalls = self.dataset.stalls(choice);

        let next = match pick_stall(stalls, now, self.chooser.as_mut(), choice.stall_list_name()) {
            Err(e) => SessionState {
                home_choice: choice,
                selected_stall: None,
                distance_km: None,
                directions_url: None,
                error: Some(e.user_message()),
            },
            Ok(stall) => {
                let route = self
                    .dataset
                    .home_location(choice)
                    .zip(stall.parsed_location());

                let (distance_km, link) = match route {
                    Some((home, destination)) => {
                        let distance = home
                            .coordinates
                            .distance_km(&destination.coordinates)
                            .rounded(DISTANCE_DISPLAY_DECIMALS);
                        let url = directions_url(&home, &destination);
                        (Some(distance), Some(url))
                    }
                    None => {
                        tracing::debug!(
                            "No distance for '{}': {} or stall location unresolved",
                            stall.name,
                            choice.home_list_name()
                        );
                        (None, None)
                    }
                };

                SessionState {
                    home_choice: choice,
                    selected_stall: Some(stall.clone()),
                    distance_km,
                    directions_url: link,
                    error: None,
                }
            }
        };

        self.state = next;
        &self.state
    }

    /// Stalls in the current list that could be picked right now.
    pub fn open_now(&self) -> Vec<&Stall> {
        let now = self.clock.now();
        qualifying_stalls(self.dataset.stalls(self.state.home_choice), now)
    }

    /// Hand the current directions link to the map launcher without waiting
    /// for it. A failure shows up in the error slot on the next action or
    /// [`Session::refresh`]. Returns `None` when there is no link.
    pub fn open_directions(&mut self) -> Option<JoinHandle<()>> {
        self.apply_launch_errors();

        let url = self.state.directions_url.clone()?;
        let launcher = Arc::clone(&self.launcher);
        let errors = self.launch_errors_tx.clone();

        Some(tokio::spawn(async move {
            if let Err(e) = launcher.open(&url).await {
                tracing::warn!("{}", e);
                let message = if matches!(e, AppError::Launch(_)) {
                    e.user_message()
                } else {
                    AppError::Launch(e.to_string()).user_message()
                };
                // The session may already be gone; nothing left to report to.
                let _ = errors.send(message);
            }
        }))
    }

    /// Like [`Session::open_directions`], but waits for the launcher so a
    /// failure is already in the returned state. Returns `None` when there
    /// is no link.
    pub async fn open_directions_and_wait(&mut self) -> Option<&SessionState> {
        let handle = self.open_directions()?;
        if let Err(e) = handle.await {
            tracing::warn!("Map launcher task did not finish: {}", e);
        }
        Some(self.refresh())
    }

    /// Fold in any launcher failures that arrived since the last action.
    pub fn refresh(&mut self) -> &SessionState {
        self.apply_launch_errors();
        &self.state
    }

    fn apply_launch_errors(&mut self) {
        let mut latest = None;
        while let Ok(message) = self.launch_errors_rx.try_recv() {
            latest = Some(message);
        }
        if let Some(message) = latest {
            self.state = SessionState {
                error: Some(message),
                ..self.state.clone()
            };
        }
    }
}
