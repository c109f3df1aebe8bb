use stallpick::models::{Dataset, Home, Stall, TimeWindow};
use stallpick::services::Chooser;
use std::sync::{Arc, Mutex};

pub const EVERY_DAY: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Create a stall open every day between `open` and `close`
#[allow(dead_code)]
pub fn create_all_week_stall(name: &str, location: &str, open: &str, close: &str) -> Stall {
    Stall::new(name, location, &EVERY_DAY, TimeWindow::new(open, close))
}

/// Dataset with a single home per list
#[allow(dead_code)]
pub fn create_dataset(
    home_a: &str,
    stalls_a: Vec<Stall>,
    home_b: &str,
    stalls_b: Vec<Stall>,
) -> Arc<Dataset> {
    Arc::new(Dataset {
        home_a: vec![Home::new(home_a)],
        home_b: vec![Home::new(home_b)],
        stalls_a,
        stalls_b,
    })
}

/// Returns the scripted indices in order, then keeps repeating the last one.
/// Records the candidate count it was offered on every call.
#[allow(dead_code)]
pub struct ScriptedChooser {
    indices: Vec<usize>,
    pub offered: Arc<Mutex<Vec<usize>>>,
}

#[allow(dead_code)]
impl ScriptedChooser {
    pub fn new(indices: Vec<usize>) -> Self {
        ScriptedChooser {
            indices,
            offered: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Chooser for ScriptedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.offered.lock().unwrap().push(len);
        if self.indices.len() > 1 {
            self.indices.remove(0)
        } else {
            self.indices.first().copied().unwrap_or(0)
        }
    }
}

/// Path to the sample dataset shipped with the repo
#[allow(dead_code)]
pub fn sample_dataset_path() -> String {
    format!("{}/data/stalls.json", env!("CARGO_MANIFEST_DIR"))
}
