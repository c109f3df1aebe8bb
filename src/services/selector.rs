use crate::error::{AppError, Result};
use crate::models::Stall;
use crate::services::availability::is_open;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time::PrimitiveDateTime;

/// Picks one index out of `len` candidates. `len` is always at least 1.
pub trait Chooser: Send {
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Uniform choice backed by `rand`.
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn new() -> Self {
        RandomChooser {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        RandomChooser {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl Chooser for RandomChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Stalls that are open at `at` and whose location parses.
pub fn qualifying_stalls(stalls: &[Stall], at: PrimitiveDateTime) -> Vec<&Stall> {
    stalls
        .iter()
        .filter(|stall| is_open(stall, at) && stall.coordinates().is_some())
        .collect()
}

/// Choose one qualifying stall. `list_name` only feeds the error message.
pub fn pick_stall<'a>(
    stalls: &'a [Stall],
    at: PrimitiveDateTime,
    chooser: &mut dyn Chooser,
    list_name: &str,
) -> Result<&'a Stall> {
    let candidates = qualifying_stalls(stalls, at);
    if candidates.is_empty() {
        tracing::debug!("No qualifying stalls in {} at {}", list_name, at);
        return Err(AppError::NoOpenStalls(list_name.to_string()));
    }

    let mut index = chooser.choose_index(candidates.len());
    if index >= candidates.len() {
        tracing::warn!(
            "Chooser returned index {} for {} candidates, using the first",
            index,
            candidates.len()
        );
        index = 0;
    }
    let picked = candidates[index];
    tracing::debug!(
        "Picked '{}' ({} of {} candidates in {})",
        picked.name,
        index + 1,
        candidates.len(),
        list_name
    );
    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeWindow;
    use time::macros::datetime;

    struct Scripted(Vec<usize>);

    impl Chooser for Scripted {
        fn choose_index(&mut self, _len: usize) -> usize {
            self.0.remove(0)
        }
    }

    fn stall(name: &str, location: &str, days: &[&str]) -> Stall {
        Stall::new(name, location, days, TimeWindow::new("09:00", "18:00"))
    }

    fn mixed_list() -> Vec<Stall> {
        vec![
            stall("open-1", "1.30,103.80", &["Mon"]),
            stall("closed", "1.31,103.81", &["Tue"]),
            stall("no-location", "somewhere", &["Mon"]),
            stall("open-2", "1.32,103.82", &["Mon"]),
        ]
    }

    #[test]
    fn test_qualifying_excludes_closed_and_unparseable() {
        let stalls = mixed_list();
        let names: Vec<&str> = qualifying_stalls(&stalls, datetime!(2024-01-01 12:00))
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["open-1", "open-2"]);
    }

    #[test]
    fn test_pick_uses_chooser_index() {
        let stalls = mixed_list();
        let mut chooser = Scripted(vec![1, 0]);
        let at = datetime!(2024-01-01 12:00);

        let first = pick_stall(&stalls, at, &mut chooser, "stallsA").unwrap();
        assert_eq!(first.name, "open-2");
        let second = pick_stall(&stalls, at, &mut chooser, "stallsA").unwrap();
        assert_eq!(second.name, "open-1");
    }

    #[test]
    fn test_out_of_range_index_falls_back_to_first() {
        let stalls = mixed_list();
        let at = datetime!(2024-01-01 12:00);
        let mut chooser = Scripted(vec![usize::MAX, 2]);

        let first = pick_stall(&stalls, at, &mut chooser, "stallsA").unwrap();
        assert_eq!(first.name, "open-1");
        let second = pick_stall(&stalls, at, &mut chooser, "stallsA").unwrap();
        assert_eq!(second.name, "open-1");
    }

    #[test]
    fn test_pick_all_closed_signals_empty() {
        let stalls = mixed_list();
        let mut chooser = Scripted(vec![]);
        let err = pick_stall(&stalls, datetime!(2024-01-03 12:00), &mut chooser, "stallsB")
            .unwrap_err();
        assert!(matches!(err, AppError::NoOpenStalls(ref list) if list == "stallsB"));
    }

    #[test]
    fn test_pick_empty_list_signals_empty() {
        let mut chooser = RandomChooser::seeded(7);
        assert!(pick_stall(&[], datetime!(2024-01-01 12:00), &mut chooser, "stallsA").is_err());
    }

    #[test]
    fn test_random_pick_always_from_qualifying_subset() {
        let stalls = mixed_list();
        let at = datetime!(2024-01-01 12:00);
        let mut chooser = RandomChooser::new();
        for _ in 0..200 {
            let picked = pick_stall(&stalls, at, &mut chooser, "stallsA").unwrap();
            assert!(picked.name == "open-1" || picked.name == "open-2");
        }
    }

    #[test]
    fn test_random_chooser_covers_every_index() {
        let mut chooser = RandomChooser::seeded(42);
        let mut seen = [0usize; 4];
        for _ in 0..4000 {
            seen[chooser.choose_index(4)] += 1;
        }
        // Uniform within a loose band.
        for count in seen {
            assert!((800..1200).contains(&count), "{seen:?}");
        }
    }

    #[test]
    fn test_seeded_chooser_is_reproducible() {
        let mut a = RandomChooser::seeded(9);
        let mut b = RandomChooser::seeded(9);
        let xs: Vec<usize> = (0..20).map(|_| a.choose_index(10)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.choose_index(10)).collect();
        assert_eq!(xs, ys);
    }
}
