pub mod coordinates;
pub mod dataset;
pub mod distance;
pub mod schedule;
pub mod stall;

pub use coordinates::{Coordinates, Location};
pub use dataset::Dataset;
pub use distance::DistanceKm;
pub use schedule::TimeWindow;
pub use stall::{Home, HomeChoice, Stall};
