pub mod availability;
pub mod clock;
pub mod directions;
pub mod selector;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use directions::{MapLauncher, SystemLauncher};
pub use selector::{Chooser, RandomChooser};
pub use session::{Session, SessionState};
