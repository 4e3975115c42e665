pub mod mode;
pub use mode::*;

pub mod pacing;
pub use pacing::*;

pub mod seat;
pub use seat::*;

pub mod session;
pub use session::*;

use crate::Chips;
use std::time::Duration;

/// Pot size at the start of every training hand.
pub const STARTING_POT: Chips = 100;
/// Fixed amount owed to continue, on every street.
pub const CALL_AMOUNT: Chips = 25;
/// Pause before auto-advancing to the next street in play mode.
pub const STREET_PAUSE: Duration = Duration::from_millis(2000);
/// Pause between consecutive drill questions.
pub const DRILL_PAUSE: Duration = Duration::from_millis(1200);
