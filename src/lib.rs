//! Core of a poker decision trainer.
//!
//! One training hand at a time: the session deals and walks the streets, the
//! advisor grades fold/call/raise decisions against a closed-form heuristic,
//! and the ledger keeps score across hands. There is no betting engine and no
//! showdown evaluation. The point is the decision itself.
//!
//! - `cards`: ranks, suits, an ordered deck, hole cards, streets
//! - `play`: the one-hand session state machine and its pacing
//! - `advice`: heuristic recommendations, pot odds, opening ranges
//! - `stats`: the decision log and its persistence

pub mod advice;
pub mod cards;
pub mod play;
pub mod stats;

/// Pot and bet amounts in chips.
pub type Chips = u32;
/// Strengths, equities, and odds in the unit interval.
pub type Probability = f32;
/// Positional multiplier applied to advised actions.
pub type Weight = f32;

/// Random instance generation for tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize dual logging: terminal at INFO, timestamped file at DEBUG.
/// Creates the `logs/` directory on first use.
#[cfg(feature = "client")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/trainer-{}.log", stamp)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
