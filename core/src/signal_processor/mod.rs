pub mod handler;
pub mod manticore;
pub mod processor;
pub mod signal;

#[cfg(test)]
mod processor_tests;

pub use handler::SignalHandler;
pub use manticore::ManticoreTracker;
pub use processor::{REINFORCEMENT_DELAY_TICKS, WavePhase, WaveTracker};
pub use signal::ColosseumSignal;
