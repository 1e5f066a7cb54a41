use super::signal::ColosseumSignal;

/// Trait for systems that react to tracker signals (splits, panels, link
/// consumers).
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &ColosseumSignal);

    /// Handle a batch in order (default forwards to `handle_signal`).
    fn handle_signals(&mut self, signals: &[ColosseumSignal]) {
        for signal in signals {
            self.handle_signal(signal);
        }
    }
}
