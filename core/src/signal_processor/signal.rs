/// Signals emitted by the wave tracker for downstream consumers.
///
/// These represent "interesting things that happened" at a higher level than
/// raw host events: the panel, splits, and link consumers react to these
/// without duplicating the tracker's state.
#[derive(Debug, Clone, PartialEq)]
pub enum ColosseumSignal {
    WaveStarted {
        wave: u8,
        tick: i32,
    },
    WaveCompleted {
        wave: u8,
        tick: i32,
    },
    /// Wave 1 started: per-run display state should be cleared.
    DisplayReset,
    ReinforcementsStarted {
        wave: u8,
        tick: i32,
    },
    /// The one-shot phase snapshot was taken.
    SpawnsCaptured {
        wave: u8,
        reinforcement: bool,
        npc_count: usize,
    },
    /// A shareable layout link is ready, or was refreshed.
    LinkReady {
        wave: u8,
        reinforcement: bool,
        url: String,
    },
    /// A manticore's attack telegraph finished.
    PatternComplete {
        instance_id: i64,
    },
    /// Region membership changed; all wave state was dropped.
    EncounterReset,
}

impl ColosseumSignal {
    /// Wave the signal concerns, if any.
    pub fn wave(&self) -> Option<u8> {
        match self {
            Self::WaveStarted { wave, .. }
            | Self::WaveCompleted { wave, .. }
            | Self::ReinforcementsStarted { wave, .. }
            | Self::SpawnsCaptured { wave, .. }
            | Self::LinkReady { wave, .. } => Some(*wave),
            Self::DisplayReset | Self::PatternComplete { .. } | Self::EncounterReset => None,
        }
    }
}
