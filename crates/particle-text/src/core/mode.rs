/// Animation mode of the particle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Pull particles back to their origins (the text is readable).
    #[default]
    Gather,
    /// Push particles away from their origins.
    Disperse,
    /// No driving force; particles coast to rest under damping.
    Stop,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Gather => "gather",
            Mode::Disperse => "disperse",
            Mode::Stop => "stop",
        }
    }
}

/// Round-robin mode sequencer.
///
/// The field starts in `Gather`; the first advance yields `Disperse`, then
/// `Gather`, `Stop`, and around again.
#[derive(Debug, Clone, Default)]
pub struct ModeCycle {
    current: Mode,
    next_index: usize,
}

impl ModeCycle {
    /// Order in which `advance` hands out modes.
    pub const ORDER: [Mode; 3] = [Mode::Disperse, Mode::Gather, Mode::Stop];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    /// Move to the next mode in the cycle and return it.
    pub fn advance(&mut self) -> Mode {
        self.current = Self::ORDER[self.next_index];
        self.next_index = (self.next_index + 1) % Self::ORDER.len();
        self.current
    }
}
