//! Per-frame countdown used for message display, death animations and the
//! attack cooldown.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(ticks: u32) -> Self {
        Countdown { remaining: ticks }
    }

    /// A countdown that has already run out.
    pub fn idle() -> Self {
        Countdown { remaining: 0 }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    pub fn restart(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    /// Decrement once, saturating at zero.  Returns `true` on the tick that
    /// reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    /// Remaining ticks as a fraction of `total`, for fades and shrinks.
    pub fn fraction_of(&self, total: u32) -> f64 {
        if total == 0 {
            return 0.0;
        }
        f64::from(self.remaining) / f64::from(total)
    }
}

