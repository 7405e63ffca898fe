//! Two-key `gg` jump. The first `g` arms the sequence; any other key
//! disarms it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GotoOutcome {
    Pending,
    GotoFirst,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GotoSequence {
    armed: bool,
}

impl GotoSequence {
    pub fn press_g(&mut self) -> GotoOutcome {
        if self.armed {
            self.armed = false;
            GotoOutcome::GotoFirst
        } else {
            self.armed = true;
            GotoOutcome::Pending
        }
    }

    pub fn reset(&mut self) {
        self.armed = false;
    }

    pub fn is_pending(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_g_completes_sequence() {
        let mut seq = GotoSequence::default();

        assert_eq!(seq.press_g(), GotoOutcome::Pending);
        assert_eq!(seq.press_g(), GotoOutcome::GotoFirst);
        assert!(!seq.is_pending());
    }

    #[test]
    fn reset_between_presses_restarts_sequence() {
        let mut seq = GotoSequence::default();

        seq.press_g();
        seq.reset();

        assert_eq!(seq.press_g(), GotoOutcome::Pending);
    }
}
