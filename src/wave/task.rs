use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// The result of polling an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollableState {
    /// Something moved; the frame needs to be redrawn.
    Modified,

    /// Nothing moved since the last poll.
    Unmodified,

    /// The animation is over and will never change again.
    Done,
}

/// Something that's driven once per displayed frame.
pub trait Pollable: Send {
    /// Advance to the current time.
    fn poll(&mut self) -> PollableState;
}

/// A shared flag used to stop a repeating animation task.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every holder of this token. Returns whether this call did it.
    pub fn cancel(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_shared_and_idempotent() {
        let token = CancellationToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        assert!(token.cancel());
        assert!(!token.cancel());
        assert!(other.is_cancelled());
    }
}
