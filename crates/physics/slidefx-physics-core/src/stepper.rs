//! Single-owner permission to advance world time.

/// Whoever holds the token steps the world; everyone else only reads their
/// own body. The world mints exactly one and keeps it while nobody claims
/// it, so two concurrent steppers cannot exist.
#[derive(Debug)]
pub struct StepperToken {
    _private: (),
}

impl StepperToken {
    pub(crate) fn mint() -> Self {
        Self { _private: () }
    }
}
