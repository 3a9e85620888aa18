//! First-class invariants for the history log.
//!
//! Invariants are logical properties that must hold after every operation on
//! a [`GameHistory`](crate::GameHistory). They are checked in debug builds and
//! can be tested independently.

pub mod alternating_marks;
pub mod no_moves_after_win;
pub mod pointer_in_range;
pub mod single_cell_steps;
pub mod starts_empty;

pub use alternating_marks::AlternatingMarksInvariant;
pub use no_moves_after_win::NoMovesAfterWinInvariant;
pub use pointer_in_range::PointerInRangeInvariant;
pub use single_cell_steps::SingleCellStepsInvariant;
pub use starts_empty::StartsEmptyInvariant;

use super::GameHistory;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    StartsEmptyInvariant,
    SingleCellStepsInvariant,
    AlternatingMarksInvariant,
    PointerInRangeInvariant,
    NoMovesAfterWinInvariant,
);

/// Asserts that all history invariants hold (panics on violation in debug builds).
#[instrument(skip(history))]
pub fn assert_invariants(history: &GameHistory) {
    if let Err(violations) = HistoryInvariants::check_all(history) {
        for violation in &violations {
            warn!(%violation, "History invariant violated");
        }
        debug_assert!(false, "History invariants violated: {:?}", violations);
    }
}
