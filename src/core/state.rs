//! Core `State` trait for machine states.
//!
//! Every operating mode a machine can occupy implements this trait, which
//! exposes pure inspection methods and nothing else.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait implemented by state enums.
///
/// All methods are pure. A state is an immutable value describing the
/// machine's current operating mode; the machine owning it decides when
/// and how it changes.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into transition records
/// - `PartialEq`: transition policy compares the current state
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in serializable history
///
/// # Example
///
/// ```rust
/// use cabsim::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum HopperState {
///     Ready,
///     Empty,
///     Jammed,
/// }
///
/// impl State for HopperState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Ready => "READY",
///             Self::Empty => "EMPTY",
///             Self::Jammed => "JAMMED",
///         }
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
///
/// assert_eq!(HopperState::Ready.name(), "READY");
/// assert!(HopperState::Jammed.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's display name, used verbatim in log lines.
    fn name(&self) -> &str;

    /// Whether this is a terminal state with no outgoing transitions.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state represents a fault condition.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
