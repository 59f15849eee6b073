/// Classification for retry policy.
///
/// Used to determine how the rate resolver should respond to errors from
/// tariff authorities.
///
/// # Behavior Summary
///
/// | Class | Retry Same Call? |
/// |-------|------------------|
/// | `Never` | No |
/// | `Once` | Yes, a single time |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - unknown code, decode failure, or terminal upstream error.
    /// The request is fundamentally invalid or the authority has answered.
    Never,

    /// Retry the call a single time, then surface the failure.
    ///
    /// Used for timeouts and rate limiting, where one immediate re-attempt
    /// frequently succeeds. The resolver never retries beyond that; batch
    /// jobs decide for themselves whether a failed code aborts the batch.
    Once,
}
