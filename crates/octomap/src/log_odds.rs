//! Probability <-> log-odds conversions.
//!
//! Occupancy is stored as log-odds `L = ln(p / (1 - p))` so that independent
//! observations fuse by addition:
//!
//! ```text
//! L_posterior = L_prior + logit(p_1) + logit(p_2) + ...
//! p           = e^L / (1 + e^L)
//! ```
//!
//! | Log-odds | Probability |
//! |----------|-------------|
//! | -2.0     | ~12%        |
//! | 0.0      | 50%         |
//! | 2.0      | ~88%        |

/// Check that `probability` lies strictly inside (0, 1).
///
/// 0 and 1 map to infinite log-odds and NaN is never a probability.
#[inline]
pub fn is_valid_probability(probability: f64) -> bool {
  probability > 0.0 && probability < 1.0
}

/// Convert a probability to log-odds.
///
/// The caller guarantees `0 < probability < 1`.
#[inline]
pub fn logit(probability: f64) -> f64 {
  (probability / (1.0 - probability)).ln()
}

/// Convert log-odds back to a probability (logistic function).
///
/// Evaluated as `1 / (1 + e^-L)` or `e^L / (1 + e^L)` depending on the sign
/// so the exponential never overflows.
#[inline]
pub fn sigmoid(log_odds: f64) -> f64 {
  if log_odds >= 0.0 {
    1.0 / (1.0 + (-log_odds).exp())
  } else {
    let odds = log_odds.exp();
    odds / (1.0 + odds)
  }
}
