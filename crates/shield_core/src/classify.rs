/// Scores at or above this value are high risk.
pub const HIGH_THRESHOLD: f64 = 60.0;
/// Scores at or above this value (and below [`HIGH_THRESHOLD`]) are medium risk.
pub const MEDIUM_THRESHOLD: f64 = 30.0;

/// Coarse risk bucket used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Low,
    Medium,
    High,
}

/// Maps a risk score to its display tier.
///
/// Thresholds are inclusive lower bounds. NaN fails both comparisons and
/// therefore lands in [`Tier::Low`], as do negative scores.
pub fn classify(score: f64) -> Tier {
    if score >= HIGH_THRESHOLD {
        Tier::High
    } else if score >= MEDIUM_THRESHOLD {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Rounds a score to the whole percentage shown next to a verdict.
///
/// Halves round up. Non-finite scores display as 0.
pub fn risk_percent(score: f64) -> i64 {
    if !score.is_finite() {
        return 0;
    }
    (score + 0.5).floor() as i64
}
