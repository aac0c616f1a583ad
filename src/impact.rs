use serde::{Deserialize, Serialize};

/// Direction of the expected market reaction to a filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketImpact {
    Positive,
    Negative,
    Neutral,
}

/// Deterministic, rule-based significance score attached to every parsed
/// filing. Not a statistical model: the baseline is keyed on the submission
/// type alone and the per-form extractors refine it from structural signals.
///
/// `confidence`, `total_score` and `sentiment` always sit in [0, 1] and are
/// rounded to 8 decimal digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAssessment {
    pub market_impact: MarketImpact,
    pub confidence: f64,
    pub total_score: f64,
    pub sentiment: f64,
}

impl ImpactAssessment {
    /// Baseline classification from the submission type alone.
    pub fn baseline(submission_type: &str) -> Self {
        let (market_impact, confidence) = match submission_type.trim() {
            // Insider activity
            "4" | "4/A" | "3" => (MarketImpact::Positive, 0.7),
            // Major corporate events
            "8-K" | "S-1" | "S-4" => (MarketImpact::Positive, 0.6),
            // Routine periodic reporting
            "10-K" | "10-Q" => (MarketImpact::Neutral, 0.4),
            _ => (MarketImpact::Neutral, 0.5),
        };
        let mut assessment = ImpactAssessment {
            market_impact,
            confidence,
            total_score: confidence,
            sentiment: 0.5,
        };
        assessment.renormalize();
        assessment
    }

    /// Force the positive bucket and raise confidence and score by `bump`.
    pub fn promote_positive(&mut self, bump: f64) {
        self.market_impact = MarketImpact::Positive;
        self.confidence += bump;
        self.total_score += bump;
        self.renormalize();
    }

    /// Raise (or, with a negative delta, lower) confidence and the mirrored
    /// total score without changing the bucket.
    pub fn adjust_confidence(&mut self, delta: f64) {
        self.confidence += delta;
        self.total_score += delta;
        self.renormalize();
    }

    /// Replace the mirrored total score with an explicitly computed one
    /// (13F holdings use `value / 10_000_000`).
    pub fn set_total_score(&mut self, score: f64) {
        self.total_score = score;
        self.renormalize();
    }

    pub fn set_market_impact(&mut self, impact: MarketImpact) {
        self.market_impact = impact;
        self.renormalize();
    }

    // Every mutation funnels through here so the [0,1]/8-decimal invariant
    // holds no matter which refinement path ran.
    fn renormalize(&mut self) {
        self.confidence = round8(clamp01(self.confidence));
        self.total_score = round8(clamp01(self.total_score));
        self.sentiment = match self.market_impact {
            MarketImpact::Positive => 0.6,
            MarketImpact::Neutral => 0.5,
            MarketImpact::Negative => 0.4,
        };
    }
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn round8(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}
