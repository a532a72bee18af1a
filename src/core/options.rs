use crate::domain::model::AnalysisOptions;

/// Partial update merged into [`AnalysisOptions`]. Absent fields keep their
/// current value; present fields are clamped into range. Non-finite numbers
/// are rejected field-wise (the previous value stays).
#[derive(Debug, Copy, Clone, Default)]
pub struct OptionsUpdate {
    pub opponents: Option<u32>,
    pub small_blind: Option<f64>,
    pub accumulated_bet: Option<f64>,
}

impl OptionsUpdate {
    pub fn apply_to(&self, options: &mut AnalysisOptions) {
        if let Some(opponents) = self.opponents {
            options.opponents = opponents.clamp(1, 9);
        }
        if let Some(small_blind) = self.small_blind {
            if small_blind.is_finite() {
                options.small_blind = small_blind.max(1.0);
            } else {
                tracing::warn!("ignoring non-finite small blind: {}", small_blind);
            }
        }
        if let Some(accumulated_bet) = self.accumulated_bet {
            if accumulated_bet.is_finite() {
                options.accumulated_bet = accumulated_bet.max(0.0);
            } else {
                tracing::warn!("ignoring non-finite accumulated bet: {}", accumulated_bet);
            }
        }
    }
}
