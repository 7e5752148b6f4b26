use serde::Serialize;
use std::time::Instant;

/// Wall-clock cost of one labelled step of a run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for a run.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Run `f`, record its duration under `label`, and return its result.
    pub fn time<R>(&mut self, label: impl Into<String>, f: impl FnOnce() -> R) -> R {
        let t0 = Instant::now();
        let out = f();
        self.push(label, t0.elapsed().as_secs_f64() * 1000.0);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::TimingBreakdown;

    #[test]
    fn time_records_stage_and_total() {
        let mut timing = TimingBreakdown::default();
        let v = timing.time("sum", || (1..=4).sum::<i32>());
        timing.push("fixed", 2.5);
        assert_eq!(v, 10);
        assert_eq!(timing.stages.len(), 2);
        assert_eq!(timing.stages[0].label, "sum");
        assert!(timing.total_ms >= 2.5);
    }
}
