use std::sync::atomic::{AtomicU64, Ordering};
use crate::enums::batch_job::BatchJob;

#[derive(Debug, Default)]
pub struct BatchStats {
    report_runs: AtomicU64,
    fixed_rate_runs: AtomicU64,
    fixed_delay_runs: AtomicU64,
}

impl BatchStats {
    pub fn record(&self, job: BatchJob) {
        self.counter(job).fetch_add(1, Ordering::Relaxed);
    }

    pub fn runs(&self, job: BatchJob) -> u64 {
        self.counter(job).load(Ordering::Relaxed)
    }

    fn counter(&self, job: BatchJob) -> &AtomicU64 {
        match job {
            BatchJob::Report => &self.report_runs,
            BatchJob::FixedRate => &self.fixed_rate_runs,
            BatchJob::FixedDelay => &self.fixed_delay_runs,
        }
    }
}
