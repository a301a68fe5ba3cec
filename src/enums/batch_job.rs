use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BatchJob {
    /// Logs how many causes the repository holds.
    Report,
    /// Start-to-start schedule: the next run does not wait for the previous one.
    FixedRate,
    /// End-to-start schedule: waits the full delay after each run finishes.
    FixedDelay,
}

impl fmt::Display for BatchJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchJob::Report => write!(f, "report"),
            BatchJob::FixedRate => write!(f, "fixed-rate"),
            BatchJob::FixedDelay => write!(f, "fixed-delay"),
        }
    }
}
