use std::sync::Arc;
use futures::future::join_all;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{interval, interval_at, sleep, Instant, MissedTickBehavior};
use crate::config::constants::{sleep_duration_millis, sleep_duration_secs};
use crate::enums::batch_job::BatchJob;
use crate::errors::{ArcaError, ArcaResult};
use crate::services::cause_service::CauseService;
use crate::structs::batch_stats::BatchStats;
use crate::structs::config::batch_config::BatchConfig;

/// Background jobs running next to the API server.
pub struct BatchProcessor {
    config: BatchConfig,
    service: Arc<CauseService>,
    stats: Arc<BatchStats>,
    shutdown_tx: Option<watch::Sender<bool>>,
    handles: Vec<JoinHandle<()>>,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig, service: Arc<CauseService>) -> Self {
        Self {
            config,
            service,
            stats: Arc::new(BatchStats::default()),
            shutdown_tx: None,
            handles: Vec::new(),
        }
    }

    pub fn stats(&self) -> Arc<BatchStats> {
        Arc::clone(&self.stats)
    }

    pub fn is_running(&self) -> bool {
        self.shutdown_tx.is_some()
    }

    /// Fails without spawning anything when a period is zero.
    pub fn start(&mut self) -> ArcaResult<()> {
        if self.is_running() {
            return Ok(());
        }

        let periods = [
            ("batch.report_interval_secs", self.config.report_interval_secs),
            ("batch.fixed_rate_secs", self.config.fixed_rate_secs),
            ("batch.fixed_delay_secs", self.config.fixed_delay_secs),
        ];
        if let Some((field, _)) = periods.iter().find(|(_, secs)| *secs == 0) {
            return Err(ArcaError::validation_error(field, "0", "must be greater than 0"));
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        self.shutdown_tx = Some(shutdown_tx);

        log::info!(
            "⏰ Starting batch jobs (report every {}s, fixed rate {}s, fixed delay {}s)",
            self.config.report_interval_secs, self.config.fixed_rate_secs, self.config.fixed_delay_secs
        );

        self.handles.push(tokio::spawn(report_job(
            self.config.clone(),
            Arc::clone(&self.service),
            Arc::clone(&self.stats),
            shutdown_rx.clone(),
        )));
        self.handles.push(tokio::spawn(fixed_rate_job(
            self.config.clone(),
            Arc::clone(&self.stats),
            shutdown_rx.clone(),
        )));
        self.handles.push(tokio::spawn(fixed_delay_job(
            self.config.clone(),
            Arc::clone(&self.stats),
            shutdown_rx,
        )));
        Ok(())
    }

    pub async fn stop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(true);
        }

        for result in join_all(self.handles.drain(..)).await {
            if let Err(e) = result {
                log::warn!("⚠️ Batch job ended abnormally: {}", e);
            }
        }
        log::info!("🛑 Batch jobs stopped");
    }
}

/// Resolves once a stop was requested or the processor went away.
async fn stopped(shutdown_rx: &mut watch::Receiver<bool>) {
    while !*shutdown_rx.borrow() {
        if shutdown_rx.changed().await.is_err() {
            return;
        }
    }
}

async fn simulate_work(job: BatchJob, work_ms: u64, stats: &BatchStats) {
    log::info!("> {} job", job);
    sleep(sleep_duration_millis(work_ms)).await;
    stats.record(job);
    log::info!("< {} job, processing took {} ms", job, work_ms);
}

async fn report_job(
    config: BatchConfig,
    service: Arc<CauseService>,
    stats: Arc<BatchStats>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut ticker = interval(sleep_duration_secs(config.report_interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                log::info!("📊 There are {} causes in the data store", service.count());
                stats.record(BatchJob::Report);
            }
            _ = stopped(&mut shutdown_rx) => break,
        }
    }
}

async fn fixed_rate_job(config: BatchConfig, stats: Arc<BatchStats>, mut shutdown_rx: watch::Receiver<bool>) {
    let start = Instant::now() + sleep_duration_secs(config.initial_delay_secs);
    let mut ticker = interval_at(start, sleep_duration_secs(config.fixed_rate_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
    let mut runs = JoinSet::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // start-to-start: a slow run must not push the next one back
                let stats = Arc::clone(&stats);
                let work_ms = config.work_ms;
                runs.spawn(async move {
                    simulate_work(BatchJob::FixedRate, work_ms, &stats).await;
                });
            }
            Some(finished) = runs.join_next(), if !runs.is_empty() => {
                if let Err(e) = finished {
                    log::warn!("⚠️ {} run ended abnormally: {}", BatchJob::FixedRate, e);
                }
            }
            _ = stopped(&mut shutdown_rx) => break,
        }
    }

    while let Some(finished) = runs.join_next().await {
        if let Err(e) = finished {
            log::warn!("⚠️ {} run ended abnormally: {}", BatchJob::FixedRate, e);
        }
    }
}

async fn fixed_delay_job(config: BatchConfig, stats: Arc<BatchStats>, mut shutdown_rx: watch::Receiver<bool>) {
    tokio::select! {
        _ = sleep(sleep_duration_secs(config.initial_delay_secs)) => {}
        _ = stopped(&mut shutdown_rx) => return,
    }

    loop {
        simulate_work(BatchJob::FixedDelay, config.work_ms, &stats).await;

        tokio::select! {
            _ = sleep(sleep_duration_secs(config.fixed_delay_secs)) => {}
            _ = stopped(&mut shutdown_rx) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::services::cause_repository::CauseRepository;
    use crate::structs::cause::Cause;

    fn config() -> BatchConfig {
        BatchConfig {
            enabled: true,
            report_interval_secs: 30,
            initial_delay_secs: 5,
            fixed_rate_secs: 15,
            fixed_delay_secs: 15,
            work_ms: 5000,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn jobs_follow_their_schedules() {
        let service = Arc::new(CauseService::new(CauseRepository::with_seed(vec![Cause::new("a", 1)])));
        let mut processor = BatchProcessor::new(config(), service);
        let stats = processor.stats();

        processor.start().unwrap();
        // t = 0..=61s
        sleep(Duration::from_secs(61)).await;
        processor.stop().await;

        // report: 0, 30, 60
        assert_eq!(stats.runs(BatchJob::Report), 3);
        // fixed rate starts at 5, 20, 35, 50 and each finishes 5s later
        assert_eq!(stats.runs(BatchJob::FixedRate), 4);
        // fixed delay: runs 5..10, 25..30, 45..50
        assert_eq!(stats.runs(BatchJob::FixedDelay), 3);
        assert!(!processor.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_before_initial_delay_runs_nothing_delayed() {
        let service = Arc::new(CauseService::new(CauseRepository::new()));
        let mut processor = BatchProcessor::new(config(), service);
        let stats = processor.stats();

        processor.start().unwrap();
        sleep(Duration::from_secs(1)).await;
        processor.stop().await;

        assert_eq!(stats.runs(BatchJob::Report), 1);
        assert_eq!(stats.runs(BatchJob::FixedRate), 0);
        assert_eq!(stats.runs(BatchJob::FixedDelay), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_waits_for_runs_in_flight() {
        let service = Arc::new(CauseService::new(CauseRepository::new()));
        let mut processor = BatchProcessor::new(config(), service);
        let stats = processor.stats();

        processor.start().unwrap();
        // both delayed jobs are mid-run at t = 6s
        sleep(Duration::from_secs(6)).await;
        processor.stop().await;

        assert_eq!(stats.runs(BatchJob::FixedRate), 1);
        assert_eq!(stats.runs(BatchJob::FixedDelay), 1);
    }

    #[tokio::test]
    async fn zero_period_is_refused() {
        let service = Arc::new(CauseService::new(CauseRepository::new()));
        let mut processor = BatchProcessor::new(
            BatchConfig { report_interval_secs: 0, ..config() },
            service,
        );

        let error = processor.start().unwrap_err();

        assert!(matches!(error, ArcaError::ValidationError { ref field, .. } if field == "batch.report_interval_secs"));
        assert!(!processor.is_running());
    }
}
