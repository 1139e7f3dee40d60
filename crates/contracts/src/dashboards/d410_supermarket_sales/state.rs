use futures::future::AbortHandle;

use super::cycle::{Cycle, CycleResult};
use super::dto::DashboardSnapshot;
use super::error::DashboardError;
use super::filter::FilterState;
use super::query::{serialize, DateRangePolicy};

/// What `complete_cycle` did with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The snapshot replaced the previous one
    Applied,
    /// The cycle failed; the previous snapshot stays visible
    Failed,
    /// Superseded or aborted; nothing changed
    Discarded,
}

/// Central owner of the dashboard: filters, last applied data and the
/// bookkeeping of the cycle currently in flight.
///
/// Every call to [`begin_cycle`](Self::begin_cycle) starts a new generation
/// and aborts the previous one. Results are only applied when they carry the
/// current generation, so a slow superseded cycle can never overwrite the
/// data of a newer one.
#[derive(Debug, Default)]
pub struct DashboardState {
    filters: FilterState,
    policy: DateRangePolicy,
    snapshot: Option<DashboardSnapshot>,
    loading: bool,
    error: Option<DashboardError>,
    generation: u64,
    in_flight: Option<AbortHandle>,
}

impl DashboardState {
    pub fn new(policy: DateRangePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Last successfully applied data, `None` before the first success
    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Failure of the most recent finished cycle
    pub fn error(&self) -> Option<&DashboardError> {
        self.error.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new cycle for the current filters.
    ///
    /// Fails without issuing anything when the date range policy rejects the
    /// filters; the error is recorded and the old snapshot stays.
    pub fn begin_cycle(&mut self) -> Result<Cycle, DashboardError> {
        self.generation += 1;
        if let Some(handle) = self.in_flight.take() {
            log::debug!("Aborting superseded dashboard cycle");
            handle.abort();
        }

        let filters = match self.policy.apply(&self.filters) {
            Ok(filters) => filters,
            Err(err) => {
                log::warn!("Dashboard filters rejected: {}", err);
                self.loading = false;
                self.error = Some(err.clone());
                return Err(err);
            }
        };

        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        self.loading = true;

        Ok(Cycle::new(
            self.generation,
            serialize(&filters),
            registration,
        ))
    }

    /// Apply a finished cycle atomically, or drop it when stale
    pub fn complete_cycle(&mut self, result: CycleResult) -> CycleOutcome {
        if result.generation != self.generation {
            log::debug!(
                "Discarding dashboard cycle {} (current is {})",
                result.generation,
                self.generation
            );
            return CycleOutcome::Discarded;
        }

        self.in_flight = None;
        self.loading = false;

        match result.outcome {
            None => CycleOutcome::Discarded,
            Some(Ok(snapshot)) => {
                log::info!("Dashboard cycle {} applied", result.generation);
                self.snapshot = Some(snapshot);
                self.error = None;
                CycleOutcome::Applied
            }
            Some(Err(err)) => {
                log::error!("Error fetching dashboard data: {}", err);
                self.error = Some(err);
                CycleOutcome::Failed
            }
        }
    }

    /// Abort whatever is in flight without starting anything new
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
            self.generation += 1;
            self.loading = false;
        }
    }
}
