use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Solver counters for structured logging.
///
/// Calculators share one instance through an `Arc`, so the counters
/// accumulate across runs and threads. All operations are atomic and
/// lock-free.
#[derive(Debug, Default)]
pub struct SolverMetrics {
    /// Completed solver invocations
    runs: AtomicU64,
    /// Nodes settled by Dijkstra
    nodes_settled: AtomicU64,
    /// Successful Dijkstra relaxations
    relaxations: AtomicU64,
    /// Edges accepted into a spanning forest
    edges_accepted: AtomicU64,
    /// Edges discarded because they would close a cycle
    edges_rejected: AtomicU64,
}

impl SolverMetrics {
    /// Create a new SolverMetrics instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_run(&self) {
        self.runs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_settled(&self) {
        self.nodes_settled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_relaxation(&self) {
        self.relaxations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_accepted(&self) {
        self.edges_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.edges_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn runs(&self) -> u64 {
        self.runs.load(Ordering::Relaxed)
    }

    pub fn nodes_settled(&self) -> u64 {
        self.nodes_settled.load(Ordering::Relaxed)
    }

    pub fn relaxations(&self) -> u64 {
        self.relaxations.load(Ordering::Relaxed)
    }

    pub fn edges_accepted(&self) -> u64 {
        self.edges_accepted.load(Ordering::Relaxed)
    }

    pub fn edges_rejected(&self) -> u64 {
        self.edges_rejected.load(Ordering::Relaxed)
    }

    /// Share of scanned edges that ended up in a spanning forest (0.0-100.0)
    pub fn acceptance_rate(&self) -> f64 {
        let accepted = self.edges_accepted();
        let total = accepted + self.edges_rejected();
        if total == 0 {
            0.0
        } else {
            (accepted as f64 / total as f64) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.runs.store(0, Ordering::Relaxed);
        self.nodes_settled.store(0, Ordering::Relaxed);
        self.relaxations.store(0, Ordering::Relaxed);
        self.edges_accepted.store(0, Ordering::Relaxed);
        self.edges_rejected.store(0, Ordering::Relaxed);
    }
}

/// Log solver metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let calculator = DijkstraPathCalculator::new(&graph);
/// calculator.calculate_path(&a, &b)?;
/// log_solver_metrics!(calculator.metrics(), "dijkstra");
/// ```
#[macro_export]
macro_rules! log_solver_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            solver = $name,
            runs = $metrics.runs(),
            nodes_settled = $metrics.nodes_settled(),
            relaxations = $metrics.relaxations(),
            edges_accepted = $metrics.edges_accepted(),
            edges_rejected = $metrics.edges_rejected(),
            "solver_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", nodes = graph.nodes().len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging for an application embedding wgraph
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    init_with_level(level, log_json)
}

/// Build the directive string for a bare level or a full filter expression
fn level_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("wgraph={level},wgraph_core={level}")
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Support WGRAPH_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("WGRAPH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(level_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
