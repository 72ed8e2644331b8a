use std::sync::atomic::{AtomicUsize, Ordering};

/// Monotonic allocation counters, sampled before and after a workload to
/// verify that the runtime releases what it creates.
#[derive(Debug, Clone, Copy)]
pub struct LeakStats {
    pub templates: usize,
    pub closures: usize,
    pub arrays: usize,
}

static TEMPLATES: AtomicUsize = AtomicUsize::new(0);
static CLOSURES: AtomicUsize = AtomicUsize::new(0);
static ARRAYS: AtomicUsize = AtomicUsize::new(0);

pub fn record_template() {
    TEMPLATES.fetch_add(1, Ordering::Relaxed);
}

pub fn record_closure() {
    CLOSURES.fetch_add(1, Ordering::Relaxed);
}

pub fn record_array() {
    ARRAYS.fetch_add(1, Ordering::Relaxed);
}

pub fn snapshot() -> LeakStats {
    LeakStats {
        templates: TEMPLATES.load(Ordering::Relaxed),
        closures: CLOSURES.load(Ordering::Relaxed),
        arrays: ARRAYS.load(Ordering::Relaxed),
    }
}
