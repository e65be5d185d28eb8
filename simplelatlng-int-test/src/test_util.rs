use parking_lot::{const_mutex, Mutex, MutexGuard};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelatlng::{LatLng, LatLngConfig, LatLngResult, LengthUnit};
use std::backtrace::Backtrace;
use std::sync::Arc;
use std::time::Instant;

/// Serializes tests that read or replace the global configuration.
static GLOBAL_CONFIG_LOCK: Mutex<()> = const_mutex(());

/// Runs a test between a setup and a teardown step.
///
/// The teardown runs even when the test body fails, and any failure is
/// reported with the step that produced it.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: FnOnce(&TestContext) -> LatLngResult<()> + std::panic::UnwindSafe,
    B: FnOnce() -> LatLngResult<TestContext>,
    A: FnOnce(TestContext) -> LatLngResult<()>,
{
    let start_time = Instant::now();
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };

    let shared = ctx.config.clone();
    let result = std::panic::catch_unwind(move || {
        let view = TestContext::view(shared);
        test(&view)
    });
    let after_result = after(ctx);
    let elapsed = start_time.elapsed();

    let failure = match result {
        Ok(Ok(())) => after_result
            .err()
            .map(|e| format!("After run failed: {:?}", e)),
        Ok(Err(e)) => Some(format!("Test failed: {:?}", e)),
        Err(panic_err) => {
            let err_msg = if let Some(s) = panic_err.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_err.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            Some(format!("Panic: {}", err_msg))
        }
    };

    if let Some(error) = failure {
        eprintln!("\n==================== TEST FAILED ====================");
        eprintln!("Failed after {:?}", elapsed);
        eprintln!("Error: {}", error);
        let backtrace = Backtrace::capture().to_string();
        if !backtrace.is_empty() && !backtrace.contains("disabled") {
            eprintln!("\nBacktrace:\n{}", backtrace);
        }
        eprintln!("=====================================================\n");
        panic!("{}", error);
    }
}

/// Holds the configuration a test runs against.
///
/// Contexts created by the `create_*` functions own the global configuration
/// lock until [`cleanup`] restores the previous snapshot.
pub struct TestContext {
    config: Arc<LatLngConfig>,
    previous: Option<Arc<LatLngConfig>>,
    _guard: Option<MutexGuard<'static, ()>>,
}

impl TestContext {
    fn view(config: Arc<LatLngConfig>) -> Self {
        Self {
            config,
            previous: None,
            _guard: None,
        }
    }

    pub fn config(&self) -> &LatLngConfig {
        &self.config
    }

    /// A deterministic random source for the given seed.
    pub fn rng(&self, seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}

/// Locks the global configuration and resets it to the mean Earth radius.
pub fn create_test_context() -> LatLngResult<TestContext> {
    create_context(LatLngConfig::default())
}

/// Locks the global configuration and installs a custom Earth radius.
pub fn create_test_context_with_radius(radius: f64, unit: LengthUnit) -> LatLngResult<TestContext> {
    create_context(LatLngConfig::with_earth_radius(radius, unit)?)
}

fn create_context(config: LatLngConfig) -> LatLngResult<TestContext> {
    let guard = GLOBAL_CONFIG_LOCK.lock();
    let previous = LatLngConfig::global();
    LatLngConfig::set_global(config);
    Ok(TestContext {
        config: LatLngConfig::global(),
        previous: Some(previous),
        _guard: Some(guard),
    })
}

/// Restores the configuration that was global before the context was created.
pub fn cleanup(ctx: TestContext) -> LatLngResult<()> {
    if let Some(previous) = &ctx.previous {
        LatLngConfig::set_global(previous.as_ref().clone());
    }
    drop(ctx);
    Ok(())
}

pub fn point(latitude: f64, longitude: f64) -> LatLng {
    match LatLng::new(latitude, longitude) {
        Ok(point) => point,
        Err(e) => panic!("invalid test point ({}, {}): {}", latitude, longitude, e),
    }
}

pub fn random_points(seed: u64, count: usize) -> Vec<LatLng> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| LatLng::random(&mut rng)).collect()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {} but got {}",
        expected,
        tolerance,
        actual
    );
}
