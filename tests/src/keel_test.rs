use crate::Setup;

use keel::driver::{Connection, Driver};
use std::sync::Arc;

/// Internal wrapper that manages the Tokio runtime and ensures cleanup happens.
///
/// Tests use `#[test]` instead of `#[tokio::test]` so that cleanup can block
/// on the same runtime after the test body finished or panicked.
pub struct KeelTest {
    runtime: tokio::runtime::Runtime,
    setup: Arc<dyn Setup>,
}

/// Handle passed to each test body.
#[derive(Clone)]
pub struct DbTest {
    setup: Arc<dyn Setup>,
}

impl KeelTest {
    /// Create a new KeelTest with a current-thread runtime.
    pub fn new(setup: impl Setup) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self {
            runtime,
            setup: Arc::new(setup),
        }
    }

    /// Run a test function with the setup, using our managed runtime.
    pub fn run_test<F, Fut>(&mut self, test_fn: F)
    where
        F: FnOnce(DbTest) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        let test = DbTest {
            setup: self.setup.clone(),
        };

        self.runtime.block_on(async {
            test.setup.init().await.expect("failed to prepare test database");
            test_fn(test).await;
        });
    }
}

impl Drop for KeelTest {
    fn drop(&mut self) {
        let setup = self.setup.clone();
        self.runtime.block_on(async move {
            let _ = setup.cleanup().await;
        });
    }
}

impl DbTest {
    pub fn backend(&self) -> &'static str {
        self.setup.name()
    }

    pub fn driver(&self) -> Box<dyn Driver> {
        self.setup.driver()
    }

    /// Opens a new connection to the test database.
    pub async fn connect(&self) -> Box<dyn Connection> {
        self.driver()
            .connect()
            .await
            .expect("failed to connect to test database")
    }
}
