#[macro_use]
mod macros;

pub mod db;
mod keel_test;

// Re-export for use in macros - needs to be public for macro expansion
pub use keel_test::{DbTest, KeelTest};

use keel::driver::Driver;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// Short backend name, used in assertions that differ per backend.
    fn name(&self) -> &'static str;

    /// Prepares an empty database owned by this test.
    async fn init(&self) -> keel::Result<()> {
        Ok(())
    }

    /// A driver pointed at the database prepared by [`Setup::init`].
    fn driver(&self) -> Box<dyn Driver>;

    /// Removes everything this test created.
    async fn cleanup(&self) -> keel::Result<()> {
        Ok(())
    }
}
