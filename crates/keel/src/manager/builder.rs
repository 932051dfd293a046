use super::{DriftPolicy, Manager};
use crate::{Model, Result};

use keel_core::schema::{self, app};

#[derive(Debug, Default)]
pub struct Builder {
    /// Model declarations, in registration order
    models: Vec<app::Model>,

    policy: DriftPolicy,
}

impl Builder {
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models.push(T::schema());
        self
    }

    /// Sets the drift policy. Defaults to [`DriftPolicy::Report`].
    pub fn policy(&mut self, policy: DriftPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Extracts every registered model and checks the resulting tables
    /// against each other.
    pub fn build(&self) -> Result<Manager> {
        let tables = self
            .models
            .iter()
            .map(|model| {
                schema::extract(model).map_err(|e| {
                    e.context(keel_core::err!("extracting model `{}`", model.name))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        schema::verify(&tables)?;

        Ok(Manager {
            tables,
            policy: self.policy,
        })
    }
}
