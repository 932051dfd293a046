use keel_core::{
    err,
    schema::{app, db, extract},
    Result,
};

/// A type mapped to a single table.
///
/// Usually implemented with `#[derive(Model)]`.
pub trait Model {
    /// The structural description of this type, as declared.
    fn schema() -> app::Model;

    /// Resolves and validates the table this type maps to.
    fn table() -> Result<db::Table> {
        let model = Self::schema();
        extract(&model).map_err(|e| e.context(err!("extracting model `{}`", model.name)))
    }
}
