mod field;
pub use field::{Field, FieldAttrs};

mod model;
pub use model::Model;

mod ty;
pub use ty::Type;
