mod column;
pub use column::{Column, ColumnInfo, ForeignKey};

mod diff;
pub use diff::{ColumnMismatch, SchemaDiff};

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;

mod type_class;
pub use type_class::TypeClass;
