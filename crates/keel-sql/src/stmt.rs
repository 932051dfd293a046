mod add_column;
pub use add_column::AddColumn;

mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::{CreateTable, ForeignKeyDef};

mod drop_table;
pub use drop_table::DropTable;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    AddColumn(AddColumn),
    CreateTable(CreateTable),
    DropTable(DropTable),
}
