use super::db::Table;
use crate::{Error, Result};

/// Cross-table checks for a set of tables managed together.
///
/// Table names must be distinct. A foreign key whose target table is part of
/// the set must reference a primary key or unique column of that table with
/// a compatible type class. Targets outside the set are not checked; the
/// backend will reject them when the DDL runs if they do not exist.
pub fn verify(tables: &[Table]) -> Result<()> {
    for (i, table) in tables.iter().enumerate() {
        if let Some(dup) = tables[..i]
            .iter()
            .find(|other| other.name.eq_ignore_ascii_case(&table.name))
        {
            return Err(Error::invalid_schema(format!(
                "table `{}` is mapped more than once (conflicts with `{}`)",
                table.name, dup.name
            )));
        }
    }

    for table in tables {
        for column in table.foreign_key_columns() {
            let Some(fk) = &column.foreign_key else {
                continue;
            };

            let Some(target) = tables
                .iter()
                .find(|target| target.name.eq_ignore_ascii_case(&fk.table))
            else {
                continue;
            };

            let Some(target_column) = target.column(&fk.column) else {
                return Err(Error::invalid_schema(format!(
                    "foreign key `{}.{}` references missing column `{}.{}`",
                    table.name, column.name, target.name, fk.column
                )));
            };

            if !target_column.primary_key && !target_column.unique {
                return Err(Error::invalid_schema(format!(
                    "foreign key `{}.{}` references `{}.{}`, which is neither a primary key nor unique",
                    table.name, column.name, target.name, target_column.name
                )));
            }

            if column.ty.class() != target_column.ty.class() {
                return Err(Error::invalid_schema(format!(
                    "foreign key `{}.{}` has type `{}` but references `{}.{}` of type `{}`",
                    table.name,
                    column.name,
                    column.ty,
                    target.name,
                    target_column.name,
                    target_column.ty
                )));
            }
        }
    }

    Ok(())
}
