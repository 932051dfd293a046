use super::{ColumnInfo, Table, TypeClass};

use std::{collections::HashSet, fmt};

/// Difference between the columns a model expects and those a live table
/// actually has.
///
/// Columns are matched by name (ASCII case-insensitive); their order is
/// irrelevant. A non-empty diff is a normal result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDiff {
    /// Expected columns absent from the live table, in declaration order.
    pub missing_columns: Vec<String>,

    /// Live columns the model does not declare, in catalog order.
    pub extra_columns: Vec<String>,

    /// Columns present on both sides whose type class or nullability differ.
    pub mismatched_columns: Vec<ColumnMismatch>,
}

/// A column whose live shape differs from the declared one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMismatch {
    pub name: String,
    pub expected_type: TypeClass,
    pub actual_type: TypeClass,
    pub expected_nullable: bool,
    pub actual_nullable: bool,
}

impl SchemaDiff {
    /// Compares an expected table against the columns of a live table.
    pub fn between(expected: &Table, actual: &[ColumnInfo]) -> SchemaDiff {
        let mut diff = SchemaDiff::default();

        for column in &expected.columns {
            let Some(live) = actual
                .iter()
                .find(|live| live.name.eq_ignore_ascii_case(&column.name))
            else {
                diff.missing_columns.push(column.name.clone());
                continue;
            };

            let expected_type = column.ty.class();
            let actual_type = live.class();

            if expected_type != actual_type || column.nullable != live.nullable {
                diff.mismatched_columns.push(ColumnMismatch {
                    name: column.name.clone(),
                    expected_type,
                    actual_type,
                    expected_nullable: column.nullable,
                    actual_nullable: live.nullable,
                });
            }
        }

        let declared: HashSet<String> = expected
            .columns
            .iter()
            .map(|column| column.name.to_ascii_lowercase())
            .collect();

        diff.extra_columns = actual
            .iter()
            .filter(|live| !declared.contains(&live.name.to_ascii_lowercase()))
            .map(|live| live.name.clone())
            .collect();

        diff
    }

    pub fn is_empty(&self) -> bool {
        self.missing_columns.is_empty()
            && self.extra_columns.is_empty()
            && self.mismatched_columns.is_empty()
    }
}

impl fmt::Display for SchemaDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no differences");
        }

        let mut s = "";
        if !self.missing_columns.is_empty() {
            write!(f, "{s}missing [{}]", self.missing_columns.join(", "))?;
            s = "; ";
        }
        if !self.extra_columns.is_empty() {
            write!(f, "{s}extra [{}]", self.extra_columns.join(", "))?;
            s = "; ";
        }
        if !self.mismatched_columns.is_empty() {
            write!(f, "{s}mismatched [")?;
            let mut sep = "";
            for mismatch in &self.mismatched_columns {
                write!(f, "{sep}{mismatch}")?;
                sep = ", ";
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl fmt::Display for ColumnMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn null(nullable: bool) -> &'static str {
            if nullable {
                "NULL"
            } else {
                "NOT NULL"
            }
        }

        write!(
            f,
            "{}: expected {} {}, found {} {}",
            self.name,
            self.expected_type,
            null(self.expected_nullable),
            self.actual_type,
            null(self.actual_nullable),
        )
    }
}
