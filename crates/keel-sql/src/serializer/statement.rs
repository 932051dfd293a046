use super::{Comma, Formatter, Ident, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::AddColumn(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE TABLE ", Ident(&self.name), " (", columns, ")");
    }
}

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let stmt = self.0;

        fmt!(f, Comma(&stmt.columns));

        // An inline `PRIMARY KEY AUTOINCREMENT` already declares the key.
        let inline_pk = f.serializer.is_sqlite()
            && stmt
                .columns
                .iter()
                .any(|column| column.primary_key && column.auto_increment);

        if let Some(pk) = &stmt.primary_key {
            if !inline_pk {
                fmt!(f, ", PRIMARY KEY (", Ident(pk), ")");
            }
        }

        for column in &stmt.unique {
            fmt!(f, ", UNIQUE (", Ident(column), ")");
        }

        for fk in &stmt.foreign_keys {
            fmt!(
                f,
                ", FOREIGN KEY (",
                Ident(&fk.column),
                ") REFERENCES ",
                Ident(&fk.target_table),
                "(",
                Ident(&fk.target_column),
                ")"
            );
        }
    }
}

impl ToSql for &stmt::AddColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            "ALTER TABLE ",
            Ident(&self.table),
            " ADD COLUMN ",
            &self.column
        );
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };

        fmt!(f, "DROP TABLE ", if_exists, Ident(&self.name));
    }
}
