use super::{Formatter, Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);

        // SQLite only auto-increments a column declared exactly as
        // `INTEGER PRIMARY KEY AUTOINCREMENT`.
        if self.auto_increment && f.serializer.is_sqlite() {
            fmt!(f, name, " INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT");
            return;
        }

        fmt!(f, name, " ", &self.ty);

        if self.unsigned {
            fmt!(f, " UNSIGNED");
        }

        if self.nullable {
            fmt!(f, " NULL");
        } else {
            fmt!(f, " NOT NULL");
        }

        if self.auto_increment && f.serializer.is_mysql() {
            fmt!(f, " AUTO_INCREMENT");
        }
    }
}
