use super::{Formatter, ToSql};

use keel_core::schema::db;

impl ToSql for &db::Type {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.to_string());
    }
}
