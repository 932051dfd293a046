use super::{keyword, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Mysql,
    Sqlite,
}

impl Serializer {
    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    /// Character used to quote identifiers that cannot be emitted bare.
    pub(super) fn quote_char(&self) -> char {
        match self.flavor {
            Flavor::Mysql => '`',
            Flavor::Sqlite => '"',
        }
    }

    /// True if `name` must be quoted because the flavor treats it as a
    /// keyword.
    pub(super) fn is_keyword(&self, name: &str) -> bool {
        match self.flavor {
            Flavor::Mysql => keyword::contains(keyword::MYSQL, name),
            Flavor::Sqlite => keyword::contains(keyword::SQLITE, name),
        }
    }
}
