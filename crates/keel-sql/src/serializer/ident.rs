use super::{Formatter, ToSql};

/// An identifier, quoted only when it has to be.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();

        if is_plain(name) && !f.serializer.is_keyword(name) {
            f.dst.push_str(name);
            return;
        }

        let quote = f.serializer.quote_char();
        f.dst.push(quote);
        for ch in name.chars() {
            if ch == quote {
                f.dst.push(quote);
            }
            f.dst.push(ch);
        }
        f.dst.push(quote);
    }
}

fn is_plain(name: &str) -> bool {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
