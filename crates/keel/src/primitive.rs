use keel_core::schema::app::Type;

/// A Rust value type that can be stored in a single column.
///
/// Implement it with [`Type::Unmapped`] for types that have no natural
/// column type; fields of such a type must then name one explicitly with
/// `#[column(type = ...)]`.
pub trait Primitive {
    const TYPE: Type;
    const NULLABLE: bool = false;
}

macro_rules! impl_primitive {
    ($( $ty:ty => $variant:ident ),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    std::time::SystemTime => DateTime,
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: Type = T::TYPE;
    const NULLABLE: bool = true;
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::{Primitive, Type};

    impl Primitive for chrono::NaiveDate {
        const TYPE: Type = Type::Date;
    }

    impl Primitive for chrono::NaiveDateTime {
        const TYPE: Type = Type::DateTime;
    }

    impl<Tz: chrono::TimeZone> Primitive for chrono::DateTime<Tz> {
        const TYPE: Type = Type::DateTime;
    }
}
