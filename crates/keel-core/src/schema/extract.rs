use super::{
    app::{self, Field},
    db::{Column, Table, Type},
};
use crate::{Error, Result};

use std::collections::HashMap;

/// Resolves a model's structural description into a table descriptor.
///
/// Skipped fields are dropped, column names and types are resolved, and the
/// declared flags are copied through. The result is validated: a model may
/// declare at most one primary key, auto-increment is only allowed on an
/// integer primary key, and foreign keys must name both a table and a
/// column.
pub fn extract(model: &app::Model) -> Result<Table> {
    let name = model.table_name.as_deref().unwrap_or(&model.name);

    if name.trim().is_empty() {
        return Err(Error::invalid_schema(format!(
            "model `{}` resolves to an empty table name",
            model.name
        )));
    }

    let columns = model
        .fields
        .iter()
        .filter(|field| !field.attrs.skip)
        .map(|field| column_from_field(model, field))
        .collect::<Result<Vec<_>>>()?;

    let table = Table {
        name: name.to_string(),
        columns,
    };

    validate(model, &table)?;

    Ok(table)
}

fn column_from_field(model: &app::Model, field: &Field) -> Result<Column> {
    let attrs = &field.attrs;

    let ty = match &attrs.storage_ty {
        Some(ty) => ty.clone(),
        None => infer_type(field.ty).ok_or_else(|| {
            Error::invalid_schema(format!(
                "cannot infer a column type for field `{}::{}` of type `{}`; \
                 specify one with #[column(type = ...)]",
                model.name, field.name, field.ty
            ))
        })?,
    };

    if let Some(fk) = &attrs.foreign_key {
        if fk.table.trim().is_empty() {
            return Err(Error::invalid_schema(format!(
                "foreign key on field `{}::{}` does not name a target table",
                model.name, field.name
            )));
        }

        if fk.column.trim().is_empty() {
            return Err(Error::invalid_schema(format!(
                "foreign key on field `{}::{}` does not name a target column",
                model.name, field.name
            )));
        }
    }

    Ok(Column {
        name: field.column_name_or_default().to_string(),
        ty,
        nullable: field.nullable || attrs.nullable,
        unique: attrs.unique,
        primary_key: attrs.primary_key,
        auto_increment: attrs.auto_increment,
        unsigned: attrs.unsigned || field.ty.is_unsigned(),
        foreign_key: attrs.foreign_key.clone(),
    })
}

/// Column type used when a field does not specify one.
fn infer_type(ty: app::Type) -> Option<Type> {
    use app::Type::*;

    Some(match ty {
        I8 | U8 => Type::Integer(1),
        I16 | U16 => Type::Integer(2),
        I32 | U32 => Type::Integer(4),
        I64 | U64 => Type::Integer(8),
        Bool => Type::Boolean,
        F32 | F64 => Type::Double,
        String => Type::DEFAULT_STRING,
        Bytes => Type::Blob,
        Date => Type::Date,
        DateTime => Type::DateTime,
        Unmapped => return None,
    })
}

fn validate(model: &app::Model, table: &Table) -> Result<()> {
    if table.columns.is_empty() {
        return Err(Error::invalid_schema(format!(
            "model `{}` has no mapped columns",
            model.name
        )));
    }

    let mut seen = HashMap::new();
    for column in &table.columns {
        if let Some(previous) = seen.insert(column.name.to_ascii_lowercase(), &column.name) {
            return Err(Error::invalid_schema(format!(
                "table `{}` declares column `{}` more than once (conflicts with `{}`)",
                table.name, column.name, previous
            )));
        }
    }

    let primary_keys: Vec<_> = table
        .columns
        .iter()
        .filter(|column| column.primary_key)
        .map(|column| column.name.as_str())
        .collect();

    if primary_keys.len() > 1 {
        return Err(Error::invalid_schema(format!(
            "table `{}` declares more than one primary key: {}",
            table.name,
            primary_keys.join(", ")
        )));
    }

    for column in &table.columns {
        if column.auto_increment && !column.primary_key {
            return Err(Error::invalid_schema(format!(
                "column `{}.{}` is auto-increment but is not the primary key",
                table.name, column.name
            )));
        }

        if column.auto_increment && !column.ty.is_integer() {
            return Err(Error::invalid_schema(format!(
                "column `{}.{}` is auto-increment but has non-integer type `{}`",
                table.name, column.name, column.ty
            )));
        }

        if column.primary_key && column.nullable {
            return Err(Error::invalid_schema(format!(
                "primary key column `{}.{}` cannot be nullable",
                table.name, column.name
            )));
        }
    }

    Ok(())
}
