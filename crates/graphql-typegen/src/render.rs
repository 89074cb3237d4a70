//! Per-kind definition renderers.
//!
//! Each renderer produces one self-contained block of TypeScript, without a
//! trailing blank line. The emitter is responsible for separating blocks.

mod docblock;

use std::fmt::Write as _;

use crate::{
    introspection::{Field, InputValue, Type, TypeKind, TypeRef},
    Error, ScalarMap,
};
use docblock::Docblock;

pub(crate) const INDENT: &str = "  ";

/// Render one type definition, dispatching on its kind. `LIST` and `NON_NULL`
/// cannot reach this point for validated schemas; they are rejected rather
/// than skipped if a caller smuggles one in.
pub(crate) fn render_definition(ty: &Type, scalars: &ScalarMap) -> Result<String, Error> {
    match ty.kind {
        TypeKind::Scalar => render_scalar(ty, scalars),
        TypeKind::Enum => render_enum(ty),
        TypeKind::Union => render_union(ty),
        TypeKind::Interface | TypeKind::InputObject => render_structural(ty, scalars, &[]),
        TypeKind::Object => {
            let extends: Vec<&str> = ty
                .interfaces()
                .iter()
                .map(|interface| interface.name.as_str())
                .collect();
            render_structural(ty, scalars, &extends)
        }
        TypeKind::List | TypeKind::NonNull => Err(Error::WrappingKindDefinition {
            name: ty.name.clone(),
        }),
    }
}

/// Resolve a type reference into a TypeScript type expression.
///
/// `inside_non_null` tells the named leaf whether a `NonNull` wrapper already
/// guarantees presence; only then is the bare name emitted instead of
/// `Optional<name>`. Scalar names go through the alias table at the leaf.
pub(crate) fn type_expr(
    r#type: &TypeRef,
    inside_non_null: bool,
    scalars: &ScalarMap,
    parent: &Type,
    member: &str,
) -> Result<String, Error> {
    let malformed = || Error::MalformedTypeRef {
        type_name: parent.name.clone(),
        field_name: member.to_owned(),
    };

    match r#type.kind {
        TypeKind::List => {
            let inner = r#type.of_type.as_deref().ok_or_else(malformed)?;
            Ok(format!(
                "List<{}>",
                type_expr(inner, false, scalars, parent, member)?
            ))
        }
        TypeKind::NonNull => {
            let inner = r#type.of_type.as_deref().ok_or_else(malformed)?;
            Ok(format!(
                "NonNull<{}>",
                type_expr(inner, true, scalars, parent, member)?
            ))
        }
        _ => {
            let name = r#type.name.as_deref().ok_or_else(malformed)?;
            let name = match r#type.kind {
                TypeKind::Scalar => scalars.resolve(name),
                _ => name,
            };

            Ok(if inside_non_null {
                name.to_owned()
            } else {
                format!("Optional<{name}>")
            })
        }
    }
}

fn render_scalar(ty: &Type, scalars: &ScalarMap) -> Result<String, Error> {
    let mut out = String::new();
    write!(out, "{}", definition_docblock(ty))?;
    write!(out, "type {} = {};", ty.name, scalars.resolve(&ty.name))?;
    Ok(out)
}

fn render_enum(ty: &Type) -> Result<String, Error> {
    let mut out = String::new();
    write!(out, "{}", definition_docblock(ty))?;
    writeln!(out, "type {} = (", ty.name)?;

    let mut values = ty.enum_values().iter().peekable();

    while let Some(value) = values.next() {
        let docblock = Docblock::new(INDENT)
            .description(value.description.as_deref())
            .deprecated(value.is_deprecated, value.deprecation_reason.as_deref());
        write!(out, "{docblock}")?;

        write!(out, "{INDENT}\"{}\"", value.name)?;
        if values.peek().is_some() {
            out.push_str(" |");
        }
        out.push('\n');
    }

    out.push_str(");");
    Ok(out)
}

fn render_union(ty: &Type) -> Result<String, Error> {
    let mut out = String::new();
    write!(out, "{}", definition_docblock(ty))?;
    write!(out, "type {} = ", ty.name)?;

    let mut members = ty.possible_types().iter().peekable();

    if members.peek().is_none() {
        out.push_str("never");
    }

    while let Some(member) = members.next() {
        out.push_str(&member.name);
        if members.peek().is_some() {
            out.push_str(" | ");
        }
    }

    out.push(';');
    Ok(out)
}

/// Objects, interfaces and input objects share the structural shape; they
/// differ in the extends clause and in which member collection is populated.
fn render_structural(ty: &Type, scalars: &ScalarMap, extends: &[&str]) -> Result<String, Error> {
    let mut out = String::new();
    write!(out, "{}", definition_docblock(ty))?;
    write!(out, "interface {}", ty.name)?;

    if !extends.is_empty() {
        write!(out, " extends {}", extends.join(", "))?;
    }

    out.push_str(" {\n");

    for field in ty.fields() {
        if field.name.starts_with("__") {
            continue;
        }
        write_field_member(&mut out, field, scalars, ty)?;
    }

    for input_field in ty.input_fields() {
        write_input_member(&mut out, input_field, scalars, ty)?;
    }

    out.push('}');
    Ok(out)
}

fn write_field_member(
    out: &mut String,
    field: &Field,
    scalars: &ScalarMap,
    parent: &Type,
) -> Result<(), Error> {
    let docblock = Docblock::new(INDENT)
        .description(field.description.as_deref())
        .deprecated(field.is_deprecated, field.deprecation_reason.as_deref());
    write!(out, "{docblock}")?;

    write_member_line(out, &field.name, &field.r#type, scalars, parent)
}

fn write_input_member(
    out: &mut String,
    input_field: &InputValue,
    scalars: &ScalarMap,
    parent: &Type,
) -> Result<(), Error> {
    let docblock = Docblock::new(INDENT)
        .description(input_field.description.as_deref())
        .default_value(input_field.default_value.as_deref());
    write!(out, "{docblock}")?;

    write_member_line(out, &input_field.name, &input_field.r#type, scalars, parent)
}

fn write_member_line(
    out: &mut String,
    name: &str,
    r#type: &TypeRef,
    scalars: &ScalarMap,
    parent: &Type,
) -> Result<(), Error> {
    let separator = match r#type.kind {
        TypeKind::NonNull => ": ",
        _ => "?: ",
    };
    let expression = type_expr(r#type, false, scalars, parent, name)?;

    writeln!(out, "{INDENT}{name}{separator}{expression};")?;
    Ok(())
}

fn definition_docblock(ty: &Type) -> Docblock<'_> {
    Docblock::new("").description(ty.description.as_deref())
}
