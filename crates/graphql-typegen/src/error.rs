use std::fmt;

/// Errors produced while translating an introspection document.
///
/// Every variant is terminal for the translation that raised it: there are no
/// warnings and no silent skips.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is not valid JSON, or a value in it does not have the
    /// expected shape. Unknown type kinds surface here, at parse time.
    #[error("invalid introspection document: {0}")]
    Json(#[from] serde_json::Error),

    /// The envelope was present but held no schema payload.
    #[error("no introspection payload found (expected `data.__schema`, `__schema` or a bare schema object)")]
    MissingSchema,

    /// The schema payload has no `types` array.
    #[error("the introspection schema has no `types` array")]
    MissingTypes,

    /// A root operation type names an entity that is not in the schema.
    #[error("the {operation} root type `{name}` is not defined in the schema")]
    UnknownRootType { operation: &'static str, name: String },

    /// A type reference is neither a named leaf nor a LIST/NON_NULL wrapper
    /// with an inner type.
    #[error("malformed type reference on `{type_name}.{field_name}`")]
    MalformedTypeRef { type_name: String, field_name: String },

    /// A type definition carries the LIST or NON_NULL wrapping kind, which
    /// only makes sense inside a type reference.
    #[error("type `{name}` is defined with a wrapping kind (LIST or NON_NULL)")]
    WrappingKindDefinition { name: String },

    /// A scalar alias entry is not of the form `name=expression`.
    #[error("invalid scalar alias `{entry}` (expected `name=expression`)")]
    InvalidScalarAlias { entry: String },

    #[error("formatting failed")]
    Fmt(#[from] fmt::Error),
}
