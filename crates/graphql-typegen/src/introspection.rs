//! The data model for GraphQL introspection documents.
//!
//! This mirrors the `__Schema` shape returned by the standard introspection
//! query. The document is immutable input: translation only reads it.

use serde::Deserialize;

use crate::Error;

/// A parsed introspection schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default)]
    pub query_type: Option<NamedType>,
    #[serde(default)]
    pub mutation_type: Option<NamedType>,
    #[serde(default)]
    pub subscription_type: Option<NamedType>,
    pub types: Vec<Type>,
    /// Directive definitions. Parsed so round-tripping callers keep them, but
    /// never rendered.
    #[serde(default)]
    pub directives: Vec<Directive>,
}

impl Schema {
    /// Parse a schema from an introspection response. The payload may sit at
    /// `data.__schema`, at `__schema`, or be the bare schema object.
    pub fn from_json_value(document: serde_json::Value) -> Result<Schema, Error> {
        let mut payload = match document {
            serde_json::Value::Object(object) => object,
            _ => return Err(Error::MissingSchema),
        };

        for key in ["data", "__schema"] {
            match payload.remove(key) {
                Some(serde_json::Value::Object(inner)) => payload = inner,
                Some(_) => return Err(Error::MissingSchema),
                None => (),
            }
        }

        if !payload.contains_key("types") {
            return Err(Error::MissingTypes);
        }

        let schema: Schema = serde_json::from_value(serde_json::Value::Object(payload))?;
        schema.validate()?;

        Ok(schema)
    }

    /// Parse a schema from raw introspection JSON text.
    pub fn from_json_str(document: &str) -> Result<Schema, Error> {
        Schema::from_json_value(serde_json::from_str(document)?)
    }

    /// Check the root-type and definition-kind invariants. Called by the
    /// parsing entry points; hand-built schemas go through it again before
    /// emission.
    pub fn validate(&self) -> Result<(), Error> {
        for ty in &self.types {
            if matches!(ty.kind, TypeKind::List | TypeKind::NonNull) {
                return Err(Error::WrappingKindDefinition { name: ty.name.clone() });
            }
        }

        for (operation, root) in [
            ("query", &self.query_type),
            ("mutation", &self.mutation_type),
            ("subscription", &self.subscription_type),
        ] {
            let Some(root) = root else { continue };

            if !self.types.iter().any(|ty| ty.name == root.name) {
                return Err(Error::UnknownRootType {
                    operation,
                    name: root.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// The closed classification of schema types. `List` and `NonNull` only occur
/// inside [`TypeRef`]s; a definition carrying them is rejected at validation.
///
/// Variant order is the emission precedence for definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Enum,
    Union,
    Interface,
    Object,
    InputObject,
    List,
    NonNull,
}

/// A type definition. Only the collections relevant to `kind` are populated;
/// introspection sends `null` for the others.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    pub kind: TypeKind,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<Field>>,
    #[serde(default)]
    pub input_fields: Option<Vec<InputValue>>,
    #[serde(default)]
    pub interfaces: Option<Vec<NamedType>>,
    #[serde(default)]
    pub enum_values: Option<Vec<EnumValue>>,
    #[serde(default)]
    pub possible_types: Option<Vec<NamedType>>,
}

impl Type {
    pub fn fields(&self) -> &[Field] {
        self.fields.as_deref().unwrap_or_default()
    }

    pub fn input_fields(&self) -> &[InputValue] {
        self.input_fields.as_deref().unwrap_or_default()
    }

    pub fn interfaces(&self) -> &[NamedType] {
        self.interfaces.as_deref().unwrap_or_default()
    }

    pub fn enum_values(&self) -> &[EnumValue] {
        self.enum_values.as_deref().unwrap_or_default()
    }

    pub fn possible_types(&self) -> &[NamedType] {
        self.possible_types.as_deref().unwrap_or_default()
    }
}

/// A possibly wrapped reference to a named type: a named leaf, or a LIST /
/// NON_NULL wrapper around one inner reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

/// An output field on an object or interface type. Argument definitions are
/// accepted in the JSON but not modeled: generated member types do not carry
/// them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub r#type: TypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// A field on an input object type. `default_value` is the GraphQL literal in
/// its source form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub r#type: TypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
}

/// One member of an enum definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// A reference to a type by name, as used for root operation types, interface
/// implementations and union membership.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedType {
    pub name: String,
}

/// A directive definition. Carried through unused.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directive {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
