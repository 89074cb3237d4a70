//! The scalar alias table: which TypeScript type a GraphQL scalar maps to.

use std::collections::BTreeMap;

use crate::{Error, GeneratorConfig};

/// The TypeScript type used for scalars with no alias.
const DEFAULT_SCALAR_TYPE: &str = "string";
const NUMERIC_SCALAR_TYPE: &str = "number";

const BUILTIN_SCALARS: &[(&str, &str)] = &[
    ("Boolean", "boolean"),
    ("Float", "number"),
    ("ID", "string"),
    ("Int", "number"),
    ("String", "string"),
];

/// A mapping from GraphQL scalar name to a TypeScript type expression. Built
/// once per translation, read-only afterwards.
///
/// Construction folds three layers, later writes winning: the built-in
/// scalars, then the caller's numeric list, then the caller's
/// `name=expression` pairs.
#[derive(Debug, Clone)]
pub struct ScalarMap {
    aliases: BTreeMap<String, String>,
}

impl ScalarMap {
    pub(crate) fn from_config(config: &GeneratorConfig) -> Result<ScalarMap, Error> {
        let mut aliases: BTreeMap<String, String> = BUILTIN_SCALARS
            .iter()
            .map(|(name, alias)| (name.to_string(), alias.to_string()))
            .collect();

        for name in &config.numeric_scalars {
            aliases.insert(name.clone(), NUMERIC_SCALAR_TYPE.to_owned());
        }

        for entry in &config.scalar_aliases {
            let Some((name, expression)) = entry.split_once('=') else {
                return Err(Error::InvalidScalarAlias { entry: entry.clone() });
            };

            if name.is_empty() || expression.is_empty() {
                return Err(Error::InvalidScalarAlias { entry: entry.clone() });
            }

            aliases.insert(name.to_owned(), expression.to_owned());
        }

        Ok(ScalarMap { aliases })
    }

    /// The TypeScript type for a scalar name, falling back to the string
    /// primitive for unmapped scalars.
    pub fn resolve(&self, scalar_name: &str) -> &str {
        self.aliases
            .get(scalar_name)
            .map(String::as_str)
            .unwrap_or(DEFAULT_SCALAR_TYPE)
    }
}
