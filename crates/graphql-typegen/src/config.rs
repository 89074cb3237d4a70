/// Options for a translation run. See [crate::generate()].
#[derive(Debug, Default, Clone)]
pub struct GeneratorConfig {
    pub(crate) numeric_scalars: Vec<String>,
    pub(crate) scalar_aliases: Vec<String>,
}

impl GeneratorConfig {
    /// Map a scalar to the TypeScript `number` primitive.
    pub fn with_numeric_scalar(mut self, name: impl Into<String>) -> Self {
        self.numeric_scalars.push(name.into());
        self
    }

    /// Map a scalar to an arbitrary TypeScript type expression. The entry has
    /// the form `name=expression`. Applied after the numeric scalars, so an
    /// alias wins when both name the same scalar.
    pub fn with_scalar_alias(mut self, entry: impl Into<String>) -> Self {
        self.scalar_aliases.push(entry.into());
        self
    }
}
