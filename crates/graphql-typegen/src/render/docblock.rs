use std::fmt::{self, Display};

/// Lines wider than this, counting indentation and the ` * ` continuation
/// marker, get word-wrapped.
const MAX_COLUMNS: usize = 80;

/// A JSDoc block for a definition or member. Displays as nothing when no
/// facet is present; otherwise facets appear in a fixed order — deprecation,
/// default value, description — separated by blank comment lines.
///
/// A default value is annotated whenever the document carries one, including
/// `"0"`, `"false"` and the empty string. Only absence suppresses it.
pub(crate) struct Docblock<'a> {
    description: Option<&'a str>,
    deprecation: Option<Option<&'a str>>,
    default_value: Option<&'a str>,
    indent: &'static str,
}

impl<'a> Docblock<'a> {
    pub(crate) fn new(indent: &'static str) -> Self {
        Docblock {
            description: None,
            deprecation: None,
            default_value: None,
            indent,
        }
    }

    pub(crate) fn description(mut self, description: Option<&'a str>) -> Self {
        self.description = description.filter(|text| !text.trim().is_empty());
        self
    }

    pub(crate) fn deprecated(mut self, is_deprecated: bool, reason: Option<&'a str>) -> Self {
        self.deprecation = is_deprecated.then_some(reason);
        self
    }

    pub(crate) fn default_value(mut self, literal: Option<&'a str>) -> Self {
        self.default_value = literal;
        self
    }

    fn is_empty(&self) -> bool {
        self.description.is_none() && self.deprecation.is_none() && self.default_value.is_none()
    }
}

impl Display for Docblock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        let indent = self.indent;
        let mut first_facet = true;
        let mut separate = |f: &mut fmt::Formatter<'_>| {
            if first_facet {
                first_facet = false;
                Ok(())
            } else {
                writeln!(f, "{indent} *")
            }
        };

        writeln!(f, "{indent}/**")?;

        if let Some(reason) = &self.deprecation {
            separate(f)?;
            match reason {
                Some(reason) => writeln!(f, "{indent} * @deprecated {reason}")?,
                None => writeln!(f, "{indent} * @deprecated")?,
            }
        }

        if let Some(literal) = self.default_value {
            separate(f)?;
            writeln!(f, "{indent} * @default {literal}")?;
        }

        if let Some(description) = self.description {
            separate(f)?;
            write_wrapped(f, description, indent)?;
        }

        writeln!(f, "{indent} */")
    }
}

/// Greedy word wrap. Explicit line breaks in the source text are kept; blank
/// source lines become blank comment lines.
fn write_wrapped(f: &mut fmt::Formatter<'_>, text: &str, indent: &str) -> fmt::Result {
    let width = MAX_COLUMNS.saturating_sub(indent.len() + 3).max(20);

    for line in text.lines() {
        let mut words = line.split_whitespace().peekable();

        if words.peek().is_none() {
            writeln!(f, "{indent} *")?;
            continue;
        }

        let mut current = String::new();

        for word in words {
            if !current.is_empty() && current.len() + 1 + word.len() > width {
                writeln!(f, "{indent} * {current}")?;
                current.clear();
            }

            if !current.is_empty() {
                current.push(' ');
            }

            current.push_str(word);
        }

        writeln!(f, "{indent} * {current}")?;
    }

    Ok(())
}
