//! Deterministic ordering and emission of the generated document.
//!
//! The document is a fixed preamble (utility aliases, then the response
//! envelope) followed by one block per schema type, ordered by kind
//! precedence and then by name. The same ordered unit list backs all three
//! access patterns: eager [`generate()`], pull-based [`Blocks`], and the
//! [`block_stream()`] adapter.

use std::fmt::Write as _;
use std::iter::FusedIterator;

use futures_util::Stream;

use crate::{
    introspection::{Schema, Type},
    render, Error, GeneratorConfig, ScalarMap,
};

/// Generate the whole TypeScript document for a schema.
///
/// The output is byte-identical across runs for the same schema and
/// configuration, and equals the concatenation of the chunks yielded by
/// [`Blocks`].
pub fn generate(schema: &Schema, config: &GeneratorConfig) -> Result<String, Error> {
    let mut out = String::new();

    for chunk in Blocks::new(schema, config)? {
        out.push_str(&chunk?);
    }

    tracing::debug!(bytes = out.len(), "rendered type definitions");
    Ok(out)
}

/// The generated document as an ordered sequence of text chunks, one per
/// preamble or definition unit. Each chunk ends with a blank-line separator.
///
/// Pull-based and finite: once consumed (or once an error is yielded) the
/// iterator is exhausted. An error mid-sequence is yielded in place, never
/// swallowed; chunks already produced are the caller's to keep or discard.
pub struct Blocks<'a> {
    scalars: ScalarMap,
    units: std::vec::IntoIter<Unit<'a>>,
    failed: bool,
}

enum Unit<'a> {
    UtilityAliases,
    ResponseEnvelope(&'a Schema),
    Definition(&'a Type),
}

impl<'a> Blocks<'a> {
    pub fn new(schema: &'a Schema, config: &GeneratorConfig) -> Result<Blocks<'a>, Error> {
        schema.validate()?;
        let scalars = ScalarMap::from_config(config)?;

        let mut definitions: Vec<&Type> = schema
            .types
            .iter()
            .filter(|ty| !ty.name.starts_with("__"))
            .collect();

        // Kind precedence first (the TypeKind variant order), then byte-wise
        // name comparison. Diff-friendliness depends on this being stable.
        definitions.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));

        tracing::debug!(definitions = definitions.len(), "starting translation");

        let mut units = Vec::with_capacity(definitions.len() + 2);
        units.push(Unit::UtilityAliases);
        units.push(Unit::ResponseEnvelope(schema));
        units.extend(definitions.into_iter().map(Unit::Definition));

        Ok(Blocks {
            scalars,
            units: units.into_iter(),
            failed: false,
        })
    }
}

impl Iterator for Blocks<'_> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let rendered = match self.units.next()? {
            Unit::UtilityAliases => Ok(utility_aliases().to_owned()),
            Unit::ResponseEnvelope(schema) => response_envelope(schema),
            Unit::Definition(ty) => render::render_definition(ty, &self.scalars),
        };

        match rendered {
            Ok(mut block) => {
                block.push_str("\n\n");
                Some(Ok(block))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            self.units.size_hint()
        }
    }
}

impl FusedIterator for Blocks<'_> {}

/// The chunk sequence as a [`Stream`]. Backpressure is the consumer's
/// polling: nothing is rendered until the next chunk is polled for.
pub fn block_stream<'a>(
    schema: &'a Schema,
    config: &GeneratorConfig,
) -> Result<impl Stream<Item = Result<String, Error>> + Unpin + 'a, Error> {
    Ok(futures_util::stream::iter(Blocks::new(schema, config)?))
}

/// Names for the wrapping conventions used by the type-reference resolver.
fn utility_aliases() -> &'static str {
    indoc::indoc! {"
        type NonNull<T> = T;
        type List<T> = T[];
        type Optional<T> = T | null;"}
}

/// The request/response envelope: a `Response` whose `data` is the union of
/// the root operation types (plus `null`), and the standard error shape.
fn response_envelope(schema: &Schema) -> Result<String, Error> {
    let mut data_union = String::new();

    for root in [&schema.query_type, &schema.mutation_type, &schema.subscription_type]
        .into_iter()
        .flatten()
    {
        write!(data_union, "{} | ", root.name)?;
    }

    data_union.push_str("null");

    let mut out = String::new();
    writeln!(out, "interface Response {{")?;
    writeln!(out, "{}data: {data_union};", render::INDENT)?;
    writeln!(out, "{}errors?: List<ErrorResponse>;", render::INDENT)?;
    writeln!(out, "}}")?;
    out.push('\n');
    out.push_str(indoc::indoc! {"
        interface ErrorResponse {
          message: string;
          locations?: List<ErrorLocation>;
        }

        interface ErrorLocation {
          line: number;
          column: number;
        }"});

    Ok(out)
}
