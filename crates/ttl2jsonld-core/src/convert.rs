//! Turtle → JSON-LD conversion of a single document.
//!
//! A document is parsed completely into memory and serialized into a buffer
//! before anything touches the target path, so a malformed source never
//! leaves a target file behind.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use oxigraph::io::{RdfFormat, RdfParseError, RdfParser};
use oxigraph::model::{BlankNode, GraphName, NamedOrBlankNode, Quad, Term};
use oxjsonld::JsonLdSerializer;
use serde_json::Value;
use url::Url;

use crate::config::{ConvertOptions, OutputFormat};
use crate::error::ConvertError;
use crate::report::Conversion;

/// Origin reported in errors for documents that did not come from a file.
const IN_MEMORY_ORIGIN: &str = "<input>";

/// An RDF document held in memory between parsing and serialization.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub quads: Vec<Quad>,
    /// `(name, iri)` pairs of the `@prefix` declarations, in source order.
    pub prefixes: Vec<(String, String)>,
}

/// Path of the JSON-LD file written for `source`: the final extension is
/// replaced by the target extension, in the same directory.
pub fn target_path(source: &Path, options: &ConvertOptions) -> PathBuf {
    source.with_extension(&options.target_extension)
}

/// Parse a whole Turtle document.
///
/// `origin` is only used to label errors. Relative IRIs are resolved against
/// `base_iri` when given. Blank nodes are renamed `b0`, `b1`, ... in order of
/// first appearance, so the same input always yields the same quads.
pub fn parse_turtle<R: Read>(
    reader: R,
    base_iri: Option<&str>,
    origin: &Path,
) -> Result<ParsedDocument, ConvertError> {
    let mut parser = RdfParser::from_format(RdfFormat::Turtle);
    if let Some(iri) = base_iri {
        parser = parser
            .with_base_iri(iri)
            .map_err(|e| ConvertError::InvalidBaseIri {
                iri: iri.to_string(),
                message: e.to_string(),
            })?;
    }

    let mut quads_parser = parser.for_reader(reader);
    let mut labels = BlankNodeLabels::default();
    let mut quads = Vec::new();
    for quad in quads_parser.by_ref() {
        let quad = quad.map_err(|e| parse_error(e, origin))?;
        quads.push(labels.relabel(quad));
    }

    // Prefixes are only complete once the whole document has been read.
    let prefixes = quads_parser
        .prefixes()
        .map(|(name, iri)| (name.to_string(), iri.to_string()))
        .collect();

    Ok(ParsedDocument { quads, prefixes })
}

/// Serialize a document as JSON-LD text, ending with a newline.
pub fn serialize_jsonld(
    document: &ParsedDocument,
    format: OutputFormat,
) -> Result<String, ConvertError> {
    let mut serializer = JsonLdSerializer::new();
    // JSON-LD has no empty term, so the default prefix stays out of @context.
    for (name, iri) in document.prefixes.iter().filter(|(name, _)| !name.is_empty()) {
        serializer = serializer
            .with_prefix(name.as_str(), iri.as_str())
            .map_err(|e| ConvertError::Serialize(io::Error::new(io::ErrorKind::InvalidInput, e)))?;
    }

    let mut writer = serializer.for_writer(Vec::new());
    for quad in &document.quads {
        writer.serialize_quad(quad).map_err(ConvertError::Serialize)?;
    }
    let raw = writer.finish().map_err(ConvertError::Serialize)?;

    let value: Value = if raw.iter().all(u8::is_ascii_whitespace) {
        Value::Array(Vec::new())
    } else {
        serde_json::from_slice(&raw)?
    };

    let mut text = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(&value)?,
        OutputFormat::Compact => serde_json::to_string(&value)?,
    };
    text.push('\n');
    Ok(text)
}

/// Convert Turtle text to JSON-LD text without touching the filesystem.
pub fn convert_str(
    turtle: &str,
    base_iri: Option<&str>,
    format: OutputFormat,
) -> Result<String, ConvertError> {
    let document = parse_turtle(turtle.as_bytes(), base_iri, Path::new(IN_MEMORY_ORIGIN))?;
    serialize_jsonld(&document, format)
}

/// Convert one source file and write its JSON-LD sibling.
///
/// The target is created or truncated only after parsing and serialization
/// both succeeded.
pub fn convert_one(source: &Path, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let target = target_path(source, options);
    let base_iri = match &options.base_iri {
        Some(iri) => iri.clone(),
        None => file_base_iri(source)?,
    };

    let file = File::open(source).map_err(|e| ConvertError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    let document = parse_turtle(BufReader::new(file), Some(&base_iri), source)?;
    let text = serialize_jsonld(&document, options.format)?;

    fs::write(&target, text).map_err(|e| ConvertError::Write {
        path: target.clone(),
        source: e,
    })?;

    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        triples = document.quads.len(),
        prefixes = document.prefixes.len(),
        "wrote JSON-LD document"
    );

    Ok(Conversion {
        source: source.to_path_buf(),
        target,
        triples: document.quads.len(),
    })
}

/// Hands out stable blank node labels in order of first appearance.
#[derive(Default)]
struct BlankNodeLabels {
    labels: HashMap<BlankNode, BlankNode>,
}

impl BlankNodeLabels {
    fn label(&mut self, node: BlankNode) -> BlankNode {
        let next = self.labels.len();
        self.labels
            .entry(node)
            .or_insert_with(|| BlankNode::new_unchecked(format!("b{next}")))
            .clone()
    }

    fn relabel(&mut self, quad: Quad) -> Quad {
        let subject = match quad.subject {
            NamedOrBlankNode::BlankNode(node) => self.label(node).into(),
            other => other,
        };
        let object = match quad.object {
            Term::BlankNode(node) => self.label(node).into(),
            other => other,
        };
        let graph_name = match quad.graph_name {
            GraphName::BlankNode(node) => self.label(node).into(),
            other => other,
        };
        Quad::new(subject, quad.predicate, object, graph_name)
    }
}

/// `file://` URL of the canonical source path.
fn file_base_iri(source: &Path) -> Result<String, ConvertError> {
    let absolute = fs::canonicalize(source).map_err(|e| ConvertError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    Url::from_file_path(&absolute)
        .map(|url| url.to_string())
        .map_err(|()| ConvertError::InvalidBaseIri {
            iri: absolute.display().to_string(),
            message: "not an absolute file path".to_string(),
        })
}

fn parse_error(err: RdfParseError, origin: &Path) -> ConvertError {
    match err {
        RdfParseError::Io(source) => ConvertError::Read {
            path: origin.to_path_buf(),
            source,
        },
        other => ConvertError::Syntax {
            path: origin.to_path_buf(),
            message: other.to_string(),
        },
    }
}
