//! JSON text codec
//!
//! Thin adapter over `serde_json` that turns raw text into a [`JsonValue`] or a
//! [`SyntaxError`], and renders a value back to text in one of two
//! [`RenderMode`]s. Object key order is preserved (the workspace enables
//! `serde_json/preserve_order`), so `{"b":2,"a":1}` renders with `b` first.
//!
//! Numbers are kept as written while parsing (`arbitrary_precision`), so
//! values outside the `f64` range are accepted. On output they are printed
//! the way JavaScript prints them: `1.0` as `1`, `-3e2` as `-300`, `1e21` as
//! `1e+21`. Numbers that do not fit an `f64` keep their source text.
//!
//! [`transform`] is the single read-transform step shared by every intent
//! (edit, upload, format, minify, validate, download): it never produces a
//! partial rendering, only a rendered document or [`SENTINEL`].

use std::borrow::Cow;
use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use thiserror::Error;

/// Structured JSON value produced by a successful [`parse`].
pub type JsonValue = serde_json::Value;

/// Literal text written into a surface in place of a rendering when parsing fails.
pub const SENTINEL: &str = "Invalid JSON";

/// Indentation used by [`RenderMode::Pretty`].
pub const PRETTY_INDENT: &[u8] = b"    ";

/// Deepest array/object nesting accepted by [`parse`].
pub const MAX_DEPTH: usize = 10_000;

/// Nesting above which [`transform`] switches to a larger stack
const STACK_GROWTH_DEPTH: usize = 64;

/// Stack reserved for deeply nested documents
const DEEP_STACK_SIZE: usize = 256 * 1024 * 1024;

/// Serialization style for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Four-space indentation, one newline per nesting level
    #[default]
    Pretty,
    /// No insignificant whitespace
    Compact,
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderMode::Pretty => write!(f, "pretty"),
            RenderMode::Compact => write!(f, "compact"),
        }
    }
}

/// Malformed JSON text.
///
/// Line and column are 1-based, as reported by `serde_json`. Empty input is
/// reported at line 1, column 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line} column {column}")]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl From<serde_json::Error> for SyntaxError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        // serde_json appends " at line X column Y" to Display; keep the bare message
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        Self {
            line,
            column,
            message,
        }
    }
}

/// Deepest nesting in `text`, ignoring brackets inside strings.
///
/// Fails where the nesting first exceeds [`MAX_DEPTH`].
fn nesting_depth(text: &str) -> Result<usize, SyntaxError> {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let (mut line, mut column) = (1usize, 0usize);
    let mut in_string = false;
    let mut escaped = false;

    for ch in text.chars() {
        if ch == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }

        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '[' | '{' => {
                depth += 1;
                if depth > MAX_DEPTH {
                    return Err(SyntaxError {
                        line,
                        column,
                        message: format!("nesting deeper than {} levels", MAX_DEPTH),
                    });
                }
                deepest = deepest.max(depth);
            }
            ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(deepest)
}

/// Parse raw text into a [`JsonValue`].
///
/// Nesting is limited only by [`MAX_DEPTH`]; callers handling documents nested
/// deeper than a few hundred levels should go through [`transform`], which
/// provides the stack for it.
pub fn parse(text: &str) -> Result<JsonValue, SyntaxError> {
    nesting_depth(text)?;
    parse_unbounded(text)
}

fn parse_unbounded(text: &str) -> Result<JsonValue, SyntaxError> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = JsonValue::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Render a value in the requested mode.
pub fn render(value: &JsonValue, mode: RenderMode) -> serde_json::Result<String> {
    let mut out = Vec::with_capacity(128);
    match mode {
        RenderMode::Compact => write_with(&mut out, value, CompactFormatter)?,
        RenderMode::Pretty => {
            write_with(&mut out, value, PrettyFormatter::with_indent(PRETTY_INDENT))?
        }
    }
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn write_with<F: Formatter>(
    out: &mut Vec<u8>,
    value: &JsonValue,
    formatter: F,
) -> serde_json::Result<()> {
    let mut ser = Serializer::with_formatter(out, NumberFormatter(formatter));
    value.serialize(&mut ser)
}

/// Number text as JavaScript's `Number.prototype.toString` prints it
fn js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// Canonical form of a number token kept verbatim by the parser
fn normalize_number(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['.', 'e', 'E']) {
        // Integer literals are already canonical, beyond `u64` included
        return if raw == "-0" {
            Cow::Borrowed("0")
        } else {
            Cow::Borrowed(raw)
        };
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Cow::Owned(js_number(value)),
        _ => Cow::Borrowed(raw),
    }
}

/// Layout from `F`, numbers in JavaScript form
struct NumberFormatter<F>(F);

impl<F: Formatter> Formatter for NumberFormatter<F> {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(js_number(value).as_bytes())
    }

    fn write_number_str<W>(&mut self, writer: &mut W, value: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(normalize_number(value).as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.0.end_object_value(writer)
    }
}

/// Outcome of a single read-transform step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    /// Rendered document, or [`SENTINEL`] when `ok` is false
    pub text: String,
    /// Whether the source parsed
    pub ok: bool,
}

impl Transform {
    fn rendered(text: String) -> Self {
        Self { text, ok: true }
    }

    fn invalid() -> Self {
        Self {
            text: SENTINEL.to_string(),
            ok: false,
        }
    }
}

/// Parse `source` and re-render it in `mode`.
///
/// Pure: `(source text, mode) -> (target text, success)`. Deeply nested
/// documents are parsed, rendered and dropped on a dedicated larger stack.
pub fn transform(source: &str, mode: RenderMode) -> Transform {
    let depth = match nesting_depth(source) {
        Ok(depth) => depth,
        Err(err) => {
            tracing::trace!("transform({}) rejected input: {}", mode, err);
            return Transform::invalid();
        }
    };

    if depth > STACK_GROWTH_DEPTH {
        stacker::grow(DEEP_STACK_SIZE, || transform_unbounded(source, mode))
    } else {
        transform_unbounded(source, mode)
    }
}

fn transform_unbounded(source: &str, mode: RenderMode) -> Transform {
    let value = match parse_unbounded(source) {
        Ok(value) => value,
        Err(err) => {
            tracing::trace!("transform({}) rejected input: {}", mode, err);
            return Transform::invalid();
        }
    };

    match render(&value, mode) {
        Ok(text) => Transform::rendered(text),
        Err(err) => {
            tracing::error!("Failed to render parsed JSON: {}", err);
            Transform::invalid()
        }
    }
}
