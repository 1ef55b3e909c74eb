//! Structural scanner for Rust-like source.
//!
//! Best-effort extraction of function records from a restricted grammar:
//! `impl` blocks, functions, structs, `use`/attribute/`extern` statements
//! and `///` doc comments. Anything else is dropped one line at a time
//! with a warning. This is a scanner, not a parser: brace characters in
//! unexpected lexical positions (string literals, macros) can mis-balance
//! the skip, in which case the file fails as a whole.

use crate::domain::function_record::FunctionRecord;
use crate::infrastructure::scanner::{skip_to_match, take_identifier, take_line};
use crate::ports::SourceParser;
use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_IMPL_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^impl\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{").unwrap());

static RE_FN_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((?:(?:pub(?:\s*\(\s*crate\s*\))?|const|async|unsafe)\s+)*)fn\s+").unwrap()
});

static RE_STRUCT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:pub(?:\s*\(\s*crate\s*\))?\s+)?struct\s+").unwrap());

pub struct ScanParser;

impl SourceParser for ScanParser {
    fn parse(&self, file: &str, text: &str) -> Result<Vec<FunctionRecord>> {
        let mut ctx = ScanContext::default();
        scan(file, text, &mut ctx)?;
        Ok(ctx.records)
    }
}

/// Mutable scan state threaded through the recursive scan calls.
#[derive(Debug, Default)]
struct ScanContext {
    /// Doc lines accumulated since the last non-doc construct.
    doc: Vec<String>,
    /// Type name of the `impl` block currently being scanned.
    owner: Option<String>,
    records: Vec<FunctionRecord>,
}

/// Dispatch loop. Trims leading whitespace, then consumes one construct
/// per iteration until the text is exhausted.
fn scan(file: &str, mut text: &str, ctx: &mut ScanContext) -> Result<()> {
    loop {
        text = text.trim_start();
        if text.is_empty() {
            return Ok(());
        }

        if let Some(caps) = RE_IMPL_HEADER.captures(text) {
            ctx.doc.clear();
            text = parse_impl(file, text, caps[1].to_string(), ctx)?;
        } else if RE_FN_HEADER.is_match(text) {
            text = parse_function(file, text, ctx)?;
        } else if RE_STRUCT_HEADER.is_match(text) {
            ctx.doc.clear();
            text = skip_struct(text)?;
        } else if text.starts_with("use ") {
            ctx.doc.clear();
            text = take_line(text).1;
        } else if let Some(after) = text.strip_prefix("///") {
            let (line, remainder) = take_line(after);
            let line = line.strip_prefix(' ').unwrap_or(line);
            ctx.doc.push(line.trim_end().to_string());
            text = remainder;
        } else if text.starts_with("#[") {
            ctx.doc.clear();
            text = take_line(text).1;
        } else if text.starts_with("extern") {
            ctx.doc.clear();
            text = skip_extern(text)?;
        } else {
            let (line, remainder) = take_line(text);
            eprintln!("[WARN] {}: skipping unrecognized line: {}", file, line.trim());
            ctx.doc.clear();
            text = remainder;
        }
    }
}

/// Scan the body of `impl Owner { ... }` with the owner set, then return
/// to free-function mode.
fn parse_impl<'a>(
    file: &str,
    text: &'a str,
    owner: String,
    ctx: &mut ScanContext,
) -> Result<&'a str> {
    let brace = match text.find('{') {
        Some(i) => i,
        None => bail!("impl block without a body"),
    };
    let (body, rest) = skip_to_match(&text[brace..])?;
    ctx.owner = Some(owner);
    scan(file, body, ctx)?;
    ctx.owner = None;
    Ok(rest)
}

/// Parse one function declaration and its body into a record.
fn parse_function<'a>(file: &str, text: &'a str, ctx: &mut ScanContext) -> Result<&'a str> {
    let caps = match RE_FN_HEADER.captures(text) {
        Some(caps) => caps,
        None => bail!("not a function header"),
    };
    let modifiers = caps[1].trim().to_string();
    let rest = &text[caps[0].len()..];

    let (name, rest) = take_identifier(rest);
    if name.is_empty() {
        bail!("{}: expected an identifier after `fn`", file);
    }
    let mut rest = rest.trim_start();

    let generics = if rest.starts_with('<') {
        let (inner, after) = skip_to_match(rest)?;
        rest = after;
        Some(inner.to_string())
    } else {
        None
    };

    if !rest.starts_with('(') {
        bail!("{}: expected `(` after `fn {}`", file, name);
    }
    let (raw_args, after) = skip_to_match(rest)?;
    rest = after;
    let args = parse_args(raw_args);

    let mut return_type = None;
    if let Some(after_arrow) = rest.strip_prefix("->") {
        let (ty, after) = parse_return_type(after_arrow.trim_start())?;
        return_type = Some(ty);
        rest = after;
    }

    if !rest.starts_with('{') {
        bail!("{}: expected `{{` to open the body of `fn {}`", file, name);
    }
    let (body, rest) = skip_to_match(rest)?;

    ctx.records.push(FunctionRecord {
        file: file.to_string(),
        owner: ctx.owner.clone(),
        doc: std::mem::take(&mut ctx.doc),
        modifiers,
        name: name.to_string(),
        generics,
        args,
        return_type,
        body: body.trim().to_string(),
    });
    Ok(rest)
}

/// Return type text: a leading type identifier, an optional `<...>` block,
/// then anything further up to (not including) the body's `{`. Compound
/// returns (`Result<Foo, Err>`, `&str`, `*const Graph`) come out as raw
/// text.
fn parse_return_type(text: &str) -> Result<(String, &str)> {
    let (ident, mut rest) = take_identifier(text);
    let mut ty = ident.to_string();

    if !ident.is_empty() && rest.starts_with('<') {
        let (inner, after) = skip_to_match(rest)?;
        ty.push('<');
        ty.push_str(inner);
        ty.push('>');
        rest = after;
    }

    let brace = match rest.find('{') {
        Some(i) => i,
        None => bail!("return type with no function body"),
    };
    ty.push_str(rest[..brace].trim());
    Ok((ty.trim().to_string(), &rest[brace..]))
}

/// Split the raw argument text into (name, type) pairs.
///
/// Token heuristic, not a grammar: a leading segment containing `self`
/// becomes the receiver pair, the remainder is split on `:` and the tails
/// re-split at their last comma. Types whose generics contain top-level
/// commas confuse the split; that limitation is accepted.
fn parse_args(raw: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut rest = raw.trim();
    if rest.is_empty() {
        return out;
    }

    let head = rest.split(',').next().unwrap_or(rest);
    if head.contains("self") {
        out.push(("self".to_string(), head.trim().to_string()));
        rest = match rest.find(',') {
            Some(i) => rest[i + 1..].trim(),
            None => "",
        };
    }
    if rest.is_empty() {
        return out;
    }

    let chunks: Vec<&str> = rest.split(':').collect();
    if chunks.len() < 2 {
        return out;
    }

    let mut names = vec![chunks[0]];
    let mut types = Vec::new();
    for chunk in chunks[1..chunks.len() - 1].iter().copied() {
        match chunk.rfind(',') {
            Some(i) => {
                types.push(&chunk[..i]);
                names.push(&chunk[i + 1..]);
            }
            None => types.push(chunk),
        }
    }
    types.push(chunks[chunks.len() - 1]);

    for (name, ty) in names.iter().zip(types.iter()) {
        let name = name.trim();
        let name = name.strip_prefix("mut ").unwrap_or(name).trim();
        let ty = ty.trim().trim_end_matches(',').trim_end();
        out.push((name.to_string(), ty.to_string()));
    }
    out
}

/// Discard a struct declaration together with its balanced `{...}` body.
/// Unit and tuple structs end at `;` instead and are dropped through it.
fn skip_struct(text: &str) -> Result<&str> {
    let brace = text.find('{');
    let semi = text.find(';');
    match (brace, semi) {
        (Some(b), s) if s.map_or(true, |s| b < s) => {
            let (_, rest) = skip_to_match(&text[b..])?;
            Ok(rest)
        }
        (_, Some(s)) => Ok(text[s + 1..].trim_start()),
        (_, None) => bail!("struct declaration with no body"),
    }
}

/// Discard an `extern { ... }` block, or the line for `extern crate`-style
/// statements without a brace block.
fn skip_extern(text: &str) -> Result<&str> {
    match text.find('{') {
        Some(i) => {
            let (_, rest) = skip_to_match(&text[i..])?;
            Ok(rest)
        }
        None => Ok(take_line(text).1),
    }
}
