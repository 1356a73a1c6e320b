//! Path expression compiler and parse entry points
//!
//! `parse_path` is the total entry point returning an outcome record;
//! `PathParser::compile` is the strict form returning a `Result`.

use serde::{Deserialize, Serialize};

use crate::{
    ast::PathAst,
    error::{PathError, PathResult, parse_error},
    expression::validation::{
        DEFAULT_MAX_FILTER_DEPTH, DEFAULT_MAX_RECURSIVE_DESCENTS, validate_path,
    },
    selector_parser::SelectorParser,
    tokenizer::PathTokenizer,
};

/// Options controlling parsing and post-parse validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Return the AST parsed so far alongside a failure
    pub allow_partial: bool,
    /// Run the validator after a successful parse
    pub validate: bool,
    /// Ceiling on `..` operators in one path
    pub max_recursive_descents: usize,
    /// Ceiling on filter expression nesting and tree height
    pub max_filter_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_partial: false,
            validate: true,
            max_recursive_descents: DEFAULT_MAX_RECURSIVE_DESCENTS,
            max_filter_depth: DEFAULT_MAX_FILTER_DEPTH,
        }
    }
}

/// Result record of [`parse_path`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Parsed AST; on failure only present with `allow_partial`
    pub ast: Option<PathAst>,
    pub success: bool,
    pub error: Option<PathError>,
}

impl ParseOutcome {
    /// Convert into a `Result`, dropping any partial AST
    pub fn into_result(self) -> PathResult<PathAst> {
        match (self.ast, self.error) {
            (Some(ast), None) => Ok(ast),
            (_, Some(error)) => Err(error),
            (None, None) => Err(parse_error("no path parsed", "end of input", 0)),
        }
    }
}

/// Parse `text` without raising; failures are reported in the outcome
pub fn parse_path(text: &str, options: &ParseOptions) -> ParseOutcome {
    let (segments, failure) = parse_segments(text, options.max_filter_depth);

    let error = match failure {
        Some(error) => Some(error),
        None if options.validate => {
            validate_path(&segments, options.max_recursive_descents).err()
        }
        None => None,
    };

    match error {
        None => {
            tracing::debug!(
                target: "treepath::parser",
                path = text,
                segments = segments.len(),
                "parsed path expression"
            );
            ParseOutcome {
                ast: Some(segments),
                success: true,
                error: None,
            }
        }
        Some(error) => {
            tracing::debug!(
                target: "treepath::parser",
                path = text,
                kind = error.kind().as_str(),
                position = ?error.position(),
                "path expression rejected"
            );
            ParseOutcome {
                ast: options.allow_partial.then_some(segments),
                success: false,
                error: Some(error),
            }
        }
    }
}

/// Tokenize and parse, keeping every segment completed before a failure
fn parse_segments(text: &str, max_filter_depth: usize) -> (PathAst, Option<PathError>) {
    let end = text.chars().count();
    let mut tokens = match PathTokenizer::tokenize(text) {
        Ok(tokens) => tokens,
        Err(error) => return (PathAst::default(), Some(error)),
    };

    let mut parser = SelectorParser::new(&mut tokens, end, max_filter_depth);
    let mut segments = Vec::new();

    if parser.at_end() {
        return (
            PathAst::default(),
            Some(parse_error("empty path expression", "end of input", 0)),
        );
    }

    match parser.parse_head() {
        Ok(Some(head)) => segments.push(head),
        Ok(None) => {}
        Err(error) => return (PathAst::new(segments), Some(error)),
    }

    while !parser.at_end() {
        match parser.parse_segment() {
            Ok(segment) => segments.push(segment),
            Err(error) => return (PathAst::new(segments), Some(error)),
        }
    }

    (PathAst::new(segments), None)
}

/// Path expression parser and compiler
pub struct PathParser;

impl PathParser {
    /// Compile a path expression with default options
    ///
    /// # Errors
    ///
    /// Returns a `Lex`, `Parse` or `Validation` error for malformed or
    /// semantically invalid paths.
    pub fn compile(expression: &str) -> PathResult<PathAst> {
        Self::compile_with(expression, &ParseOptions::default())
    }

    /// Compile a path expression with explicit options
    ///
    /// # Errors
    ///
    /// Same as [`PathParser::compile`]; `allow_partial` is ignored.
    pub fn compile_with(expression: &str, options: &ParseOptions) -> PathResult<PathAst> {
        let strict = ParseOptions {
            allow_partial: false,
            ..*options
        };
        parse_path(expression, &strict).into_result()
    }
}
