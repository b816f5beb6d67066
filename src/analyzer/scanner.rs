//! Go source scanner.
//!
//! A deliberately small reader of Go files: it strips comments, then reads
//! the package clause, the import declarations that directly follow it, and
//! the names of top-level functions. Nothing is type-checked and function
//! bodies are never looked at.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use miette::NamedSource;
use regex::Regex;

use super::{Analysis, AnalyzeError, SourceAnalyzer};

static PACKAGE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\s*package\s+([\p{L}_][\p{L}\p{N}_]*)").expect("package clause regex")
});

static IMPORT_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\Aimport\b").expect("import keyword regex"));

static IMPORT_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\A(?:([\p{L}_][\p{L}\p{N}_]*|\.)[ \t]+)?("(?:[^"\\\n]|\\.)*"|`[^`]*`)"#)
        .expect("import spec regex")
});

static FUNC_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*func[ \t]+([\p{L}_][\p{L}\p{N}_]*)[ \t]*[(\[]")
        .expect("func declaration regex")
});

/// Analyzer for Go source files.
#[derive(Debug, Clone)]
pub struct GoAnalyzer {
    /// Name of the function that makes a file an executable root
    entry_function: String,
}

impl Default for GoAnalyzer {
    fn default() -> Self {
        GoAnalyzer {
            entry_function: "main".to_string(),
        }
    }
}

impl GoAnalyzer {
    /// Create an analyzer looking for the given entry function.
    pub fn new(entry_function: impl Into<String>) -> Self {
        GoAnalyzer {
            entry_function: entry_function.into(),
        }
    }

    /// Analyze source text read from `path`.
    pub fn analyze_source(&self, path: &Path, content: &str) -> Result<Analysis, AnalyzeError> {
        let code = strip(content, false);
        let bare = strip(content, true);

        let clause = PACKAGE_CLAUSE.captures(&bare).ok_or_else(|| {
            let offset = bare.len() - bare.trim_start().len();
            AnalyzeError::MissingPackage {
                path: path.to_path_buf(),
                src: named_source(path, content),
                span: (offset, 0).into(),
            }
        })?;
        let package = clause[1].to_string();
        let header_end = clause.get(0).map_or(0, |m| m.end());

        let imports = self.parse_imports(path, content, &code, header_end)?;

        let defines_entry = FUNC_DECL
            .captures_iter(&bare)
            .any(|cap| &cap[1] == self.entry_function);

        Ok(Analysis {
            package,
            imports,
            defines_entry,
        })
    }

    /// Parse the import declarations that start at `start`, right after the
    /// package clause. Reading stops at the first declaration that is not an
    /// import.
    fn parse_imports(
        &self,
        path: &Path,
        content: &str,
        code: &str,
        start: usize,
    ) -> Result<BTreeSet<String>, AnalyzeError> {
        let mut imports = BTreeSet::new();
        let malformed = |offset: usize, len: usize, reason: &str| AnalyzeError::MalformedImport {
            path: path.to_path_buf(),
            src: named_source(path, content),
            span: (offset, len).into(),
            reason: reason.to_string(),
        };

        let mut pos = start;
        loop {
            pos += leading_separators(&code[pos..]);
            let Some(keyword) = IMPORT_KEYWORD.find(&code[pos..]) else {
                break;
            };
            pos += keyword.end();
            pos += leading_whitespace(&code[pos..]);

            if code[pos..].starts_with('(') {
                let close = find_group_end(code, pos + 1)
                    .ok_or_else(|| malformed(pos, 1, "import group is never closed"))?;

                let mut cursor = pos + 1;
                loop {
                    cursor += leading_separators(&code[cursor..close]);
                    if cursor >= close {
                        break;
                    }
                    let spec = IMPORT_SPEC
                        .captures(&code[cursor..close])
                        .ok_or_else(|| malformed(cursor, 1, "expected import path"))?;
                    let literal = spec.get(2).map_or("", |m| m.as_str());
                    let literal_start = cursor + spec.get(2).map_or(0, |m| m.start());
                    insert_import(&mut imports, literal)
                        .ok_or_else(|| malformed(literal_start, literal.len(), "empty import path"))?;
                    cursor += spec.get(0).map_or(0, |m| m.end());
                }
                pos = close + 1;
            } else {
                let spec = IMPORT_SPEC
                    .captures(&code[pos..])
                    .ok_or_else(|| malformed(pos, 1, "expected import path"))?;
                let literal = spec.get(2).map_or("", |m| m.as_str());
                let literal_start = pos + spec.get(2).map_or(0, |m| m.start());
                insert_import(&mut imports, literal)
                    .ok_or_else(|| malformed(literal_start, literal.len(), "empty import path"))?;
                pos += spec.get(0).map_or(0, |m| m.end());
            }
        }

        Ok(imports)
    }
}

impl SourceAnalyzer for GoAnalyzer {
    fn analyze(&self, path: &Path) -> Result<Analysis, AnalyzeError> {
        let content = std::fs::read_to_string(path).map_err(|source| AnalyzeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.analyze_source(path, &content)
    }
}

/// Clean an import path the way Go's `path.Clean` does.
///
/// Repeated slashes collapse, `.` elements vanish, `..` removes the element
/// before it and trailing slashes are dropped. An empty result is `.`.
pub fn clean_import_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|p| *p != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            p => parts.push(p),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Unquote an import literal and add the cleaned path. Returns `None` for an
/// empty path.
fn insert_import(imports: &mut BTreeSet<String>, literal: &str) -> Option<()> {
    let raw = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| literal.strip_prefix('`').and_then(|s| s.strip_suffix('`')))
        .unwrap_or(literal);

    if raw.is_empty() {
        return None;
    }

    imports.insert(clean_import_path(raw));
    Some(())
}

fn named_source(path: &Path, content: &str) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content.to_string())
}

fn leading_whitespace(s: &str) -> usize {
    s.len() - s.trim_start().len()
}

fn leading_separators(s: &str) -> usize {
    s.len() - s.trim_start_matches(|c: char| c.is_whitespace() || c == ';').len()
}

/// Find the `)` closing an import group, skipping over string literals.
fn find_group_end(code: &str, from: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in code[from..].char_indices() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' && q == '"' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '`' => quote = Some(c),
                ')' => return Some(from + i),
                _ => {}
            },
        }
    }

    None
}

/// Blank out comments (and, with `blank_strings`, the contents of string and
/// rune literals) while keeping every byte offset and newline in place.
fn strip(content: &str, blank_strings: bool) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    let blank = |out: &mut String, c: char| {
        if c == '\n' {
            out.push('\n');
        } else {
            out.extend(std::iter::repeat(' ').take(c.len_utf8()));
        }
    };
    let literal = |out: &mut String, c: char| {
        if blank_strings {
            blank(out, c);
        } else {
            out.push(c);
        }
    };

    while let Some(c) = chars.next() {
        match c {
            '\u{feff}' if out.is_empty() => blank(&mut out, c),
            '/' if chars.peek() == Some(&'/') => {
                blank(&mut out, c);
                while let Some(&n) = chars.peek() {
                    if n == '\n' {
                        break;
                    }
                    blank(&mut out, n);
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                blank(&mut out, c);
                if let Some(star) = chars.next() {
                    blank(&mut out, star);
                }
                let mut prev = '\0';
                for n in chars.by_ref() {
                    blank(&mut out, n);
                    if prev == '*' && n == '/' {
                        break;
                    }
                    prev = n;
                }
            }
            '"' | '\'' => {
                out.push(c);
                let mut escaped = false;
                for n in chars.by_ref() {
                    if n == '\n' {
                        // Unterminated literal; let the line end close it.
                        out.push(n);
                        break;
                    }
                    if escaped {
                        escaped = false;
                    } else if n == '\\' {
                        escaped = true;
                    } else if n == c {
                        out.push(n);
                        break;
                    }
                    literal(&mut out, n);
                }
            }
            '`' => {
                out.push(c);
                for n in chars.by_ref() {
                    if n == '`' {
                        out.push(n);
                        break;
                    }
                    literal(&mut out, n);
                }
            }
            _ => out.push(c),
        }
    }

    out
}
