//! Line-kind classification for statement completion
//!
//! Decides, from trimmed line text alone, whether a line introduces a block
//! construct or is an ordinary statement. This is a heuristic over literal
//! text, not a parser: it has no awareness of string literals or comments and
//! no multi-line lookahead.

use regex::Regex;
use std::sync::LazyLock;

/// Matches declarations like `int main(` or `void foo(` in languages whose
/// method declarations lack a leading keyword: one bare word, a space, one
/// bare word, an optional space, an open parenthesis.
static FN_DECL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+\s\w+\s?\(").expect("function declaration pattern"));

/// The kind of a source line, as seen by the completer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The line is exactly `}` after trimming
    ClosingBrace,
    /// Starts a type or namespace body (`class `, `interface `, `object `)
    TypeOpener,
    /// Starts a conditional (`if (`, `if(`, `} else`, `else`)
    Conditional,
    /// Starts a switch (`switch (`, `switch(`)
    Switch,
    /// Starts a loop (`for`, `while`, `do`, `loop` forms)
    Loop,
    /// Starts a function or method declaration
    FunctionDecl,
    /// Anything else: an ordinary statement
    Statement,
}

impl LineKind {
    /// Whether this kind of line introduces a brace-delimited block
    pub fn opens_block(self) -> bool {
        !matches!(self, LineKind::ClosingBrace | LineKind::Statement)
    }

    /// Stable lowercase name, used by the CLI
    pub fn name(self) -> &'static str {
        match self {
            LineKind::ClosingBrace => "closing-brace",
            LineKind::TypeOpener => "type-opener",
            LineKind::Conditional => "conditional",
            LineKind::Switch => "switch",
            LineKind::Loop => "loop",
            LineKind::FunctionDecl => "function-decl",
            LineKind::Statement => "statement",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a trimmed line of source text.
///
/// The checks run in priority order; the first match wins. The regex test for
/// keyword-less function declarations is evaluated last because it is more
/// expensive than the prefix comparisons.
///
/// # Examples
///
/// ```
/// use complete_statement::classify::{classify, LineKind};
///
/// assert_eq!(classify("if (x > 0)"), LineKind::Conditional);
/// assert_eq!(classify("int main()"), LineKind::FunctionDecl);
/// assert_eq!(classify("x = 5"), LineKind::Statement);
/// ```
pub fn classify(trimmed: &str) -> LineKind {
    if trimmed == "}" {
        LineKind::ClosingBrace
    } else if trimmed.starts_with("class ")
        || trimmed.starts_with("interface ")
        || trimmed.starts_with("object ")
    {
        LineKind::TypeOpener
    } else if trimmed.starts_with("if (")
        || trimmed.starts_with("if(")
        || trimmed.starts_with("} else")
        || trimmed.starts_with("else")
    {
        LineKind::Conditional
    } else if trimmed.starts_with("switch (") || trimmed.starts_with("switch(") {
        LineKind::Switch
    } else if trimmed.starts_with("for (")
        || trimmed.starts_with("for(")
        || trimmed.starts_with("while (")
        || trimmed.starts_with("while(")
        || trimmed.starts_with("do")
        || trimmed.starts_with("loop")
    {
        LineKind::Loop
    } else if trimmed.starts_with("function ") // javascript
        || trimmed.starts_with("func ") // swift, go
        || trimmed.starts_with("fun ") // kotlin
        || trimmed.starts_with("def ") // scala, python
        || trimmed.starts_with("fn ") // rust
        || FN_DECL_RE.is_match(trimmed) // c, java, ceylon
    {
        LineKind::FunctionDecl
    } else {
        LineKind::Statement
    }
}
