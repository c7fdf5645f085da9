// Token types form a single-parent classification tree, not a flat set:
// a rule can assign a specific subtype (Hexadecimal) while generic consumers
// still recognize it as a Number by walking the ancestor chain.

use std::fmt;

/// A single classified lexical unit: its place in the classification tree
/// plus the exact source text it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub ty: TokenType,
    pub lexeme: String,
}

impl Token {
    #[must_use]
    pub fn new(ty: TokenType, lexeme: impl Into<String>) -> Self {
        Self {
            ty,
            lexeme: lexeme.into(),
        }
    }

    /// Ancestor-aware classification query; see [`TokenType::is_a`].
    #[must_use]
    pub fn is_a(&self, ancestor: TokenType) -> bool {
        self.ty.is_a(ancestor)
    }

    /// Uppercased lexeme with internal whitespace runs collapsed to single
    /// spaces. Multi-word keyword tokens (`GROUP   BY`, `LEFT  OUTER  JOIN`)
    /// compare against grammar keywords through this form.
    #[must_use]
    pub fn normalized(&self) -> String {
        let mut out = String::with_capacity(self.lexeme.len());
        let mut in_space = false;
        for ch in self.lexeme.chars() {
            if ch.is_whitespace() {
                if !in_space && !out.is_empty() {
                    out.push(' ');
                }
                in_space = true;
            } else {
                in_space = false;
                for up in ch.to_uppercase() {
                    out.push(up);
                }
            }
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.ty, self.lexeme)
    }
}

/// Token classification as a closed enum lattice.
///
/// Every variant has at most one parent; the implicit root is `Token`.
/// `Display` renders the dot-joined path from the root, so diagnostics keep
/// the familiar `Token.Literal.String.Single` spelling without any runtime
/// string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Raw text with no other classification.
    Text,
    /// Whitespace run (no newlines).
    Whitespace,
    /// A line break (`\r\n`, `\r`, or `\n`).
    Newline,
    Error,
    Other,

    Keyword,
    /// Data-manipulation keyword (SELECT, INSERT, ...). Starts a statement.
    Dml,
    /// Data-definition keyword (CREATE, DROP, ALTER). Starts a statement.
    Ddl,
    /// The WITH keyword, entry point of a common table expression.
    Cte,
    /// ASC / DESC.
    OrderKeyword,
    /// `AT TIME ZONE '...'` cast phrase.
    TzCast,

    Name,
    /// Built-in type or function name (INTEGER, VARCHAR, ...).
    Builtin,
    /// Bind placeholder (`?`, `:name`, `$1`, `%(name)s`).
    Placeholder,

    Literal,
    String,
    /// Single-quoted string literal.
    StringSingle,
    /// Double-quoted symbol string.
    StringSymbol,
    Number,
    NumberInteger,
    NumberFloat,
    NumberHexadecimal,

    Punctuation,
    Operator,
    /// Comparison operator, including the fused `[NOT] LIKE` family.
    Comparison,
    /// The `:=` assignment operator.
    Assignment,
    /// `*`, both projection star and multiplication.
    Wildcard,

    Comment,
    CommentSingle,
    CommentSingleHint,
    CommentMultiline,
    CommentMultilineHint,

    Generic,
    /// Client command such as `\copy`.
    Command,
}

impl TokenType {
    /// The parent type, or `None` for children of the implicit root.
    #[must_use]
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Whitespace => Some(Self::Text),
            Self::Newline => Some(Self::Whitespace),
            Self::Dml
            | Self::Ddl
            | Self::Cte
            | Self::OrderKeyword
            | Self::TzCast => Some(Self::Keyword),
            Self::Builtin | Self::Placeholder => Some(Self::Name),
            Self::String | Self::Number => Some(Self::Literal),
            Self::StringSingle | Self::StringSymbol => Some(Self::String),
            Self::NumberInteger | Self::NumberFloat | Self::NumberHexadecimal => {
                Some(Self::Number)
            }
            Self::Comparison => Some(Self::Operator),
            Self::CommentSingle | Self::CommentMultiline => Some(Self::Comment),
            Self::CommentSingleHint => Some(Self::CommentSingle),
            Self::CommentMultilineHint => Some(Self::CommentMultiline),
            Self::Command => Some(Self::Generic),
            _ => None,
        }
    }

    /// True if `self` equals `ancestor` or `ancestor` appears anywhere on
    /// the parent chain. This is the classification query consumers use
    /// instead of leaf equality.
    #[must_use]
    pub fn is_a(self, ancestor: Self) -> bool {
        let mut cur = Some(self);
        while let Some(ty) = cur {
            if ty == ancestor {
                return true;
            }
            cur = ty.parent();
        }
        false
    }

    /// The leaf segment of the qualified name.
    #[must_use]
    fn segment(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Whitespace => "Whitespace",
            Self::Newline => "Newline",
            Self::Error => "Error",
            Self::Other => "Other",
            Self::Keyword => "Keyword",
            Self::Dml => "DML",
            Self::Ddl => "DDL",
            Self::Cte => "CTE",
            Self::OrderKeyword => "Order",
            Self::TzCast => "TZCast",
            Self::Name => "Name",
            Self::Builtin => "Builtin",
            Self::Placeholder => "Placeholder",
            Self::Literal => "Literal",
            Self::String => "String",
            Self::StringSingle => "Single",
            Self::StringSymbol => "Symbol",
            Self::Number => "Number",
            Self::NumberInteger => "Integer",
            Self::NumberFloat => "Float",
            Self::NumberHexadecimal => "Hexadecimal",
            Self::Punctuation => "Punctuation",
            Self::Operator => "Operator",
            Self::Comparison => "Comparison",
            Self::Assignment => "Assignment",
            Self::Wildcard => "Wildcard",
            Self::Comment => "Comment",
            Self::CommentSingle => "Single",
            Self::CommentSingleHint => "Hint",
            Self::CommentMultiline => "Multiline",
            Self::CommentMultilineHint => "Hint",
            Self::Generic => "Generic",
            Self::Command => "Command",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Dot-joined path from the root, built by walking up the chain.
        let mut chain = Vec::with_capacity(4);
        let mut cur = Some(*self);
        while let Some(ty) = cur {
            chain.push(ty.segment());
            cur = ty.parent();
        }
        f.write_str("Token")?;
        for seg in chain.iter().rev() {
            write!(f, ".{seg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_a_walks_ancestor_chain() {
        assert!(TokenType::NumberHexadecimal.is_a(TokenType::Number));
        assert!(TokenType::NumberHexadecimal.is_a(TokenType::Literal));
        assert!(TokenType::StringSingle.is_a(TokenType::String));
        assert!(TokenType::StringSingle.is_a(TokenType::Literal));
        assert!(TokenType::Dml.is_a(TokenType::Keyword));
        assert!(TokenType::Newline.is_a(TokenType::Whitespace));
        assert!(TokenType::Newline.is_a(TokenType::Text));
        assert!(TokenType::CommentSingleHint.is_a(TokenType::Comment));
    }

    #[test]
    fn test_is_a_is_reflexive_not_symmetric() {
        assert!(TokenType::Number.is_a(TokenType::Number));
        assert!(!TokenType::Number.is_a(TokenType::NumberHexadecimal));
        assert!(!TokenType::Keyword.is_a(TokenType::Dml));
    }

    #[test]
    fn test_sibling_types_unrelated() {
        assert!(!TokenType::StringSingle.is_a(TokenType::Number));
        assert!(!TokenType::Dml.is_a(TokenType::Ddl));
        assert!(!TokenType::Comparison.is_a(TokenType::Punctuation));
    }

    #[test]
    fn test_display_renders_dot_path() {
        assert_eq!(
            TokenType::StringSingle.to_string(),
            "Token.Literal.String.Single"
        );
        assert_eq!(
            TokenType::NumberHexadecimal.to_string(),
            "Token.Literal.Number.Hexadecimal"
        );
        assert_eq!(TokenType::Dml.to_string(), "Token.Keyword.DML");
        assert_eq!(TokenType::Name.to_string(), "Token.Name");
        assert_eq!(
            TokenType::CommentMultilineHint.to_string(),
            "Token.Comment.Multiline.Hint"
        );
    }

    #[test]
    fn test_normalized_collapses_whitespace() {
        let t = Token::new(TokenType::Keyword, "left  Outer\n\tjoin");
        assert_eq!(t.normalized(), "LEFT OUTER JOIN");
        let t = Token::new(TokenType::Keyword, "group by");
        assert_eq!(t.normalized(), "GROUP BY");
    }
}
