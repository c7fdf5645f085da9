// Statement segmenter: strips comments, reassembles text split across
// lexical rules, and partitions the stream into `;`-bounded statements.

use tracing::debug;

use crate::token::{Token, TokenType};

/// One SQL statement's token sequence, bounded by `;` or end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    tokens: Vec<Token>,
}

impl Statement {
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// The statement's SQL text, reconstructed from its lexemes.
    /// Used in parse diagnostics.
    #[must_use]
    pub fn sql(&self) -> String {
        let joined: String = self.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        joined.trim().to_owned()
    }
}

/// True when two adjacent tokens of these classifications are really one
/// piece of text split across lexical rules (e.g. the `N` prefix of a
/// national-charset string and the string body).
fn mergeable(ty: TokenType) -> bool {
    ty.is_a(TokenType::Name) || ty.is_a(TokenType::String)
}

/// Does this token open a statement? Data-manipulation and data-definition
/// keywords do, as does WITH (the common-table-expression entry point).
fn starts_statement(token: &Token) -> bool {
    token.is_a(TokenType::Dml) || token.is_a(TokenType::Ddl) || token.ty == TokenType::Cte
}

/// Partition a token stream into discrete statements.
///
/// Comment tokens are dropped. Whitespace is kept: it carries the adjacency
/// information the merge step is defined over, and removing it here would
/// let a re-run merge unrelated names (the parser discards it instead).
/// Tokens before the first statement-opening keyword are dropped as noise;
/// everything else survives in source order. A trailing statement without
/// its `;` terminator is closed at end of input.
#[must_use]
pub fn segment(tokens: Vec<Token>) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut in_statement = false;

    for token in tokens {
        if token.is_a(TokenType::Comment) {
            continue;
        }

        if starts_statement(&token) {
            in_statement = true;
        }
        if !in_statement {
            continue;
        }

        let is_terminator = token.ty == TokenType::Punctuation && token.lexeme == ";";

        match current.last_mut() {
            Some(prev) if mergeable(prev.ty) && mergeable(token.ty) => {
                // Keep the first token's classification, concatenate the text.
                prev.lexeme.push_str(&token.lexeme);
            }
            _ => current.push(token),
        }

        if is_terminator {
            statements.push(Statement::new(std::mem::take(&mut current)));
            in_statement = false;
        }
    }

    if in_statement && !current.is_empty() {
        statements.push(Statement::new(current));
    }

    debug!(statements = statements.len(), "segmented token stream");
    statements
}
