// Hand-written recursive descent parser. Expression parsing lives in
// expr.rs. One Parser is created per segmented statement and discarded
// after producing a single AST root or a failure.

use std::error::Error;
use std::fmt;

use sqlhawk_ast::{
    AlterAction, AlterTableStatement, Assignment, ColumnDef, CreateIndexStatement,
    CreateTableStatement, DeleteStatement, DropIndexStatement, DropTableStatement, Expr,
    FromClause, GroupByClause, HavingClause, InsertSource, InsertStatement, JoinClause, JoinKind,
    LimitClause, OrderByClause, OrderingTerm, SelectStatement, SortDirection, Statement as Ast,
    TransactionKind, TransactionStatement, TypeName, UpdateStatement, WhereClause,
};
use tracing::debug;

use crate::lexer::{tokenize, LexError};
use crate::segment::{segment, Statement};
use crate::token::{Token, TokenType};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Broad failure category, for callers that branch without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An expected token was absent.
    UnexpectedToken,
    /// The statement or a clause is outside the supported grammar.
    Unsupported,
    /// The grammar completed but unconsumed tokens remain.
    TrailingTokens,
}

/// A failed grammar expectation. Carries the statement text and the
/// offending cursor position so diagnostics can point at the exact token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The statement's SQL text.
    pub statement: String,
    /// Cursor index into the statement's (whitespace-free) token sequence.
    pub position: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parse error at token {} in {:?}: {}",
            self.position, self.statement, self.message
        )
    }
}

impl Error for ParseError {}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Cursor over one statement's tokens.
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) pos: usize,
    statement: String,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Build a cursor over a segmented statement. Whitespace tokens carry
    /// no grammar and are dropped up front.
    #[must_use]
    pub fn new(statement: Statement) -> Self {
        let sql = statement.sql();
        let tokens = statement
            .into_tokens()
            .into_iter()
            .filter(|t| !t.is_a(TokenType::Whitespace))
            .collect();
        Self {
            tokens,
            pos: 0,
            statement: sql,
            errors: Vec::new(),
        }
    }

    /// Parse the statement to its AST root. Consumes the whole token
    /// sequence: anything left over past the optional terminator is an
    /// error, never silently dropped.
    pub fn parse(&mut self) -> Result<Ast, ParseError> {
        let result = self.parse_to_root();
        if let Err(ref e) = result {
            self.errors.push(e.clone());
        }
        result
    }

    /// Diagnostics accumulated by failed parses on this cursor.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    fn parse_to_root(&mut self) -> Result<Ast, ParseError> {
        let ast = self.parse_statement()?;
        let _ = self.eat_punct(";");
        if let Some(tok) = self.peek() {
            return Err(ParseError {
                kind: ParseErrorKind::TrailingTokens,
                statement: self.statement.clone(),
                position: self.pos,
                message: format!("unsupported clause starting at {tok}"),
            });
        }
        debug!(kind = ast.kind_name(), "parsed statement");
        Ok(ast)
    }

    // -----------------------------------------------------------------------
    // Token navigation
    // -----------------------------------------------------------------------

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n)
    }

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// Non-fatal probe for a keyword-classified token with this normalized
    /// spelling. Consumes on hit, leaves the cursor untouched otherwise.
    pub(crate) fn eat_kw(&mut self, word: &str) -> bool {
        if self.check_kw(word) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn check_kw(&self, word: &str) -> bool {
        self.peek()
            .is_some_and(|t| t.is_a(TokenType::Keyword) && t.normalized() == word)
    }

    pub(crate) fn check_kw_nth(&self, n: usize, word: &str) -> bool {
        self.peek_nth(n)
            .is_some_and(|t| t.is_a(TokenType::Keyword) && t.normalized() == word)
    }

    pub(crate) fn expect_kw(&mut self, word: &str) -> Result<Token, ParseError> {
        if self.check_kw(word) {
            Ok(self.advance().expect("checked token must exist"))
        } else {
            Err(self.err_expected(word))
        }
    }

    pub(crate) fn eat_punct(&mut self, lexeme: &str) -> bool {
        let hit = self
            .peek()
            .is_some_and(|t| t.ty == TokenType::Punctuation && t.lexeme == lexeme);
        if hit {
            self.pos += 1;
        }
        hit
    }

    pub(crate) fn expect_punct(&mut self, lexeme: &str) -> Result<(), ParseError> {
        if self.eat_punct(lexeme) {
            Ok(())
        } else {
            Err(self.err_expected(&format!("'{lexeme}'")))
        }
    }

    /// Consume and return the current token if it classifies under `ty`.
    pub(crate) fn expect_type(&mut self, ty: TokenType) -> Result<Token, ParseError> {
        if self.peek().is_some_and(|t| t.is_a(ty)) {
            Ok(self.advance().expect("checked token must exist"))
        } else {
            Err(self.err_expected(&ty.to_string()))
        }
    }

    /// An identifier: any token classified under Name.
    pub(crate) fn expect_name(&mut self) -> Result<String, ParseError> {
        if self.peek().is_some_and(|t| t.is_a(TokenType::Name)) {
            Ok(self.advance().expect("checked token must exist").lexeme)
        } else {
            Err(self.err_expected("identifier"))
        }
    }

    /// A bare (unclassified) name token, used for optional trailing aliases
    /// where keywords must not be swallowed.
    fn eat_bare_name(&mut self) -> Option<String> {
        if self.peek().is_some_and(|t| t.ty == TokenType::Name) {
            self.advance().map(|t| t.lexeme)
        } else {
            None
        }
    }

    pub(crate) fn err_expected(&self, what: &str) -> ParseError {
        let actual = self
            .peek()
            .map_or_else(|| "end of statement".to_owned(), ToString::to_string);
        ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            statement: self.statement.clone(),
            position: self.pos,
            message: format!("expected {what}, got {actual}"),
        }
    }

    pub(crate) fn err_unsupported(&self, what: &str) -> ParseError {
        ParseError {
            kind: ParseErrorKind::Unsupported,
            statement: self.statement.clone(),
            position: self.pos,
            message: format!("unsupported statement: {what}"),
        }
    }

    fn parse_comma_sep<T>(
        &mut self,
        f: fn(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut v = vec![f(self)?];
        while self.eat_punct(",") {
            v.push(f(self)?);
        }
        Ok(v)
    }

    // -----------------------------------------------------------------------
    // Statement dispatch
    // -----------------------------------------------------------------------

    fn parse_statement(&mut self) -> Result<Ast, ParseError> {
        let Some(lead) = self.peek().cloned() else {
            return Err(self.err_expected("a statement"));
        };
        let word = lead.normalized();
        if lead.is_a(TokenType::Dml) {
            return match word.as_str() {
                "SELECT" => {
                    self.advance();
                    Ok(Ast::Select(self.parse_select_stmt()?))
                }
                "INSERT" => {
                    self.advance();
                    self.parse_insert_stmt()
                }
                "UPDATE" => {
                    self.advance();
                    self.parse_update_stmt()
                }
                "DELETE" => {
                    self.advance();
                    self.parse_delete_stmt()
                }
                "COMMIT" => {
                    self.advance();
                    self.finish_transaction(TransactionKind::Commit)
                }
                "ROLLBACK" => {
                    self.advance();
                    self.finish_transaction(TransactionKind::Rollback)
                }
                "START" => {
                    self.advance();
                    self.expect_kw("TRANSACTION")?;
                    Ok(Ast::Transaction(TransactionStatement {
                        kind: TransactionKind::Begin,
                    }))
                }
                _ => Err(self.err_unsupported(&word)),
            };
        }
        if lead.is_a(TokenType::Ddl) {
            // CREATE may arrive fused as "CREATE OR REPLACE".
            return match word.split_whitespace().next().unwrap_or_default() {
                "CREATE" => {
                    self.advance();
                    self.parse_create()
                }
                "DROP" => {
                    self.advance();
                    self.parse_drop()
                }
                "ALTER" => {
                    self.advance();
                    self.parse_alter()
                }
                _ => Err(self.err_unsupported(&word)),
            };
        }
        if lead.ty == TokenType::Cte {
            return Err(self.err_unsupported("WITH (common table expressions)"));
        }
        if self.eat_kw("BEGIN") {
            return self.finish_transaction(TransactionKind::Begin);
        }
        Err(self.err_unsupported(&word))
    }

    fn finish_transaction(&mut self, kind: TransactionKind) -> Result<Ast, ParseError> {
        let _ = self.eat_kw("TRANSACTION") || self.eat_kw("WORK");
        Ok(Ast::Transaction(TransactionStatement { kind }))
    }

    // -----------------------------------------------------------------------
    // SELECT
    // -----------------------------------------------------------------------

    pub(crate) fn parse_select_stmt(&mut self) -> Result<SelectStatement, ParseError> {
        let mut stmt = SelectStatement {
            distinct: self.eat_kw("DISTINCT"),
            ..SelectStatement::default()
        };
        stmt.columns = self.parse_comma_sep(Self::parse_result_column)?;

        if self.eat_kw("FROM") {
            stmt.from = Some(self.parse_from_clause()?);
        }
        if self.eat_kw("WHERE") {
            stmt.where_clause = Some(self.parse_where_clause()?);
        }
        if self.eat_kw("GROUP BY") {
            stmt.group_by = Some(GroupByClause {
                columns: self.parse_comma_sep(Self::parse_expression)?,
            });
        }
        if self.eat_kw("HAVING") {
            stmt.having = Some(HavingClause {
                condition: self.parse_expression()?,
            });
        }
        if self.eat_kw("ORDER BY") {
            stmt.order_by = Some(OrderByClause {
                terms: self.parse_comma_sep(Self::parse_ordering_term)?,
            });
        }
        if self.eat_kw("LIMIT") {
            stmt.limit = Some(self.parse_limit_clause()?);
        }
        Ok(stmt)
    }

    fn parse_result_column(&mut self) -> Result<Expr, ParseError> {
        if self.peek().is_some_and(|t| t.ty == TokenType::Wildcard) {
            self.advance();
            return Ok(Expr::Star);
        }
        let expr = self.parse_expression()?;
        if self.eat_kw("AS") {
            let alias = self.expect_name()?;
            return Ok(Expr::Aliased {
                expr: Box::new(expr),
                alias,
            });
        }
        // A bare trailing identifier is an implicit alias.
        if let Some(alias) = self.eat_bare_name() {
            return Ok(Expr::Aliased {
                expr: Box::new(expr),
                alias,
            });
        }
        Ok(expr)
    }

    pub(crate) fn parse_where_clause(&mut self) -> Result<WhereClause, ParseError> {
        Ok(WhereClause {
            condition: self.parse_expression()?,
        })
    }

    fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
        let table = self.expect_name()?;
        let alias = self.parse_alias()?;
        let mut joins = Vec::new();
        while let Some(kind) = self.peek_join_kind() {
            self.advance();
            joins.push(self.parse_join_clause(kind)?);
        }
        Ok(FromClause {
            table,
            alias,
            joins,
        })
    }

    fn parse_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_kw("AS") {
            return Ok(Some(self.expect_name()?));
        }
        Ok(self.eat_bare_name())
    }

    /// The lexer delivers each join qualifier phrase as one keyword token
    /// ending in JOIN; the qualifier word decides the kind.
    fn peek_join_kind(&self) -> Option<JoinKind> {
        let tok = self.peek()?;
        if !tok.is_a(TokenType::Keyword) {
            return None;
        }
        let norm = tok.normalized();
        if norm != "JOIN" && !norm.ends_with(" JOIN") {
            return None;
        }
        Some(match norm.split_whitespace().next().unwrap_or_default() {
            "LEFT" => JoinKind::Left,
            "RIGHT" => JoinKind::Right,
            "FULL" => JoinKind::Full,
            "CROSS" => JoinKind::Cross,
            "NATURAL" => JoinKind::Natural,
            "STRAIGHT" => JoinKind::Straight,
            _ => JoinKind::Inner,
        })
    }

    fn parse_join_clause(&mut self, kind: JoinKind) -> Result<JoinClause, ParseError> {
        let table = self.expect_name()?;
        let alias = self.parse_alias()?;
        let on = if self.eat_kw("ON") {
            Some(self.parse_where_clause()?)
        } else {
            None
        };
        Ok(JoinClause {
            kind,
            table,
            alias,
            on,
        })
    }

    fn parse_ordering_term(&mut self) -> Result<OrderingTerm, ParseError> {
        let expr = self.parse_expression()?;
        let direction = self.peek().and_then(|t| {
            if t.ty != TokenType::OrderKeyword {
                return None;
            }
            match t.normalized().as_str() {
                "ASC" => Some(SortDirection::Asc),
                "DESC" => Some(SortDirection::Desc),
                _ => None,
            }
        });
        if direction.is_some() {
            self.advance();
        }
        Ok(OrderingTerm { expr, direction })
    }

    fn parse_limit_clause(&mut self) -> Result<LimitClause, ParseError> {
        let count = self.parse_unsigned()?;
        // The offset is its own literal; a LIMIT without OFFSET means
        // offset zero.
        let offset = if self.eat_kw("OFFSET") {
            self.parse_unsigned()?
        } else {
            0
        };
        Ok(LimitClause { count, offset })
    }

    fn parse_unsigned(&mut self) -> Result<u64, ParseError> {
        let tok = self.expect_type(TokenType::NumberInteger)?;
        tok.lexeme.parse().map_err(|_| ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            statement: self.statement.clone(),
            position: self.pos - 1,
            message: format!("expected a non-negative integer, got {:?}", tok.lexeme),
        })
    }

    // -----------------------------------------------------------------------
    // INSERT
    // -----------------------------------------------------------------------

    fn parse_insert_stmt(&mut self) -> Result<Ast, ParseError> {
        self.expect_kw("INTO")?;
        let table = self.expect_name()?;

        let mut columns = Vec::new();
        if self.eat_punct("(") {
            columns = self.parse_comma_sep(Self::expect_name)?;
            self.expect_punct(")")?;
        }

        let source = if self.eat_kw("VALUES") {
            let mut rows = vec![self.parse_value_row()?];
            while self.eat_punct(",") {
                rows.push(self.parse_value_row()?);
            }
            InsertSource::Values(rows)
        } else if self.peek().is_some_and(|t| t.is_a(TokenType::Dml)) {
            self.expect_dml("SELECT")?;
            InsertSource::Select(Box::new(self.parse_select_stmt()?))
        } else {
            return Err(self.err_expected("VALUES or SELECT"));
        };

        Ok(Ast::Insert(InsertStatement {
            table,
            columns,
            source,
        }))
    }

    fn parse_value_row(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect_punct("(")?;
        let row = self.parse_comma_sep(Self::parse_expression)?;
        self.expect_punct(")")?;
        Ok(row)
    }

    pub(crate) fn expect_dml(&mut self, word: &str) -> Result<(), ParseError> {
        if self
            .peek()
            .is_some_and(|t| t.is_a(TokenType::Dml) && t.normalized() == word)
        {
            self.advance();
            Ok(())
        } else {
            Err(self.err_expected(word))
        }
    }

    // -----------------------------------------------------------------------
    // UPDATE / DELETE
    // -----------------------------------------------------------------------

    fn parse_update_stmt(&mut self) -> Result<Ast, ParseError> {
        let table = self.expect_name()?;
        self.expect_kw("SET")?;
        let assignments = self.parse_comma_sep(Self::parse_assignment)?;
        let where_clause = if self.eat_kw("WHERE") {
            Some(self.parse_where_clause()?)
        } else {
            None
        };
        Ok(Ast::Update(UpdateStatement {
            table,
            assignments,
            where_clause,
        }))
    }

    fn parse_assignment(&mut self) -> Result<Assignment, ParseError> {
        let column = self.expect_name()?;
        self.expect_comparison("=")?;
        let value = self.parse_expression()?;
        Ok(Assignment { column, value })
    }

    pub(crate) fn expect_comparison(&mut self, op: &str) -> Result<(), ParseError> {
        if self
            .peek()
            .is_some_and(|t| t.ty == TokenType::Comparison && t.lexeme == op)
        {
            self.advance();
            Ok(())
        } else {
            Err(self.err_expected(&format!("'{op}'")))
        }
    }

    fn parse_delete_stmt(&mut self) -> Result<Ast, ParseError> {
        let _ = self.eat_kw("FROM");
        let table = self.expect_name()?;
        let where_clause = if self.eat_kw("WHERE") {
            Some(self.parse_where_clause()?)
        } else {
            None
        };
        Ok(Ast::Delete(DeleteStatement {
            table,
            where_clause,
        }))
    }

    // -----------------------------------------------------------------------
    // DDL
    // -----------------------------------------------------------------------

    fn parse_create(&mut self) -> Result<Ast, ParseError> {
        if self.eat_kw("UNIQUE") {
            self.expect_kw("INDEX")?;
            return self.parse_create_index(true);
        }
        if self.eat_kw("INDEX") {
            return self.parse_create_index(false);
        }
        if self.eat_kw("TABLE") {
            return self.parse_create_table();
        }
        Err(self.err_unsupported("CREATE of this object type"))
    }

    fn parse_create_table(&mut self) -> Result<Ast, ParseError> {
        let table = self.expect_name()?;
        self.expect_punct("(")?;
        let columns = self.parse_comma_sep(Self::parse_column_def)?;
        self.expect_punct(")")?;
        Ok(Ast::CreateTable(CreateTableStatement { table, columns }))
    }

    fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.expect_name()?;
        let type_name = self.parse_type_name()?;
        let mut def = ColumnDef {
            name,
            type_name,
            not_null: false,
            primary_key: false,
            unique: false,
        };
        loop {
            if self.eat_kw("NOT NULL") {
                def.not_null = true;
            } else if self.eat_kw("NULL") {
                // Explicitly nullable; nothing to record.
            } else if self.eat_kw("PRIMARY") {
                self.expect_kw("KEY")?;
                def.primary_key = true;
            } else if self.eat_kw("UNIQUE") {
                def.unique = true;
            } else {
                break;
            }
        }
        Ok(def)
    }

    fn parse_type_name(&mut self) -> Result<TypeName, ParseError> {
        let ok = self
            .peek()
            .is_some_and(|t| t.is_a(TokenType::Name) || t.is_a(TokenType::Keyword));
        if !ok {
            return Err(self.err_expected("a column type"));
        }
        let name = self.advance().expect("checked token must exist").lexeme;
        let mut ty = TypeName::bare(name);
        if self.eat_punct("(") {
            ty.arg1 = Some(self.expect_type(TokenType::Number)?.lexeme);
            if self.eat_punct(",") {
                ty.arg2 = Some(self.expect_type(TokenType::Number)?.lexeme);
            }
            self.expect_punct(")")?;
        }
        Ok(ty)
    }

    fn parse_create_index(&mut self, unique: bool) -> Result<Ast, ParseError> {
        let name = self.expect_name()?;
        self.expect_kw("ON")?;
        let table = self.expect_name()?;
        self.expect_punct("(")?;
        let columns = self.parse_comma_sep(Self::expect_name)?;
        self.expect_punct(")")?;
        Ok(Ast::CreateIndex(CreateIndexStatement {
            name,
            table,
            columns,
            unique,
        }))
    }

    fn parse_drop(&mut self) -> Result<Ast, ParseError> {
        if self.eat_kw("TABLE") {
            return Ok(Ast::DropTable(DropTableStatement {
                table: self.expect_name()?,
            }));
        }
        if self.eat_kw("INDEX") {
            return Ok(Ast::DropIndex(DropIndexStatement {
                name: self.expect_name()?,
            }));
        }
        Err(self.err_unsupported("DROP of this object type"))
    }

    fn parse_alter(&mut self) -> Result<Ast, ParseError> {
        self.expect_kw("TABLE")?;
        let table = self.expect_name()?;
        let actions = self.parse_comma_sep(Self::parse_alter_action)?;
        Ok(Ast::AlterTable(AlterTableStatement { table, actions }))
    }

    fn parse_alter_action(&mut self) -> Result<AlterAction, ParseError> {
        if self.eat_kw("ADD") {
            let _ = self.eat_kw("COLUMN");
            return Ok(AlterAction::AddColumn(self.parse_column_def()?));
        }
        if self.eat_kw("DROP") {
            let _ = self.eat_kw("COLUMN");
            return Ok(AlterAction::DropColumn(self.expect_name()?));
        }
        if self.eat_kw("MODIFY") {
            let _ = self.eat_kw("COLUMN");
            return Ok(AlterAction::ModifyColumn(self.parse_column_def()?));
        }
        if self.eat_kw("RENAME") {
            let _ = self.eat_kw("COLUMN");
            let from = self.expect_name()?;
            self.expect_kw("TO")?;
            let to = self.expect_name()?;
            return Ok(AlterAction::RenameColumn { from, to });
        }
        Err(self.err_expected("ADD, DROP, MODIFY, or RENAME"))
    }
}

// ---------------------------------------------------------------------------
// Whole-input convenience
// ---------------------------------------------------------------------------

/// Lex, segment, and parse a full input. Per-statement failures are
/// independently recoverable: one bad statement lands in the error list
/// without suppressing the others.
pub fn parse_all(sql: &str) -> Result<(Vec<Ast>, Vec<ParseError>), LexError> {
    let statements = segment(tokenize(sql)?);
    let mut parsed = Vec::new();
    let mut errors = Vec::new();
    for statement in statements {
        match Parser::new(statement).parse() {
            Ok(ast) => parsed.push(ast),
            Err(e) => errors.push(e),
        }
    }
    debug!(
        parsed = parsed.len(),
        failed = errors.len(),
        "parsed input"
    );
    Ok((parsed, errors))
}

#[cfg(test)]
mod tests {
    use sqlhawk_ast::{BinaryOp, Literal};

    use super::*;

    fn parse_one(sql: &str) -> Ast {
        let (mut stmts, errors) = parse_all(sql).expect("input should lex");
        assert!(errors.is_empty(), "unexpected parse errors: {errors:?}");
        assert_eq!(stmts.len(), 1, "expected exactly one statement");
        stmts.remove(0)
    }

    fn parse_err(sql: &str) -> ParseError {
        let (_, mut errors) = parse_all(sql).expect("input should lex");
        assert!(!errors.is_empty(), "expected a parse error for {sql:?}");
        errors.remove(0)
    }

    fn select(sql: &str) -> SelectStatement {
        match parse_one(sql) {
            Ast::Select(s) => s,
            other => panic!("expected SELECT, got {other:?}"),
        }
    }

    #[test]
    fn test_select_star() {
        let s = select("SELECT * FROM users;");
        assert!(!s.distinct);
        assert_eq!(s.columns, vec![Expr::Star]);
        assert_eq!(s.from.unwrap().table, "users");
    }

    #[test]
    fn test_select_distinct_with_aliases() {
        let s = select("SELECT DISTINCT u.id AS user_id, name FROM users u;");
        assert!(s.distinct);
        assert_eq!(s.columns.len(), 2);
        match &s.columns[0] {
            Expr::Aliased { alias, .. } => assert_eq!(alias, "user_id"),
            other => panic!("expected alias, got {other:?}"),
        }
        let from = s.from.unwrap();
        assert_eq!(from.table, "users");
        assert_eq!(from.alias.as_deref(), Some("u"));
    }

    #[test]
    fn test_join_and_alias_roundtrip() {
        let s = select("SELECT u.id FROM users u LEFT JOIN orders o ON u.id = o.user_id");
        let from = s.from.expect("FROM clause");
        assert_eq!(from.table, "users");
        assert_eq!(from.alias.as_deref(), Some("u"));
        assert_eq!(from.joins.len(), 1);

        let join = &from.joins[0];
        assert_eq!(join.kind, JoinKind::Left);
        assert_eq!(join.table, "orders");
        assert_eq!(join.alias.as_deref(), Some("o"));

        let on = join.on.as_ref().expect("ON condition");
        assert_eq!(on.condition.to_string(), "(u.id = o.user_id)");
    }

    #[test]
    fn test_join_kinds_from_fused_tokens() {
        let s = select(
            "SELECT * FROM a INNER JOIN b ON a.x = b.x \
             RIGHT OUTER JOIN c ON b.y = c.y CROSS JOIN d",
        );
        let kinds: Vec<JoinKind> = s.from.unwrap().joins.iter().map(|j| j.kind).collect();
        assert_eq!(kinds, [JoinKind::Inner, JoinKind::Right, JoinKind::Cross]);
    }

    #[test]
    fn test_full_select_clause_stack() {
        let s = select(
            "SELECT u.id, SUM(p.price) AS total FROM users u \
             WHERE u.active = 1 GROUP BY u.id HAVING total > 100 \
             ORDER BY total DESC, u.id ASC LIMIT 10 OFFSET 5;",
        );
        assert!(s.where_clause.is_some());
        assert_eq!(s.group_by.unwrap().columns.len(), 1);
        assert!(s.having.is_some());

        let order = s.order_by.unwrap();
        assert_eq!(order.terms.len(), 2);
        assert_eq!(order.terms[0].direction, Some(SortDirection::Desc));
        assert_eq!(order.terms[1].direction, Some(SortDirection::Asc));

        let limit = s.limit.unwrap();
        assert_eq!(limit.count, 10);
        assert_eq!(limit.offset, 5);
    }

    #[test]
    fn test_limit_offset_are_distinct_values() {
        // The offset must be its own literal, never aliased to the count.
        let s = select("SELECT a FROM t LIMIT 10 OFFSET 5");
        let limit = s.limit.unwrap();
        assert_eq!(limit.count, 10);
        assert_eq!(limit.offset, 5);

        let s = select("SELECT a FROM t LIMIT 10");
        assert_eq!(s.limit.unwrap().offset, 0);
    }

    #[test]
    fn test_insert_values_rows() {
        let Ast::Insert(i) = parse_one("INSERT INTO orders (user_id, total) VALUES (1, 100), (2, 200);")
        else {
            panic!("expected INSERT")
        };
        assert_eq!(i.table, "orders");
        assert_eq!(i.columns, vec!["user_id", "total"]);
        let InsertSource::Values(rows) = &i.source else {
            panic!("expected VALUES")
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1], Expr::Literal(Literal::Integer(100)));
    }

    #[test]
    fn test_insert_from_select() {
        let Ast::Insert(i) =
            parse_one("INSERT INTO archive (id) SELECT id FROM users WHERE active = 0;")
        else {
            panic!("expected INSERT")
        };
        let InsertSource::Select(s) = &i.source else {
            panic!("expected SELECT source")
        };
        assert!(s.where_clause.is_some());
    }

    #[test]
    fn test_update_assignments() {
        let Ast::Update(u) = parse_one("UPDATE t SET x = x + 1, y = 'done' WHERE id = 3;")
        else {
            panic!("expected UPDATE")
        };
        assert_eq!(u.table, "t");
        assert_eq!(u.assignments.len(), 2);
        assert_eq!(u.assignments[0].column, "x");
        assert!(u.where_clause.is_some());
    }

    #[test]
    fn test_delete_with_and_without_from() {
        let Ast::Delete(d) = parse_one("DELETE FROM users WHERE id = 1;") else {
            panic!("expected DELETE")
        };
        assert_eq!(d.table, "users");
        assert!(d.where_clause.is_some());

        let Ast::Delete(d) = parse_one("DELETE users;") else {
            panic!("expected DELETE")
        };
        assert!(d.where_clause.is_none());
    }

    #[test]
    fn test_create_table_with_constraints() {
        let Ast::CreateTable(c) = parse_one(
            "CREATE TABLE products (id INT PRIMARY KEY, name VARCHAR(255) NOT NULL, sku TEXT UNIQUE);",
        ) else {
            panic!("expected CREATE TABLE")
        };
        assert_eq!(c.table, "products");
        assert_eq!(c.columns.len(), 3);
        assert!(c.columns[0].primary_key);
        assert_eq!(c.columns[1].type_name.name, "VARCHAR");
        assert_eq!(c.columns[1].type_name.arg1.as_deref(), Some("255"));
        assert!(c.columns[1].not_null);
        assert!(c.columns[2].unique);
    }

    #[test]
    fn test_create_and_drop_index() {
        let Ast::CreateIndex(c) = parse_one("CREATE UNIQUE INDEX idx_users_email ON users (email);")
        else {
            panic!("expected CREATE INDEX")
        };
        assert!(c.unique);
        assert_eq!(c.name, "idx_users_email");
        assert_eq!(c.table, "users");
        assert_eq!(c.columns, vec!["email"]);

        let Ast::DropIndex(d) = parse_one("DROP INDEX idx_users_email;") else {
            panic!("expected DROP INDEX")
        };
        assert_eq!(d.name, "idx_users_email");
    }

    #[test]
    fn test_drop_table() {
        let Ast::DropTable(d) = parse_one("DROP TABLE users;") else {
            panic!("expected DROP TABLE")
        };
        assert_eq!(d.table, "users");
    }

    #[test]
    fn test_alter_table_actions() {
        let Ast::AlterTable(a) = parse_one(
            "ALTER TABLE t ADD COLUMN age INT NOT NULL, DROP COLUMN old, RENAME COLUMN a TO b;",
        ) else {
            panic!("expected ALTER TABLE")
        };
        assert_eq!(a.table, "t");
        assert_eq!(a.actions.len(), 3);
        assert!(matches!(a.actions[0], AlterAction::AddColumn(ref c) if c.not_null));
        assert!(matches!(a.actions[1], AlterAction::DropColumn(ref n) if n == "old"));
        assert!(
            matches!(a.actions[2], AlterAction::RenameColumn { ref from, ref to } if from == "a" && to == "b")
        );
    }

    #[test]
    fn test_transaction_statements() {
        for (sql, kind) in [
            ("START TRANSACTION;", TransactionKind::Begin),
            ("COMMIT;", TransactionKind::Commit),
            ("COMMIT WORK;", TransactionKind::Commit),
            ("ROLLBACK;", TransactionKind::Rollback),
        ] {
            let Ast::Transaction(t) = parse_one(sql) else {
                panic!("expected transaction for {sql:?}")
            };
            assert_eq!(t.kind, kind, "{sql}");
        }
    }

    #[test]
    fn test_begin_parses_through_the_cursor() {
        // BEGIN alone is a plain keyword, so the segmenter never opens a
        // statement for it; feed the cursor directly.
        for sql in ["BEGIN;", "BEGIN TRANSACTION;", "BEGIN WORK;"] {
            let tokens = crate::lexer::tokenize(sql).unwrap();
            let ast = Parser::new(Statement::new(tokens)).parse().unwrap();
            assert!(
                matches!(
                    ast,
                    Ast::Transaction(TransactionStatement {
                        kind: TransactionKind::Begin,
                    })
                ),
                "{sql}"
            );
        }
    }

    #[test]
    fn test_unsupported_statement_is_an_error() {
        let err = parse_err("WITH cte AS (SELECT 1) SELECT * FROM cte;");
        assert_eq!(err.kind, ParseErrorKind::Unsupported);
    }

    #[test]
    fn test_union_clause_is_an_error() {
        let err = parse_err("SELECT a FROM t UNION ALL SELECT b FROM u;");
        assert_eq!(err.kind, ParseErrorKind::TrailingTokens);
    }

    #[test]
    fn test_failed_expect_reports_position_and_statement() {
        let err = parse_err("INSERT INTO (a) VALUES (1);");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
        assert!(err.message.contains("expected identifier"), "{err}");
        assert_eq!(err.statement, "INSERT INTO (a) VALUES (1);");
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_one_bad_statement_does_not_hide_the_others() {
        let (stmts, errors) =
            parse_all("SELECT 1; SELECT FROM WHERE; UPDATE t SET a = 2;").unwrap();
        assert_eq!(stmts.len(), 2);
        assert_eq!(errors.len(), 1);
        assert!(matches!(stmts[1], Ast::Update(_)));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let s = select("SELECT * FROM t WHERE a = 1 AND b = 2 OR c = 3");
        let cond = s.where_clause.unwrap().condition;
        let Expr::Binary { op, left, .. } = cond else {
            panic!("expected binary root")
        };
        assert_eq!(op, BinaryOp::Or);
        assert!(matches!(
            *left,
            Expr::Binary {
                op: BinaryOp::And,
                ..
            }
        ));
    }
}
