// Tiered expression grammar, lowest precedence first: OR, AND, prefix NOT,
// comparison (including BETWEEN / IN / LIKE), additive, multiplicative,
// primary. Comparisons do not chain: `a = b = c` nests left.

use sqlhawk_ast::{BinaryOp, CaseBranch, ColumnRef, Expr, Literal, UnaryOp};

use crate::parser::{ParseError, Parser};
use crate::token::{Token, TokenType};

impl Parser {
    /// Parse a full expression.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_and()?;
        while self.eat_kw("OR") {
            let right = self.parse_and()?;
            expr = Expr::binary(expr, BinaryOp::Or, right);
        }
        Ok(expr)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_not()?;
        while self.eat_kw("AND") {
            let right = self.parse_not()?;
            expr = Expr::binary(expr, BinaryOp::And, right);
        }
        Ok(expr)
    }

    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        // `NOT BETWEEN` / `NOT IN` belong to the comparison tier; only a
        // freestanding NOT is the prefix operator.
        if self.check_kw("NOT") && !self.check_kw_nth(1, "BETWEEN") && !self.check_kw_nth(1, "IN")
        {
            self.advance();
            let operand = self.parse_not()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Not,
                operand: Box::new(operand),
            });
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_additive()?;
        loop {
            if let Some(op) = self.peek_comparison_op() {
                self.advance();
                let right = self.parse_additive()?;
                expr = Expr::binary(expr, op, right);
                continue;
            }
            if let Some(like) = self.peek_like_op() {
                self.advance();
                let pattern = self.parse_additive()?;
                expr = Expr::Like {
                    expr: Box::new(expr),
                    negated: like,
                    pattern: Box::new(pattern),
                };
                continue;
            }
            let negated = self.check_kw("NOT")
                && (self.check_kw_nth(1, "BETWEEN") || self.check_kw_nth(1, "IN"));
            if negated {
                self.advance();
            }
            if self.eat_kw("BETWEEN") {
                let low = self.parse_additive()?;
                self.expect_kw("AND")?;
                let high = self.parse_additive()?;
                expr = Expr::Between {
                    expr: Box::new(expr),
                    negated,
                    low: Box::new(low),
                    high: Box::new(high),
                };
                continue;
            }
            if self.eat_kw("IN") {
                expr = self.parse_in_list(expr, negated)?;
                continue;
            }
            if negated {
                // The lookahead promised BETWEEN or IN.
                return Err(self.err_expected("BETWEEN or IN"));
            }
            return Ok(expr);
        }
    }

    /// `(expr, ...)` or `(SELECT ...)` after IN.
    fn parse_in_list(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParseError> {
        self.expect_punct("(")?;
        let list = if self.at_select() {
            self.expect_dml("SELECT")?;
            vec![Expr::Subquery(Box::new(self.parse_select_stmt()?))]
        } else {
            let mut items = vec![self.parse_expression()?];
            while self.eat_punct(",") {
                items.push(self.parse_expression()?);
            }
            items
        };
        self.expect_punct(")")?;
        Ok(Expr::InList {
            expr: Box::new(expr),
            negated,
            list,
        })
    }

    fn peek_comparison_op(&self) -> Option<BinaryOp> {
        let tok = self.peek()?;
        if tok.ty != TokenType::Comparison {
            return None;
        }
        match tok.lexeme.as_str() {
            "=" | "==" => Some(BinaryOp::Eq),
            "<>" | "!=" => Some(BinaryOp::Ne),
            "<" => Some(BinaryOp::Lt),
            ">" => Some(BinaryOp::Gt),
            "<=" | "=<" => Some(BinaryOp::Le),
            ">=" => Some(BinaryOp::Ge),
            _ => None,
        }
    }

    /// A fused `[NOT] LIKE`-family comparison token. Returns the negation
    /// flag when present.
    fn peek_like_op(&self) -> Option<bool> {
        let tok = self.peek()?;
        if tok.ty != TokenType::Comparison {
            return None;
        }
        let norm = tok.normalized();
        let (negated, op) = match norm.strip_prefix("NOT ") {
            Some(rest) => (true, rest),
            None => (false, norm.as_str()),
        };
        matches!(op, "LIKE" | "ILIKE" | "RLIKE" | "REGEXP").then_some(negated)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(t) if t.ty == TokenType::Operator && t.lexeme == "+" => BinaryOp::Add,
                Some(t) if t.ty == TokenType::Operator && t.lexeme == "-" => BinaryOp::Sub,
                _ => return Ok(expr),
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            expr = Expr::binary(expr, op, right);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            // `*` lexes as the wildcard; in infix position it means multiply.
            let op = match self.peek() {
                Some(t) if t.ty == TokenType::Wildcard => BinaryOp::Mul,
                Some(t) if t.ty == TokenType::Operator && t.lexeme == "/" => BinaryOp::Div,
                _ => return Ok(expr),
            };
            self.advance();
            let right = self.parse_primary()?;
            expr = Expr::binary(expr, op, right);
        }
    }

    // -----------------------------------------------------------------------
    // Primary
    // -----------------------------------------------------------------------

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(tok) = self.peek().cloned() else {
            return Err(self.err_expected("an expression"));
        };

        if tok.is_a(TokenType::Number) {
            self.advance();
            return self.number_literal(&tok);
        }
        if tok.is_a(TokenType::String) {
            self.advance();
            return Ok(Expr::Literal(Literal::String(strip_quotes(&tok.lexeme))));
        }
        if tok.ty == TokenType::Wildcard {
            self.advance();
            return Ok(Expr::Star);
        }
        if tok.ty == TokenType::Placeholder {
            // Bind markers appear wherever values do; they carry no value,
            // so the marker text itself is the identifier.
            self.advance();
            return Ok(Expr::Identifier(ColumnRef::bare(tok.lexeme)));
        }
        if tok.is_a(TokenType::Keyword) {
            match tok.normalized().as_str() {
                "NULL" => {
                    self.advance();
                    return Ok(Expr::Literal(Literal::Null));
                }
                "TRUE" => {
                    self.advance();
                    return Ok(Expr::Literal(Literal::Boolean(true)));
                }
                "FALSE" => {
                    self.advance();
                    return Ok(Expr::Literal(Literal::Boolean(false)));
                }
                "CASE" => {
                    self.advance();
                    return self.parse_case();
                }
                _ => {}
            }
        }
        if tok.is_a(TokenType::Name) {
            return self.parse_name_expr();
        }
        if tok.ty == TokenType::Punctuation && tok.lexeme == "(" {
            return self.parse_parenthesized();
        }
        if tok.ty == TokenType::Operator && tok.lexeme == "-" {
            self.advance();
            let operand = self.parse_primary()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            });
        }
        Err(self.err_expected("an expression"))
    }

    fn number_literal(&self, tok: &Token) -> Result<Expr, ParseError> {
        let lit = match tok.ty {
            TokenType::NumberHexadecimal => parse_hex(&tok.lexeme).map(Literal::Integer),
            TokenType::NumberFloat => tok.lexeme.parse().ok().map(Literal::Float),
            _ => tok.lexeme.parse().ok().map(Literal::Integer),
        };
        lit.map(Expr::Literal)
            .ok_or_else(|| self.err_expected("a numeric literal in range"))
    }

    /// Identifier, `table.column`, `table.*`, or function call.
    fn parse_name_expr(&mut self) -> Result<Expr, ParseError> {
        let name = self.advance().expect("caller checked a name token").lexeme;

        if self.eat_punct(".") {
            if self.peek().is_some_and(|t| t.ty == TokenType::Wildcard) {
                self.advance();
                return Ok(Expr::Identifier(ColumnRef::qualified(name, "*")));
            }
            let column = self.expect_name()?;
            return Ok(Expr::Identifier(ColumnRef::qualified(name, column)));
        }

        if self.eat_punct("(") {
            let distinct = self.eat_kw("DISTINCT");
            let args = if self.eat_punct(")") {
                Vec::new()
            } else {
                let mut args = vec![self.parse_expression()?];
                while self.eat_punct(",") {
                    args.push(self.parse_expression()?);
                }
                self.expect_punct(")")?;
                args
            };
            return Ok(Expr::FunctionCall {
                name,
                distinct,
                args,
            });
        }

        Ok(Expr::Identifier(ColumnRef::bare(name)))
    }

    /// `( SELECT ...` is a subquery; any other parenthesis groups a
    /// sub-expression.
    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        self.expect_punct("(")?;
        if self.at_select() {
            self.expect_dml("SELECT")?;
            let select = self.parse_select_stmt()?;
            self.expect_punct(")")?;
            return Ok(Expr::Subquery(Box::new(select)));
        }
        let expr = self.parse_expression()?;
        self.expect_punct(")")?;
        Ok(expr)
    }

    pub(crate) fn at_select(&self) -> bool {
        self.peek()
            .is_some_and(|t| t.is_a(TokenType::Dml) && t.normalized() == "SELECT")
    }

    fn parse_case(&mut self) -> Result<Expr, ParseError> {
        let operand = if self.check_kw("WHEN") {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        let mut branches = Vec::new();
        while self.eat_kw("WHEN") {
            let condition = self.parse_expression()?;
            self.expect_kw("THEN")?;
            let result = self.parse_expression()?;
            branches.push(CaseBranch { condition, result });
        }
        if branches.is_empty() {
            return Err(self.err_expected("WHEN"));
        }
        let else_expr = if self.eat_kw("ELSE") {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        self.expect_kw("END")?;
        Ok(Expr::Case {
            operand,
            branches,
            else_expr,
        })
    }
}

/// Strip the delimiting quotes and collapse doubled quotes.
fn strip_quotes(lexeme: &str) -> String {
    let mut chars = lexeme.chars();
    let Some(delim) = chars.next() else {
        return String::new();
    };
    if chars.next_back() != Some(delim) {
        return lexeme.to_owned();
    }
    let inner: &str = chars.as_str();
    match delim {
        '\'' => inner.replace("''", "'"),
        '"' => inner.replace("\"\"", "\""),
        _ => inner.to_owned(),
    }
}

fn parse_hex(lexeme: &str) -> Option<i64> {
    let (neg, body) = match lexeme.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, lexeme),
    };
    let digits = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))?;
    let value = i64::from_str_radix(digits, 16).ok()?;
    Some(if neg { -value } else { value })
}
