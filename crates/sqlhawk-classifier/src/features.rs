// Turns one SQL input into a flat feature map for the classifier.
//
// Features come from two levels: the raw token stream (comments, hints,
// placeholders survive only there) and the per-statement ASTs. A statement
// that fails to parse becomes a feature itself rather than an abort: the
// failure pattern is signal, and one bad statement must not suppress the
// others.

use std::collections::BTreeMap;

use sqlhawk_ast::{BinaryOp, Expr, Literal, SelectStatement, Statement as Ast};
use sqlhawk_error::SqlhawkError;
use sqlhawk_parser::{segment, tokenize, Parser, TokenType};
use tracing::debug;

/// Extract the feature map for one SQL input.
///
/// Only lexing failures abort extraction; the offending offset travels in
/// the error.
pub fn extract_features(sql: &str) -> Result<BTreeMap<String, String>, SqlhawkError> {
    let tokens =
        tokenize(sql).map_err(|e| SqlhawkError::Lex { offset: e.offset })?;

    let mut features = BTreeMap::new();

    // Token-level signals.
    let comment_count = tokens
        .iter()
        .filter(|t| t.is_a(TokenType::Comment))
        .count();
    let hinted = tokens.iter().any(|t| {
        t.is_a(TokenType::CommentSingleHint) || t.is_a(TokenType::CommentMultilineHint)
    });
    let placeholder_count = tokens
        .iter()
        .filter(|t| t.ty == TokenType::Placeholder)
        .count();
    let string_count = tokens
        .iter()
        .filter(|t| t.is_a(TokenType::String))
        .count();
    let has_union = tokens.iter().any(|t| {
        t.is_a(TokenType::Keyword) && matches!(t.normalized().as_str(), "UNION" | "UNION ALL")
    });
    let mut has_drop = tokens
        .iter()
        .any(|t| t.is_a(TokenType::Ddl) && t.normalized() == "DROP");

    // Statement-level signals.
    let statements = segment(tokens);
    let statement_count = statements.len();

    let mut parse_errors = 0usize;
    let mut has_ddl = false;
    let mut has_tautology = false;
    let mut kinds: Vec<&'static str> = Vec::new();

    for statement in statements {
        match Parser::new(statement).parse() {
            Ok(ast) => {
                let kind = ast.kind_name();
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
                has_ddl |= ast.is_ddl();
                has_drop |= matches!(ast, Ast::DropTable(_) | Ast::DropIndex(_));
                has_tautology |= statement_has_tautology(&ast);
            }
            Err(e) => {
                debug!(error = %e, "statement skipped during feature extraction");
                parse_errors += 1;
            }
        }
    }
    kinds.sort_unstable();

    features.insert("statement_count".into(), statement_count.to_string());
    features.insert("comment_count".into(), comment_count.to_string());
    features.insert("hint_comment".into(), hinted.to_string());
    features.insert("placeholder_count".into(), placeholder_count.to_string());
    features.insert("string_literal_count".into(), string_count.to_string());
    features.insert("has_union".into(), has_union.to_string());
    features.insert("has_drop".into(), has_drop.to_string());
    features.insert("has_ddl".into(), has_ddl.to_string());
    features.insert("has_tautology".into(), has_tautology.to_string());
    features.insert("parse_error_count".into(), parse_errors.to_string());
    features.insert("kinds".into(), kinds.join("+"));

    Ok(features)
}

/// All condition roots of a statement: WHERE, HAVING, and JOIN ... ON.
fn condition_roots<'a>(ast: &'a Ast, out: &mut Vec<&'a Expr>) {
    match ast {
        Ast::Select(s) => select_conditions(s, out),
        Ast::Update(u) => {
            if let Some(w) = &u.where_clause {
                out.push(&w.condition);
            }
        }
        Ast::Delete(d) => {
            if let Some(w) = &d.where_clause {
                out.push(&w.condition);
            }
        }
        _ => {}
    }
}

fn select_conditions<'a>(s: &'a SelectStatement, out: &mut Vec<&'a Expr>) {
    if let Some(w) = &s.where_clause {
        out.push(&w.condition);
    }
    if let Some(h) = &s.having {
        out.push(&h.condition);
    }
    if let Some(f) = &s.from {
        for join in &f.joins {
            if let Some(on) = &join.on {
                out.push(&on.condition);
            }
        }
    }
}

fn statement_has_tautology(ast: &Ast) -> bool {
    let mut roots = Vec::new();
    condition_roots(ast, &mut roots);
    roots.into_iter().any(has_tautology)
}

/// The classic injection tell: a comparison that is true for every row
/// (`OR 1=1`, `OR 'a'='a'`, `OR TRUE`).
fn has_tautology(expr: &Expr) -> bool {
    match expr {
        Expr::Binary { left, op, right } => {
            if *op == BinaryOp::Eq {
                if let (Expr::Literal(l), Expr::Literal(r)) = (left.as_ref(), right.as_ref()) {
                    if l == r {
                        return true;
                    }
                }
            }
            if *op == BinaryOp::Or && (is_true_literal(left) || is_true_literal(right)) {
                return true;
            }
            has_tautology(left) || has_tautology(right)
        }
        Expr::Unary { operand, .. } => has_tautology(operand),
        Expr::Aliased { expr, .. } => has_tautology(expr),
        Expr::Between {
            expr, low, high, ..
        } => has_tautology(expr) || has_tautology(low) || has_tautology(high),
        Expr::InList { expr, list, .. } => {
            has_tautology(expr) || list.iter().any(has_tautology)
        }
        Expr::Like { expr, pattern, .. } => has_tautology(expr) || has_tautology(pattern),
        Expr::Case {
            operand,
            branches,
            else_expr,
        } => {
            operand.as_deref().is_some_and(has_tautology)
                || branches
                    .iter()
                    .any(|b| has_tautology(&b.condition) || has_tautology(&b.result))
                || else_expr.as_deref().is_some_and(has_tautology)
        }
        Expr::FunctionCall { args, .. } => args.iter().any(has_tautology),
        Expr::Subquery(select) => {
            let mut roots = Vec::new();
            select_conditions(select, &mut roots);
            roots.into_iter().any(has_tautology)
        }
        Expr::Identifier(_) | Expr::Literal(_) | Expr::Star => false,
    }
}

fn is_true_literal(expr: &Expr) -> bool {
    matches!(expr, Expr::Literal(Literal::Boolean(true)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(sql: &str) -> BTreeMap<String, String> {
        extract_features(sql).expect("extraction should succeed")
    }

    #[test]
    fn test_benign_select_features() {
        let f = features("SELECT name FROM users WHERE id = 1");
        assert_eq!(f["statement_count"], "1");
        assert_eq!(f["has_ddl"], "false");
        assert_eq!(f["has_drop"], "false");
        assert_eq!(f["has_tautology"], "false");
        assert_eq!(f["kinds"], "select");
        assert_eq!(f["parse_error_count"], "0");
    }

    #[test]
    fn test_drop_table_features() {
        let f = features("DROP TABLE users");
        assert_eq!(f["has_ddl"], "true");
        assert_eq!(f["has_drop"], "true");
        assert_eq!(f["kinds"], "drop_table");
    }

    #[test]
    fn test_tautology_detected() {
        let f = features("SELECT * FROM users WHERE name = 'x' OR 1 = 1");
        assert_eq!(f["has_tautology"], "true");

        let f = features("SELECT * FROM users WHERE name = 'x' OR 'a' = 'a'");
        assert_eq!(f["has_tautology"], "true");

        let f = features("SELECT * FROM users WHERE name = 'x' AND active = 1");
        assert_eq!(f["has_tautology"], "false");
    }

    #[test]
    fn test_comment_and_union_signals() {
        let f = features("SELECT a FROM t -- tail\nUNION ALL SELECT b FROM u;");
        assert_eq!(f["comment_count"], "1");
        assert_eq!(f["has_union"], "true");
        // UNION is not in the supported grammar; extraction still succeeds.
        assert_eq!(f["parse_error_count"], "1");
    }

    #[test]
    fn test_bad_statement_does_not_abort_extraction() {
        let f = features("SELECT 1; SELECT FROM WHERE; DROP TABLE t;");
        assert_eq!(f["statement_count"], "3");
        assert_eq!(f["parse_error_count"], "1");
        assert_eq!(f["has_drop"], "true");
        assert_eq!(f["kinds"], "drop_table+select");
    }

    #[test]
    fn test_placeholder_and_string_counts() {
        let f = features("SELECT * FROM t WHERE a = ? AND b = 'x' AND c = 'y'");
        assert_eq!(f["placeholder_count"], "1");
        assert_eq!(f["string_literal_count"], "2");
    }

    #[test]
    fn test_lex_failure_aborts_with_offset() {
        let err = extract_features("SELECT §").unwrap_err();
        assert!(matches!(err, SqlhawkError::Lex { offset: 7 }));
    }
}
