// Rule-table lexer.
//
// An ordered table of matcher functions is tried at the current scan
// position; the first rule matching exactly there wins. The order of RULES
// is load-bearing: it encodes every disambiguation (hinted comments before
// plain ones, multi-word keyword phrases before the generic word rule,
// multi-char operators before single-char punctuation) and must not be
// rearranged.
//
// Matchers are non-backtracking: a failed trailing boundary check fails the
// whole rule and the scan falls through to later rules. Word and phrase
// matchers compare ASCII-case-insensitively.

use std::error::Error;
use std::fmt;

use memchr::memchr2;

use crate::keywords::resolve_keyword;
use crate::token::{Token, TokenType};

/// No rule matched the input at `offset`. Fatal for the whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    /// Byte offset of the first unmatchable character.
    pub offset: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no lexical rule matches input at byte offset {}",
            self.offset
        )
    }
}

impl Error for LexError {}

/// What to do with a matched span.
#[derive(Debug, Clone, Copy)]
enum RuleAction {
    /// Emit a token of this type.
    Emit(TokenType),
    /// Classify the matched word through the dialect keyword tables.
    ResolveKeyword,
}

/// One prioritized lexical rule: a matcher returning the matched byte
/// length at the given position, plus the action for the matched text.
struct LexRule {
    matcher: fn(&str, usize) -> Option<usize>,
    action: RuleAction,
}

/// Tokenize SQL text into an ordered token stream.
///
/// Concatenating the returned lexemes reconstructs the input exactly.
/// The lexer holds no state across calls; the rule table and keyword
/// tables are immutable statics shared by all threads.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    'scan: while pos < text.len() {
        for rule in RULES {
            if let Some(len) = (rule.matcher)(text, pos) {
                debug_assert!(len > 0, "lexical rule matched an empty span");
                let lexeme = &text[pos..pos + len];
                let ty = match rule.action {
                    RuleAction::Emit(ty) => ty,
                    RuleAction::ResolveKeyword => resolve_keyword(lexeme),
                };
                tokens.push(Token::new(ty, lexeme));
                pos += len;
                continue 'scan;
            }
        }
        return Err(LexError { offset: pos });
    }

    Ok(tokens)
}

/// The prioritized rule table. First match at the scan position wins.
static RULES: &[LexRule] = &[
    // Comments: hinted variants before plain, both before whitespace.
    rule(match_single_hint_comment, TokenType::CommentSingleHint),
    rule(match_multiline_hint_comment, TokenType::CommentMultilineHint),
    rule(match_single_comment, TokenType::CommentSingle),
    rule(match_multiline_comment, TokenType::CommentMultiline),
    rule(match_newline, TokenType::Newline),
    rule(match_whitespace, TokenType::Whitespace),
    // Multi-char operators before anything single-char.
    rule(match_assignment, TokenType::Assignment),
    rule(match_double_colon, TokenType::Punctuation),
    rule(match_wildcard, TokenType::Wildcard),
    // Quoted identifiers and delimited literals before bare words.
    rule(match_backtick_name, TokenType::Name),
    rule(match_acute_name, TokenType::Name),
    rule(match_dollar_literal, TokenType::Literal),
    // Placeholders.
    rule(match_placeholder_question, TokenType::Placeholder),
    rule(match_placeholder_pyformat, TokenType::Placeholder),
    rule(match_placeholder_named, TokenType::Placeholder),
    // Client commands such as `\copy`.
    rule(match_command, TokenType::Command),
    // Frequent keywords short-circuited ahead of the name heuristics.
    rule(match_keyword_shortcut, TokenType::Keyword),
    // Session/user variables.
    rule(match_variable_name, TokenType::Name),
    // Qualified-name and call-site heuristics.
    rule(match_name_before_dot, TokenType::Name),
    rule(match_name_after_dot, TokenType::Name),
    rule(match_name_before_paren, TokenType::Name),
    // Numbers.
    rule(match_hex, TokenType::NumberHexadecimal),
    rule(match_float_exponent, TokenType::NumberFloat),
    rule(match_float, TokenType::NumberFloat),
    rule(match_integer, TokenType::NumberInteger),
    // Strings.
    rule(match_string_single, TokenType::StringSingle),
    rule(match_string_symbol, TokenType::StringSymbol),
    rule(match_bracket_name, TokenType::Name),
    // Multi-word keyword phrases before the generic word rule.
    rule(match_join_phrase, TokenType::Keyword),
    rule(match_end_phrase, TokenType::Keyword),
    rule(match_not_null, TokenType::Keyword),
    rule(match_nulls_first_last, TokenType::Keyword),
    rule(match_union_all, TokenType::Keyword),
    rule(match_create_phrase, TokenType::Ddl),
    rule(match_double_precision, TokenType::Builtin),
    rule(match_group_by, TokenType::Keyword),
    rule(match_order_by, TokenType::Keyword),
    rule(match_handler_for, TokenType::Keyword),
    rule(match_lateral_view, TokenType::Keyword),
    rule(match_tz_cast, TokenType::TzCast),
    rule(match_like_comparison, TokenType::Comparison),
    rule(match_regexp_comparison, TokenType::Comparison),
    // Generic word, resolved through the keyword tables.
    LexRule {
        matcher: match_word,
        action: RuleAction::ResolveKeyword,
    },
    // Punctuation and operator runs last overall.
    rule(match_punctuation, TokenType::Punctuation),
    rule(match_comparison_run, TokenType::Comparison),
    rule(match_operator_run, TokenType::Operator),
];

const fn rule(matcher: fn(&str, usize) -> Option<usize>, ty: TokenType) -> LexRule {
    LexRule {
        matcher,
        action: RuleAction::Emit(ty),
    }
}

// ---------------------------------------------------------------------------
// Character helpers
// ---------------------------------------------------------------------------

fn is_word(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

fn is_letter(ch: char) -> bool {
    ch.is_alphabetic()
}

fn prev_char(input: &str, pos: usize) -> Option<char> {
    input[..pos].chars().next_back()
}

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

/// Case-insensitive literal match of an ASCII word, no boundary check.
fn eat_ci(s: &str, word: &str) -> Option<usize> {
    let n = word.len();
    let head = s.as_bytes().get(..n)?;
    head.eq_ignore_ascii_case(word.as_bytes()).then_some(n)
}

/// `eat_ci` plus a trailing word-boundary check.
fn eat_ci_word(s: &str, word: &str) -> Option<usize> {
    let n = eat_ci(s, word)?;
    at_word_boundary(s, n).then_some(n)
}

/// True when the char starting at byte `at` (if any) is not a word char.
fn at_word_boundary(s: &str, at: usize) -> bool {
    s[at..].chars().next().is_none_or(|c| !is_word(c))
}

/// One or more whitespace characters (newlines included, as inside
/// multi-word phrases).
fn eat_ws1(s: &str) -> Option<usize> {
    let mut len = 0;
    for ch in s.chars() {
        if ch.is_whitespace() {
            len += ch.len_utf8();
        } else {
            break;
        }
    }
    (len > 0).then_some(len)
}

/// Byte length through the end of the current line, including the line
/// terminator (or to end of input).
fn through_line_end(s: &str, from: usize) -> usize {
    match memchr2(b'\r', b'\n', s[from..].as_bytes()) {
        Some(i) => {
            let at = from + i;
            if s.as_bytes()[at] == b'\r' && s.as_bytes().get(at + 1) == Some(&b'\n') {
                at + 2
            } else {
                at + 1
            }
        }
        None => s.len(),
    }
}

/// A delimited span with doubled-delimiter escapes (`` `a``b` ``).
fn quoted(s: &str, delim: char) -> Option<usize> {
    let d = delim.len_utf8();
    if first_char(s)? != delim {
        return None;
    }
    let mut i = d;
    while i < s.len() {
        let ch = s[i..].chars().next()?;
        if ch == delim {
            if s[i + d..].starts_with(delim) {
                i += 2 * d;
            } else {
                return Some(i + d);
            }
        } else {
            i += ch.len_utf8();
        }
    }
    None
}

/// A quote-delimited literal allowing both doubled-delimiter and
/// backslash escapes (`'it''s'`, `'it\'s'`).
fn quoted_with_backslash(s: &str, delim: char) -> Option<usize> {
    let d = delim.len_utf8();
    if first_char(s)? != delim {
        return None;
    }
    let mut i = d;
    while i < s.len() {
        let ch = s[i..].chars().next()?;
        if ch == delim {
            if s[i + d..].starts_with(delim) {
                i += 2 * d;
            } else {
                return Some(i + d);
            }
        } else if ch == '\\' {
            i += 1;
            match s[i..].chars().next() {
                Some(esc) => i += esc.len_utf8(),
                None => return None,
            }
        } else {
            i += ch.len_utf8();
        }
    }
    None
}

/// Byte length of a word-char run starting with a letter, or 0.
fn letter_word_run(s: &str) -> usize {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_letter(c) => {
            let mut len = c.len_utf8();
            for ch in chars {
                if is_word(ch) {
                    len += ch.len_utf8();
                } else {
                    break;
                }
            }
            len
        }
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Comments and whitespace
// ---------------------------------------------------------------------------

fn comment_intro(s: &str) -> Option<usize> {
    if s.starts_with("--") {
        Some(2)
    } else if s.starts_with("# ") {
        Some(2)
    } else {
        None
    }
}

fn match_single_hint_comment(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let intro = comment_intro(s)?;
    s[intro..].starts_with('+').then_some(())?;
    Some(through_line_end(s, intro + 1))
}

fn match_multiline_hint_comment(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    s.starts_with("/*+").then_some(())?;
    s[3..].find("*/").map(|i| 3 + i + 2)
}

fn match_single_comment(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let intro = comment_intro(s)?;
    Some(through_line_end(s, intro))
}

fn match_multiline_comment(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    s.starts_with("/*").then_some(())?;
    s[2..].find("*/").map(|i| 2 + i + 2)
}

fn match_newline(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    if s.starts_with("\r\n") {
        Some(2)
    } else if s.starts_with('\r') || s.starts_with('\n') {
        Some(1)
    } else {
        None
    }
}

fn match_whitespace(input: &str, pos: usize) -> Option<usize> {
    // Newlines are excluded so the Newline rule above keeps winning at
    // every line break.
    let mut len = 0;
    for ch in input[pos..].chars() {
        if ch.is_whitespace() && ch != '\r' && ch != '\n' {
            len += ch.len_utf8();
        } else {
            break;
        }
    }
    (len > 0).then_some(len)
}

// ---------------------------------------------------------------------------
// Operators with fixed spellings
// ---------------------------------------------------------------------------

fn match_assignment(input: &str, pos: usize) -> Option<usize> {
    input[pos..].starts_with(":=").then_some(2)
}

fn match_double_colon(input: &str, pos: usize) -> Option<usize> {
    input[pos..].starts_with("::").then_some(2)
}

fn match_wildcard(input: &str, pos: usize) -> Option<usize> {
    input[pos..].starts_with('*').then_some(1)
}

// ---------------------------------------------------------------------------
// Quoted names and delimited literals
// ---------------------------------------------------------------------------

fn match_backtick_name(input: &str, pos: usize) -> Option<usize> {
    quoted(&input[pos..], '`')
}

fn match_acute_name(input: &str, pos: usize) -> Option<usize> {
    quoted(&input[pos..], '´')
}

/// Dollar-quoted literal: `$$body$$` or `$tag$body$tag$`, only when not
/// preceded by non-whitespace.
fn match_dollar_literal(input: &str, pos: usize) -> Option<usize> {
    if prev_char(input, pos).is_some_and(|c| !c.is_whitespace()) {
        return None;
    }
    let s = &input[pos..];
    s.starts_with('$').then_some(())?;
    let mut tag_len = 1;
    let run = {
        let rest = &s[1..];
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if is_letter(c) || c == '_' => {
                let mut n = c.len_utf8();
                for ch in chars {
                    if is_word(ch) {
                        n += ch.len_utf8();
                    } else {
                        break;
                    }
                }
                n
            }
            _ => 0,
        }
    };
    tag_len += run;
    s[tag_len..].starts_with('$').then_some(())?;
    tag_len += 1;
    let delim = &s[..tag_len];
    s[tag_len..].find(delim).map(|i| tag_len + i + tag_len)
}

// ---------------------------------------------------------------------------
// Placeholders and commands
// ---------------------------------------------------------------------------

fn match_placeholder_question(input: &str, pos: usize) -> Option<usize> {
    input[pos..].starts_with('?').then_some(1)
}

/// Python DB-API style `%s` / `%(name)s`.
fn match_placeholder_pyformat(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    s.starts_with('%').then_some(())?;
    let mut i = 1;
    if s[i..].starts_with('(') {
        i += 1;
        let mut saw_word = false;
        for ch in s[i..].chars() {
            if is_word(ch) {
                saw_word = true;
                i += ch.len_utf8();
            } else {
                break;
            }
        }
        if !saw_word || !s[i..].starts_with(')') {
            return None;
        }
        i += 1;
    }
    s[i..].starts_with('s').then_some(i + 1)
}

/// `$name`, `:name`, `?name`, only when not preceded by a word char.
fn match_placeholder_named(input: &str, pos: usize) -> Option<usize> {
    if prev_char(input, pos).is_some_and(is_word) {
        return None;
    }
    let s = &input[pos..];
    let sigil = first_char(s)?;
    if !matches!(sigil, '$' | ':' | '?') {
        return None;
    }
    let mut len = 0;
    for ch in s[sigil.len_utf8()..].chars() {
        if is_word(ch) {
            len += ch.len_utf8();
        } else {
            break;
        }
    }
    (len > 0).then_some(sigil.len_utf8() + len)
}

fn match_command(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    s.starts_with('\\').then_some(())?;
    let mut len = 0;
    for ch in s[1..].chars() {
        if is_word(ch) {
            len += ch.len_utf8();
        } else {
            break;
        }
    }
    (len > 0).then_some(1 + len)
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// CASE / IN / VALUES / USING / FROM / AS short-circuited as keywords
/// before the name heuristics can claim them.
fn match_keyword_shortcut(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    for word in ["CASE", "IN", "VALUES", "USING", "FROM", "AS"] {
        if let Some(n) = eat_ci_word(s, word) {
            return Some(n);
        }
    }
    None
}

/// `@var`, `#temp`, `##global` session/object variables.
fn match_variable_name(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let sigil = if s.starts_with("##") {
        2
    } else if s.starts_with('#') || s.starts_with('@') {
        1
    } else {
        return None;
    };
    // A letter followed by at least one more word char.
    let run = letter_word_run(&s[sigil..]);
    (s[sigil..run + sigil].chars().count() >= 2).then_some(sigil + run)
}

/// A word directly (or across whitespace) followed by a dot: the qualifier
/// part of `table.column`.
fn match_name_before_dot(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let run = letter_word_run(s);
    if run == 0 {
        return None;
    }
    let after = eat_ws1(&s[run..]).unwrap_or(0);
    s[run + after..].starts_with('.').then_some(run)
}

/// The word right after a dot: the member part of `table.column`.
fn match_name_after_dot(input: &str, pos: usize) -> Option<usize> {
    if prev_char(input, pos) != Some('.') {
        return None;
    }
    let run = letter_word_run(&input[pos..]);
    (run > 0).then_some(run)
}

/// A word directly followed by `(`: a function-call site.
fn match_name_before_paren(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let run = letter_word_run(s);
    if run == 0 {
        return None;
    }
    s[run..].starts_with('(').then_some(run)
}

/// `[quoted name]`, unless glued to a preceding word, `]`, or `)`.
fn match_bracket_name(input: &str, pos: usize) -> Option<usize> {
    if prev_char(input, pos).is_some_and(|c| is_word(c) || c == ']' || c == ')') {
        return None;
    }
    let s = &input[pos..];
    s.starts_with('[').then_some(())?;
    let mut len = 1;
    for ch in s[1..].chars() {
        match ch {
            ']' => return (len > 1).then_some(len + 1),
            '[' => return None,
            _ => len += ch.len_utf8(),
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn hex_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_hexdigit).count()
}

fn match_hex(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let sign = usize::from(s.starts_with('-'));
    let body = &s[sign..];
    (body.starts_with("0x") || body.starts_with("0X")).then_some(())?;
    let digits = hex_run(&body[2..]);
    (digits > 0).then_some(sign + 2 + digits)
}

/// Exponent float: `-?digits[.digits]E-?digits`.
fn match_float_exponent(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let sign = usize::from(s.starts_with('-'));
    let int = digit_run(&s[sign..]);
    if int == 0 {
        return None;
    }
    let mut i = sign + int;
    if s[i..].starts_with('.') {
        let frac = digit_run(&s[i + 1..]);
        if frac == 0 {
            return None;
        }
        i += 1 + frac;
    }
    if !(s[i..].starts_with('E') || s[i..].starts_with('e')) {
        return None;
    }
    i += 1;
    i += usize::from(s[i..].starts_with('-'));
    let exp = digit_run(&s[i..]);
    (exp > 0).then_some(i + exp)
}

/// Plain float: `-?(digits.digits* | .digits)`, not running into a word.
fn match_float(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let sign = usize::from(s.starts_with('-'));
    let int = digit_run(&s[sign..]);
    let mut i = sign + int;
    let len = if int > 0 && s[i..].starts_with('.') {
        i += 1;
        i + digit_run(&s[i..])
    } else if int == 0 && s[i..].starts_with('.') {
        let frac = digit_run(&s[i + 1..]);
        if frac == 0 {
            return None;
        }
        i + 1 + frac
    } else {
        return None;
    };
    word_tail_free(s, len).then_some(len)
}

fn match_integer(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let sign = usize::from(s.starts_with('-'));
    let digits = digit_run(&s[sign..]);
    if digits == 0 {
        return None;
    }
    let len = sign + digits;
    word_tail_free(s, len).then_some(len)
}

/// Trailing boundary guard for number rules: the next char must not be a
/// letter or underscore, otherwise the whole span is a word like `123abc`.
fn word_tail_free(s: &str, at: usize) -> bool {
    s[at..]
        .chars()
        .next()
        .is_none_or(|c| !(is_letter(c) || c == '_'))
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

fn match_string_single(input: &str, pos: usize) -> Option<usize> {
    quoted_with_backslash(&input[pos..], '\'')
}

fn match_string_symbol(input: &str, pos: usize) -> Option<usize> {
    quoted_with_backslash(&input[pos..], '"')
}

// ---------------------------------------------------------------------------
// Multi-word keyword phrases
// ---------------------------------------------------------------------------

/// One qualifier word out of `words` followed by mandatory whitespace.
/// Returns the consumed length including the whitespace.
fn eat_qualifier(s: &str, words: &[&str]) -> Option<usize> {
    for word in words {
        if let Some(n) = eat_ci_word(s, word) {
            let ws = eat_ws1(&s[n..])?;
            return Some(n + ws);
        }
    }
    None
}

/// `[LEFT|RIGHT|FULL] [INNER|OUTER|STRAIGHT] JOIN`, `[CROSS|NATURAL] JOIN`,
/// or bare `JOIN`, as one token.
fn match_join_phrase(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let mut i = 0;
    if let Some(n) = eat_qualifier(s, &["LEFT", "RIGHT", "FULL"]) {
        i += n;
        if let Some(m) = eat_qualifier(&s[i..], &["INNER", "OUTER", "STRAIGHT"]) {
            i += m;
        }
    } else if let Some(n) = eat_qualifier(s, &["INNER", "OUTER", "STRAIGHT", "CROSS", "NATURAL"]) {
        i += n;
    }
    let join = eat_ci_word(&s[i..], "JOIN")?;
    Some(i + join)
}

/// `END`, `END IF`, `END LOOP`, `END WHILE`.
fn match_end_phrase(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let end = eat_ci(s, "END")?;
    if let Some(ws) = eat_ws1(&s[end..]) {
        for word in ["IF", "LOOP", "WHILE"] {
            if let Some(n) = eat_ci_word(&s[end + ws..], word) {
                return Some(end + ws + n);
            }
        }
    }
    at_word_boundary(s, end).then_some(end)
}

/// Two or more words separated by whitespace, matched as one keyword
/// phrase. The last word carries the trailing boundary check.
fn eat_phrase(s: &str, words: &[&str]) -> Option<usize> {
    let mut i = 0;
    let (last, init) = words.split_last()?;
    for word in init {
        let n = eat_ci(&s[i..], word)?;
        let ws = eat_ws1(&s[i + n..])?;
        i += n + ws;
    }
    Some(i + eat_ci_word(&s[i..], last)?)
}

fn match_not_null(input: &str, pos: usize) -> Option<usize> {
    eat_phrase(&input[pos..], &["NOT", "NULL"])
}

fn match_nulls_first_last(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    eat_phrase(s, &["NULLS", "FIRST"]).or_else(|| eat_phrase(s, &["NULLS", "LAST"]))
}

fn match_union_all(input: &str, pos: usize) -> Option<usize> {
    eat_phrase(&input[pos..], &["UNION", "ALL"])
}

/// `CREATE` or `CREATE OR REPLACE`, classified as DDL either way.
fn match_create_phrase(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let create = eat_ci_word(s, "CREATE")?;
    if let Some(ext) = eat_ws1(&s[create..])
        .and_then(|ws| eat_phrase(&s[create + ws..], &["OR", "REPLACE"]).map(|n| ws + n))
    {
        return Some(create + ext);
    }
    Some(create)
}

fn match_double_precision(input: &str, pos: usize) -> Option<usize> {
    eat_phrase(&input[pos..], &["DOUBLE", "PRECISION"])
}

fn match_group_by(input: &str, pos: usize) -> Option<usize> {
    eat_phrase(&input[pos..], &["GROUP", "BY"])
}

fn match_order_by(input: &str, pos: usize) -> Option<usize> {
    eat_phrase(&input[pos..], &["ORDER", "BY"])
}

fn match_handler_for(input: &str, pos: usize) -> Option<usize> {
    eat_phrase(&input[pos..], &["HANDLER", "FOR"])
}

/// Hive `LATERAL VIEW EXPLODE|INLINE|PARSE_URL_TUPLE|POSEXPLODE|STACK`.
fn match_lateral_view(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    for udtf in ["EXPLODE", "INLINE", "PARSE_URL_TUPLE", "POSEXPLODE", "STACK"] {
        if let Some(n) = eat_phrase(s, &["LATERAL", "VIEW", udtf]) {
            return Some(n);
        }
    }
    None
}

/// `AT TIME ZONE 'region'` (the `WITH'` spelling is also accepted).
fn match_tz_cast(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let head = eat_ci(s, "AT").or_else(|| eat_ci(s, "WITH'"))?;
    let mut i = head + eat_ws1(&s[head..])?;
    i += eat_ci(&s[i..], "TIME")?;
    i += eat_ws1(&s[i..])?;
    i += eat_ci(&s[i..], "ZONE")?;
    i += eat_ws1(&s[i..])?;
    s[i..].starts_with('\'').then_some(())?;
    let inner = s[i + 1..].find('\'')?;
    (inner > 0).then_some(i + 1 + inner + 1)
}

/// `[NOT] LIKE|ILIKE|RLIKE` fused into one comparison token.
fn match_like_comparison(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let not = eat_qualifier(s, &["NOT"]).unwrap_or(0);
    for word in ["ILIKE", "RLIKE", "LIKE"] {
        if let Some(n) = eat_ci_word(&s[not..], word) {
            return Some(not + n);
        }
    }
    None
}

/// `[NOT] REGEXP` fused into one comparison token.
fn match_regexp_comparison(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let not = eat_qualifier(s, &["NOT"]).unwrap_or(0);
    eat_ci_word(&s[not..], "REGEXP").map(|n| not + n)
}

// ---------------------------------------------------------------------------
// Generic word, punctuation, operator runs
// ---------------------------------------------------------------------------

/// A bare word: a word char followed by word chars plus `$` and `#`.
/// Classification is deferred to the keyword tables.
fn match_word(input: &str, pos: usize) -> Option<usize> {
    let s = &input[pos..];
    let mut chars = s.chars();
    let first = chars.next()?;
    if !is_word(first) {
        return None;
    }
    let mut len = first.len_utf8();
    for ch in chars {
        if is_word(ch) || ch == '$' || ch == '#' {
            len += ch.len_utf8();
        } else {
            break;
        }
    }
    Some(len)
}

fn match_punctuation(input: &str, pos: usize) -> Option<usize> {
    let ch = first_char(&input[pos..])?;
    matches!(ch, ';' | ':' | '(' | ')' | '[' | ']' | ',' | '.').then_some(1)
}

fn match_comparison_run(input: &str, pos: usize) -> Option<usize> {
    let len = input[pos..]
        .bytes()
        .take_while(|b| matches!(b, b'<' | b'>' | b'=' | b'~' | b'!'))
        .count();
    (len > 0).then_some(len)
}

fn match_operator_run(input: &str, pos: usize) -> Option<usize> {
    let len = input[pos..]
        .bytes()
        .take_while(|b| matches!(b, b'+' | b'/' | b'@' | b'#' | b'%' | b'^' | b'&' | b'|' | b'-'))
        .count();
    (len > 0).then_some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(src: &str) -> Vec<Token> {
        tokenize(src).expect("input should lex")
    }

    fn types(src: &str) -> Vec<TokenType> {
        lex(src).into_iter().map(|t| t.ty).collect()
    }

    fn lexemes(src: &str) -> Vec<String> {
        lex(src).into_iter().map(|t| t.lexeme).collect()
    }

    fn nonblank(src: &str) -> Vec<Token> {
        lex(src)
            .into_iter()
            .filter(|t| !t.is_a(TokenType::Whitespace))
            .collect()
    }

    #[test]
    fn test_coverage_reconstructs_input() {
        let samples = [
            "SELECT * FROM users WHERE name = 'John Doe';",
            "-- note\nSELECT a, b FROM t GROUP BY a ORDER BY b DESC LIMIT 10 OFFSET 5;",
            "INSERT INTO orders (user_id, total) VALUES (1, 100);",
            "/* block */ UPDATE t SET x = x + 1 WHERE id IN (1, 2, 3)",
            "SELECT u.id FROM users u LEFT OUTER JOIN orders o ON u.id = o.user_id",
            "CREATE TABLE products (id INT PRIMARY KEY, name VARCHAR(255));",
        ];
        for src in samples {
            let joined: String = lex(src).iter().map(|t| t.lexeme.as_str()).collect();
            assert_eq!(joined, src, "lexemes must reconstruct {src:?}");
        }
    }

    #[test]
    fn test_basic_select_classification() {
        let toks = nonblank("SELECT * FROM users;");
        assert_eq!(toks[0].ty, TokenType::Dml);
        assert_eq!(toks[1].ty, TokenType::Wildcard);
        assert_eq!(toks[2].ty, TokenType::Keyword);
        assert_eq!(toks[2].lexeme, "FROM");
        assert_eq!(toks[3].ty, TokenType::Name);
        assert_eq!(toks[4], Token::new(TokenType::Punctuation, ";"));
    }

    #[test]
    fn test_case_insensitive_keywords() {
        let toks = nonblank("select * from users");
        assert_eq!(toks[0].ty, TokenType::Dml);
        assert_eq!(toks[0].lexeme, "select");
        assert_eq!(toks[2].ty, TokenType::Keyword);
    }

    #[test]
    fn test_hint_comment_beats_plain_comment() {
        let toks = lex("--+ HINT\n-- plain\n");
        assert_eq!(toks[0].ty, TokenType::CommentSingleHint);
        assert_eq!(toks[0].lexeme, "--+ HINT\n");
        assert_eq!(toks[1].ty, TokenType::CommentSingle);
        let toks = lex("/*+ index(t i) */ /* plain */");
        assert_eq!(toks[0].ty, TokenType::CommentMultilineHint);
        assert_eq!(toks[2].ty, TokenType::CommentMultiline);
    }

    #[test]
    fn test_newline_beats_whitespace() {
        let toks = lex("  \n\t");
        assert_eq!(toks[0].ty, TokenType::Whitespace);
        assert_eq!(toks[1].ty, TokenType::Newline);
        assert_eq!(toks[2].ty, TokenType::Whitespace);
    }

    #[test]
    fn test_assignment_beats_colon_punctuation() {
        let toks = lex(":= ::");
        assert_eq!(toks[0].ty, TokenType::Assignment);
        assert_eq!(toks[2], Token::new(TokenType::Punctuation, "::"));
    }

    #[test]
    fn test_multiword_join_phrases_are_single_tokens() {
        assert_eq!(
            lexemes("LEFT JOIN t")[0..1],
            ["LEFT JOIN".to_owned()]
        );
        let toks = nonblank("a LEFT OUTER JOIN b CROSS JOIN c NATURAL JOIN d JOIN e");
        let phrases: Vec<&str> = toks
            .iter()
            .filter(|t| t.ty == TokenType::Keyword)
            .map(|t| t.lexeme.as_str())
            .collect();
        assert_eq!(
            phrases,
            ["LEFT OUTER JOIN", "CROSS JOIN", "NATURAL JOIN", "JOIN"]
        );
    }

    #[test]
    fn test_group_by_and_order_by_fused() {
        let toks = nonblank("GROUP BY a ORDER   BY b");
        assert_eq!(toks[0], Token::new(TokenType::Keyword, "GROUP BY"));
        assert_eq!(toks[2].normalized(), "ORDER BY");
    }

    #[test]
    fn test_left_as_function_name_stays_a_name() {
        // LEFT(x, 3) is a call site, not a join qualifier.
        let toks = lex("LEFT(name, 3)");
        assert_eq!(toks[0], Token::new(TokenType::Name, "LEFT"));
    }

    #[test]
    fn test_create_or_replace_is_one_ddl_token() {
        let toks = nonblank("CREATE OR REPLACE VIEW v");
        assert_eq!(toks[0].ty, TokenType::Ddl);
        assert_eq!(toks[0].lexeme, "CREATE OR REPLACE");
        let toks = nonblank("CREATE TABLE t");
        assert_eq!(toks[0], Token::new(TokenType::Ddl, "CREATE"));
    }

    #[test]
    fn test_not_null_and_union_all_fused() {
        let toks = nonblank("x NOT NULL UNION ALL");
        assert_eq!(toks[1], Token::new(TokenType::Keyword, "NOT NULL"));
        assert_eq!(toks[2], Token::new(TokenType::Keyword, "UNION ALL"));
    }

    #[test]
    fn test_not_like_is_one_comparison_token() {
        let toks = nonblank("a NOT LIKE 'x%' b LIKE 'y' c NOT REGEXP 'z'");
        assert_eq!(toks[1], Token::new(TokenType::Comparison, "NOT LIKE"));
        assert_eq!(toks[4], Token::new(TokenType::Comparison, "LIKE"));
        assert_eq!(toks[7], Token::new(TokenType::Comparison, "NOT REGEXP"));
    }

    #[test]
    fn test_qualified_name_parts() {
        let toks = lex("u.id");
        assert_eq!(toks[0], Token::new(TokenType::Name, "u"));
        assert_eq!(toks[1], Token::new(TokenType::Punctuation, "."));
        assert_eq!(toks[2], Token::new(TokenType::Name, "id"));
    }

    #[test]
    fn test_function_name_before_paren_is_a_name() {
        // SUM would otherwise resolve through the keyword tables.
        let toks = lex("SUM(price)");
        assert_eq!(toks[0], Token::new(TokenType::Name, "SUM"));
        assert_eq!(toks[2], Token::new(TokenType::Name, "price"));
    }

    #[test]
    fn test_number_subtypes() {
        let toks = nonblank("42 -17 3.14 .5 1.5E-3 0xFF -0x1f");
        assert_eq!(toks[0].ty, TokenType::NumberInteger);
        assert_eq!(toks[1], Token::new(TokenType::NumberInteger, "-17"));
        assert_eq!(toks[2].ty, TokenType::NumberFloat);
        assert_eq!(toks[3], Token::new(TokenType::NumberFloat, ".5"));
        assert_eq!(toks[4], Token::new(TokenType::NumberFloat, "1.5E-3"));
        assert_eq!(toks[5].ty, TokenType::NumberHexadecimal);
        assert_eq!(toks[6], Token::new(TokenType::NumberHexadecimal, "-0x1f"));
    }

    #[test]
    fn test_digits_running_into_word_are_a_name() {
        let toks = lex("123abc");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].ty, TokenType::Name);
    }

    #[test]
    fn test_string_subtypes() {
        let toks = nonblank("'single' \"symbol\" 'it''s'");
        assert_eq!(toks[0], Token::new(TokenType::StringSingle, "'single'"));
        assert_eq!(toks[1], Token::new(TokenType::StringSymbol, "\"symbol\""));
        assert_eq!(toks[2], Token::new(TokenType::StringSingle, "'it''s'"));
    }

    #[test]
    fn test_backtick_and_bracket_names() {
        let toks = nonblank("`order` [select]");
        assert_eq!(toks[0], Token::new(TokenType::Name, "`order`"));
        assert_eq!(toks[1], Token::new(TokenType::Name, "[select]"));
    }

    #[test]
    fn test_dollar_quoted_literal() {
        let toks = lex("$$body$$");
        assert_eq!(toks[0], Token::new(TokenType::Literal, "$$body$$"));
        let toks = lex("$fn$it's$fn$");
        assert_eq!(toks[0], Token::new(TokenType::Literal, "$fn$it's$fn$"));
    }

    #[test]
    fn test_placeholders() {
        let toks = nonblank("? :name $1 %(key)s %s");
        for t in &toks {
            assert_eq!(t.ty, TokenType::Placeholder, "{t}");
        }
        assert_eq!(toks[1].lexeme, ":name");
        assert_eq!(toks[3].lexeme, "%(key)s");
    }

    #[test]
    fn test_placeholder_needs_nonword_predecessor() {
        // In a$b the `$b` belongs to the word, not a placeholder.
        let toks = lex("a$b");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].ty, TokenType::Name);
    }

    #[test]
    fn test_session_variables_are_names() {
        let toks = nonblank("@uservar ##globaltmp #localtmp");
        for t in &toks {
            assert_eq!(t.ty, TokenType::Name, "{t}");
        }
    }

    #[test]
    fn test_comparison_and_operator_runs() {
        let toks = nonblank("a <= b <> c != d + e");
        assert_eq!(toks[1], Token::new(TokenType::Comparison, "<="));
        assert_eq!(toks[3], Token::new(TokenType::Comparison, "<>"));
        assert_eq!(toks[5], Token::new(TokenType::Comparison, "!="));
        assert_eq!(toks[7], Token::new(TokenType::Operator, "+"));
    }

    #[test]
    fn test_tz_cast_phrase() {
        let toks = nonblank("AT TIME ZONE 'UTC'");
        assert_eq!(toks[0].ty, TokenType::TzCast);
        assert_eq!(toks[0].lexeme, "AT TIME ZONE 'UTC'");
    }

    #[test]
    fn test_unknown_symbol_reports_byte_offset() {
        let err = tokenize("SELECT §").unwrap_err();
        assert_eq!(err.offset, 7);
        assert_eq!("SELECT ".len(), 7);

        let err = tokenize("{").unwrap_err();
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn test_lexing_is_a_hard_stop() {
        // The error offset points into the middle of the input; nothing
        // after it is scanned.
        let err = tokenize("SELECT 1 { SELECT 2").unwrap_err();
        assert_eq!(err.offset, 9);
    }

    #[test]
    fn test_types_of_full_statement() {
        let ts = types("SELECT id FROM t WHERE x = 1;");
        assert_eq!(
            ts,
            vec![
                TokenType::Dml,
                TokenType::Whitespace,
                TokenType::Name,
                TokenType::Whitespace,
                TokenType::Keyword,
                TokenType::Whitespace,
                TokenType::Name,
                TokenType::Whitespace,
                TokenType::Keyword,
                TokenType::Whitespace,
                TokenType::Name,
                TokenType::Whitespace,
                TokenType::Comparison,
                TokenType::Whitespace,
                TokenType::NumberInteger,
                TokenType::Punctuation,
            ]
        );
    }

    mod properties {
        use proptest::prelude::*;

        use super::super::tokenize;

        proptest! {
            // Whatever the input, a successful lex must cover it exactly:
            // no gaps, no overlaps.
            #[test]
            fn lexemes_reconstruct_arbitrary_input(src in ".{0,200}") {
                if let Ok(tokens) = tokenize(&src) {
                    let joined: String =
                        tokens.iter().map(|t| t.lexeme.as_str()).collect();
                    prop_assert_eq!(joined, src);
                }
            }

            #[test]
            fn sql_shaped_input_always_lexes(
                src in "[a-zA-Z0-9_ ,;()*=<>.'\n-]{0,120}"
            ) {
                // Inputs over this alphabet can still fail (an unterminated
                // string), but a success must round-trip.
                if let Ok(tokens) = tokenize(&src) {
                    let joined: String =
                        tokens.iter().map(|t| t.lexeme.as_str()).collect();
                    prop_assert_eq!(joined, src);
                }
            }
        }
    }
}
