//! SQL Abstract Syntax Tree node types for sqlhawk.
//!
//! This crate defines the typed representation the parser produces for one
//! SQL statement. Ownership is strictly tree-shaped: a parent node owns its
//! children through `Box`/`Vec`, there are no back-references, and nodes are
//! immutable once built. Downstream consumers (feature extraction, the
//! classifier) only ever read the tree.

mod display;

// ---------------------------------------------------------------------------
// Top-level statement
// ---------------------------------------------------------------------------

/// A single parsed SQL statement.
///
/// This is the top-level AST node. The parser produces one `Statement` per
/// segmented, semicolon-delimited SQL command.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    // DML
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),

    // DDL
    CreateTable(CreateTableStatement),
    DropTable(DropTableStatement),
    CreateIndex(CreateIndexStatement),
    DropIndex(DropIndexStatement),
    AlterTable(AlterTableStatement),

    // Transaction control
    Transaction(TransactionStatement),
}

impl Statement {
    /// Short lowercase name of the statement kind, used as a feature key
    /// by downstream analysis.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Insert(_) => "insert",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::CreateTable(_) => "create_table",
            Self::DropTable(_) => "drop_table",
            Self::CreateIndex(_) => "create_index",
            Self::DropIndex(_) => "drop_index",
            Self::AlterTable(_) => "alter_table",
            Self::Transaction(_) => "transaction",
        }
    }

    /// Whether this statement is data definition (as opposed to data
    /// manipulation or transaction control).
    #[must_use]
    pub fn is_ddl(&self) -> bool {
        matches!(
            self,
            Self::CreateTable(_)
                | Self::DropTable(_)
                | Self::CreateIndex(_)
                | Self::DropIndex(_)
                | Self::AlterTable(_)
        )
    }
}

// ---------------------------------------------------------------------------
// SELECT
// ---------------------------------------------------------------------------

/// A SELECT statement with all of its optional clauses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectStatement {
    pub distinct: bool,
    /// Result columns: `Star`, bare expressions, or `Aliased` expressions.
    pub columns: Vec<Expr>,
    pub from: Option<FromClause>,
    pub where_clause: Option<WhereClause>,
    pub group_by: Option<GroupByClause>,
    pub having: Option<HavingClause>,
    pub order_by: Option<OrderByClause>,
    pub limit: Option<LimitClause>,
}

/// The FROM clause: one base table plus any number of joins.
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: String,
    pub alias: Option<String>,
    pub joins: Vec<JoinClause>,
}

/// One JOIN attached to a FROM clause.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub table: String,
    pub alias: Option<String>,
    /// Optional ON condition, a WHERE-style expression tree.
    pub on: Option<WhereClause>,
}

/// Join qualifier, as written in the source (OUTER collapses into the
/// directional variants).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
    Cross,
    Natural,
    Straight,
}

/// The WHERE clause (also reused for JOIN ... ON and HAVING conditions).
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub condition: Expr,
}

/// GROUP BY: the grouping expressions in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupByClause {
    pub columns: Vec<Expr>,
}

/// HAVING: a post-aggregation filter condition.
#[derive(Debug, Clone, PartialEq)]
pub struct HavingClause {
    pub condition: Expr,
}

/// ORDER BY: ordered list of sort terms.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
    pub terms: Vec<OrderingTerm>,
}

/// One ORDER BY term: an expression plus an optional explicit direction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingTerm {
    pub expr: Expr,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// LIMIT with an optional OFFSET. The offset is parsed as its own literal
/// and defaults to 0 when the keyword is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitClause {
    pub count: u64,
    pub offset: u64,
}

// ---------------------------------------------------------------------------
// INSERT / UPDATE / DELETE
// ---------------------------------------------------------------------------

/// An INSERT statement. The row source is either explicit VALUES tuples or
/// a nested SELECT.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub table: String,
    /// Explicit target column list, empty when omitted.
    pub columns: Vec<String>,
    pub source: InsertSource,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InsertSource {
    /// `VALUES (..), (..)`, one inner Vec per row.
    Values(Vec<Vec<Expr>>),
    /// `INSERT INTO t ... SELECT ...`
    Select(Box<SelectStatement>),
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<WhereClause>,
}

/// One `column = expr` assignment in an UPDATE's SET list.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Expr,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    pub table: String,
    pub where_clause: Option<WhereClause>,
}

// ---------------------------------------------------------------------------
// DDL
// ---------------------------------------------------------------------------

/// CREATE TABLE with its column definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    pub table: String,
    pub columns: Vec<ColumnDef>,
}

/// One column definition in CREATE TABLE or ALTER TABLE ADD/MODIFY.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub type_name: TypeName,
    pub not_null: bool,
    pub primary_key: bool,
    pub unique: bool,
}

/// A column type name as written in DDL (e.g. `VARCHAR(255)`, `INT`).
///
/// Size arguments are kept as strings; the analysis layer never does
/// arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    pub name: String,
    pub arg1: Option<String>,
    pub arg2: Option<String>,
}

impl TypeName {
    /// A bare type name without size arguments.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arg1: None,
            arg2: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropTableStatement {
    pub table: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndexStatement {
    pub name: String,
    pub table: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropIndexStatement {
    pub name: String,
}

/// ALTER TABLE with one or more comma-separated actions.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTableStatement {
    pub table: String,
    pub actions: Vec<AlterAction>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlterAction {
    AddColumn(ColumnDef),
    DropColumn(String),
    ModifyColumn(ColumnDef),
    RenameColumn { from: String, to: String },
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

/// BEGIN / START TRANSACTION / COMMIT / ROLLBACK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionStatement {
    pub kind: TransactionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Begin,
    Commit,
    Rollback,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

/// An expression tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or bare identifier, possibly `table.column`-qualified.
    Identifier(ColumnRef),
    /// A literal value.
    Literal(Literal),
    /// A binary operation, including AND/OR and comparisons.
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// A unary prefix operation (`NOT expr`, `-expr`).
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// A function call: `name([DISTINCT] arg, ...)`.
    FunctionCall {
        name: String,
        distinct: bool,
        args: Vec<Expr>,
    },
    /// The `*` projection.
    Star,
    /// A parenthesized `(SELECT ...)` subquery.
    Subquery(Box<SelectStatement>),
    /// `expr [NOT] BETWEEN low AND high`.
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    /// `expr [NOT] IN (item, ...)`; a subquery appears as one item.
    InList {
        expr: Box<Expr>,
        negated: bool,
        list: Vec<Expr>,
    },
    /// `expr [NOT] LIKE pattern`.
    Like {
        expr: Box<Expr>,
        negated: bool,
        pattern: Box<Expr>,
    },
    /// `CASE [operand] WHEN .. THEN .. [ELSE ..] END`.
    Case {
        operand: Option<Box<Expr>>,
        branches: Vec<CaseBranch>,
        else_expr: Option<Box<Expr>>,
    },
    /// `expr AS alias` (or a bare trailing alias) in a column list.
    Aliased { expr: Box<Expr>, alias: String },
}

/// One WHEN/THEN arm of a CASE expression.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseBranch {
    pub condition: Expr,
    pub result: Expr,
}

/// A reference to a column, possibly qualified with a table name or alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub column: String,
}

impl ColumnRef {
    /// Create an unqualified column reference.
    #[must_use]
    pub fn bare(column: impl Into<String>) -> Self {
        Self {
            table: None,
            column: column.into(),
        }
    }

    /// Create a table-qualified column reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            column: column.into(),
        }
    }
}

/// A literal value in SQL source.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    /// String literal with the quotes stripped.
    String(String),
    Boolean(bool),
    Null,
}

/// Binary operators, lowest-precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Neg,
}

impl Expr {
    /// Box-wrapping constructor for binary nodes; keeps parser code terse.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}
