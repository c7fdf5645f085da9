// Dialect keyword tables mapping uppercase words to token types.
//
// Resolution probes the tables in a fixed order (base, common, Oracle,
// PL/pgSQL, Hive, MS Access) and the first hit wins. The order is a
// contract: a word present in several tables must classify identically no
// matter which dialects a caller cares about. Keyword lookup uses
// compile-time perfect-hash maps, so the tables are immutable, shared
// process-wide, and need no locking.

use phf::phf_map;

use crate::token::TokenType;

/// Classify a word through the dialect tables, in precedence order.
/// Words found in no table are names.
#[must_use]
pub fn resolve_keyword(word: &str) -> TokenType {
    let upper = word.to_uppercase();
    for table in [
        &KEYWORDS,
        &KEYWORDS_COMMON,
        &KEYWORDS_ORACLE,
        &KEYWORDS_PLPGSQL,
        &KEYWORDS_HQL,
        &KEYWORDS_MSACCESS,
    ] {
        if let Some(&ty) = table.get(upper.as_str()) {
            return ty;
        }
    }
    TokenType::Name
}

/// Base table: SQL standard keywords plus widely shared extensions.
pub static KEYWORDS: phf::Map<&'static str, TokenType> = phf_map! {
    "ABORT" => TokenType::Keyword,
    "ABS" => TokenType::Keyword,
    "ABSOLUTE" => TokenType::Keyword,
    "ACCESS" => TokenType::Keyword,
    "ADA" => TokenType::Keyword,
    "ADD" => TokenType::Keyword,
    "ADMIN" => TokenType::Keyword,
    "AFTER" => TokenType::Keyword,
    "AGGREGATE" => TokenType::Keyword,
    "ALIAS" => TokenType::Keyword,
    "ALL" => TokenType::Keyword,
    "ALLOCATE" => TokenType::Keyword,
    "ANALYSE" => TokenType::Keyword,
    "ANALYZE" => TokenType::Keyword,
    "ANY" => TokenType::Keyword,
    "ARRAYLEN" => TokenType::Keyword,
    "ARE" => TokenType::Keyword,
    "ASC" => TokenType::OrderKeyword,
    "ASENSITIVE" => TokenType::Keyword,
    "ASSERTION" => TokenType::Keyword,
    "ASSIGNMENT" => TokenType::Keyword,
    "ASYMMETRIC" => TokenType::Keyword,
    "AT" => TokenType::Keyword,
    "ATOMIC" => TokenType::Keyword,
    "AUDIT" => TokenType::Keyword,
    "AUTHORIZATION" => TokenType::Keyword,
    "AUTO_INCREMENT" => TokenType::Keyword,
    "AVG" => TokenType::Keyword,

    "BACKWARD" => TokenType::Keyword,
    "BEFORE" => TokenType::Keyword,
    "BEGIN" => TokenType::Keyword,
    "BETWEEN" => TokenType::Keyword,
    "BITVAR" => TokenType::Keyword,
    "BIT_LENGTH" => TokenType::Keyword,
    "BOTH" => TokenType::Keyword,
    "BREADTH" => TokenType::Keyword,

    "CACHE" => TokenType::Keyword,
    "CALL" => TokenType::Keyword,
    "CALLED" => TokenType::Keyword,
    "CARDINALITY" => TokenType::Keyword,
    "CASCADE" => TokenType::Keyword,
    "CASCADED" => TokenType::Keyword,
    "CAST" => TokenType::Keyword,
    "CATALOG" => TokenType::Keyword,
    "CATALOG_NAME" => TokenType::Keyword,
    "CHAIN" => TokenType::Keyword,
    "CHARACTERISTICS" => TokenType::Keyword,
    "CHARACTER_LENGTH" => TokenType::Keyword,
    "CHARACTER_SET_CATALOG" => TokenType::Keyword,
    "CHARACTER_SET_NAME" => TokenType::Keyword,
    "CHARACTER_SET_SCHEMA" => TokenType::Keyword,
    "CHAR_LENGTH" => TokenType::Keyword,
    "CHARSET" => TokenType::Keyword,
    "CHECK" => TokenType::Keyword,
    "CHECKED" => TokenType::Keyword,
    "CHECKPOINT" => TokenType::Keyword,
    "CLASS" => TokenType::Keyword,
    "CLASS_ORIGIN" => TokenType::Keyword,
    "CLOB" => TokenType::Keyword,
    "CLOSE" => TokenType::Keyword,
    "CLUSTER" => TokenType::Keyword,
    "COALESCE" => TokenType::Keyword,
    "COBOL" => TokenType::Keyword,
    "COLLATE" => TokenType::Keyword,
    "COLLATION" => TokenType::Keyword,
    "COLLATION_CATALOG" => TokenType::Keyword,
    "COLLATION_NAME" => TokenType::Keyword,
    "COLLATION_SCHEMA" => TokenType::Keyword,
    "COLLECT" => TokenType::Keyword,
    "COLUMN" => TokenType::Keyword,
    "COLUMN_NAME" => TokenType::Keyword,
    "COMPRESS" => TokenType::Keyword,
    "COMMAND_FUNCTION" => TokenType::Keyword,
    "COMMAND_FUNCTION_CODE" => TokenType::Keyword,
    "COMMENT" => TokenType::Keyword,
    "COMMIT" => TokenType::Dml,
    "COMMITTED" => TokenType::Keyword,
    "COMPLETION" => TokenType::Keyword,
    "CONCURRENTLY" => TokenType::Keyword,
    "CONDITION_NUMBER" => TokenType::Keyword,
    "CONNECT" => TokenType::Keyword,
    "CONNECTION" => TokenType::Keyword,
    "CONNECTION_NAME" => TokenType::Keyword,
    "CONSTRAINT" => TokenType::Keyword,
    "CONSTRAINTS" => TokenType::Keyword,
    "CONSTRAINT_CATALOG" => TokenType::Keyword,
    "CONSTRAINT_NAME" => TokenType::Keyword,
    "CONSTRAINT_SCHEMA" => TokenType::Keyword,
    "CONSTRUCTOR" => TokenType::Keyword,
    "CONTAINS" => TokenType::Keyword,
    "CONTINUE" => TokenType::Keyword,
    "CONVERSION" => TokenType::Keyword,
    "CONVERT" => TokenType::Keyword,
    "COPY" => TokenType::Keyword,
    "CORRESPONDING" => TokenType::Keyword,
    "COUNT" => TokenType::Keyword,
    "CREATEDB" => TokenType::Keyword,
    "CREATEUSER" => TokenType::Keyword,
    "CROSS" => TokenType::Keyword,
    "CUBE" => TokenType::Keyword,
    "CURRENT" => TokenType::Keyword,
    "CURRENT_DATE" => TokenType::Keyword,
    "CURRENT_PATH" => TokenType::Keyword,
    "CURRENT_ROLE" => TokenType::Keyword,
    "CURRENT_TIME" => TokenType::Keyword,
    "CURRENT_TIMESTAMP" => TokenType::Keyword,
    "CURRENT_USER" => TokenType::Keyword,
    "CURSOR" => TokenType::Keyword,
    "CURSOR_NAME" => TokenType::Keyword,
    "CYCLE" => TokenType::Keyword,

    "DATA" => TokenType::Keyword,
    "DATABASE" => TokenType::Keyword,
    "DATETIME_INTERVAL_CODE" => TokenType::Keyword,
    "DATETIME_INTERVAL_PRECISION" => TokenType::Keyword,
    "DAY" => TokenType::Keyword,
    "DEALLOCATE" => TokenType::Keyword,
    "DECLARE" => TokenType::Keyword,
    "DEFAULT" => TokenType::Keyword,
    "DEFAULTS" => TokenType::Keyword,
    "DEFERRABLE" => TokenType::Keyword,
    "DEFERRED" => TokenType::Keyword,
    "DEFINED" => TokenType::Keyword,
    "DEFINER" => TokenType::Keyword,
    "DELIMITER" => TokenType::Keyword,
    "DELIMITERS" => TokenType::Keyword,
    "DEREF" => TokenType::Keyword,
    "DESC" => TokenType::OrderKeyword,
    "DESCRIBE" => TokenType::Keyword,
    "DESCRIPTOR" => TokenType::Keyword,
    "DESTROY" => TokenType::Keyword,
    "DESTRUCTOR" => TokenType::Keyword,
    "DETERMINISTIC" => TokenType::Keyword,
    "DIAGNOSTICS" => TokenType::Keyword,
    "DICTIONARY" => TokenType::Keyword,
    "DISABLE" => TokenType::Keyword,
    "DISCONNECT" => TokenType::Keyword,
    "DISPATCH" => TokenType::Keyword,
    "DIV" => TokenType::Operator,
    "DO" => TokenType::Keyword,
    "DOMAIN" => TokenType::Keyword,
    "DYNAMIC" => TokenType::Keyword,
    "DYNAMIC_FUNCTION" => TokenType::Keyword,
    "DYNAMIC_FUNCTION_CODE" => TokenType::Keyword,

    "EACH" => TokenType::Keyword,
    "ENABLE" => TokenType::Keyword,
    "ENCODING" => TokenType::Keyword,
    "ENCRYPTED" => TokenType::Keyword,
    "END-EXEC" => TokenType::Keyword,
    "ENGINE" => TokenType::Keyword,
    "EQUALS" => TokenType::Keyword,
    "ESCAPE" => TokenType::Keyword,
    "EVERY" => TokenType::Keyword,
    "EXCEPT" => TokenType::Keyword,
    "EXCEPTION" => TokenType::Keyword,
    "EXCLUDING" => TokenType::Keyword,
    "EXCLUSIVE" => TokenType::Keyword,
    "EXEC" => TokenType::Keyword,
    "EXECUTE" => TokenType::Keyword,
    "EXISTING" => TokenType::Keyword,
    "EXISTS" => TokenType::Keyword,
    "EXPLAIN" => TokenType::Keyword,
    "EXTERNAL" => TokenType::Keyword,
    "EXTRACT" => TokenType::Keyword,

    "FALSE" => TokenType::Keyword,
    "FETCH" => TokenType::Keyword,
    "FILE" => TokenType::Keyword,
    "FINAL" => TokenType::Keyword,
    "FIRST" => TokenType::Keyword,
    "FORCE" => TokenType::Keyword,
    "FOREACH" => TokenType::Keyword,
    "FOREIGN" => TokenType::Keyword,
    "FORTRAN" => TokenType::Keyword,
    "FORWARD" => TokenType::Keyword,
    "FOUND" => TokenType::Keyword,
    "FREE" => TokenType::Keyword,
    "FREEZE" => TokenType::Keyword,
    "FULL" => TokenType::Keyword,
    "FUNCTION" => TokenType::Keyword,

    "GENERAL" => TokenType::Keyword,
    "GENERATED" => TokenType::Keyword,
    "GET" => TokenType::Keyword,
    "GLOBAL" => TokenType::Keyword,
    "GO" => TokenType::Keyword,
    "GOTO" => TokenType::Keyword,
    "GRANT" => TokenType::Keyword,
    "GRANTED" => TokenType::Keyword,
    "GROUPING" => TokenType::Keyword,

    "HAVING" => TokenType::Keyword,
    "HIERARCHY" => TokenType::Keyword,
    "HOLD" => TokenType::Keyword,
    "HOUR" => TokenType::Keyword,
    "HOST" => TokenType::Keyword,

    "IDENTIFIED" => TokenType::Keyword,
    "IDENTITY" => TokenType::Keyword,
    "IGNORE" => TokenType::Keyword,
    "ILIKE" => TokenType::Keyword,
    "IMMEDIATE" => TokenType::Keyword,
    "IMMUTABLE" => TokenType::Keyword,

    "IMPLEMENTATION" => TokenType::Keyword,
    "IMPLICIT" => TokenType::Keyword,
    "INCLUDING" => TokenType::Keyword,
    "INCREMENT" => TokenType::Keyword,
    "INDEX" => TokenType::Keyword,

    "INDICATOR" => TokenType::Keyword,
    "INFIX" => TokenType::Keyword,
    "INHERITS" => TokenType::Keyword,
    "INITIAL" => TokenType::Keyword,
    "INITIALIZE" => TokenType::Keyword,
    "INITIALLY" => TokenType::Keyword,
    "INOUT" => TokenType::Keyword,
    "INPUT" => TokenType::Keyword,
    "INSENSITIVE" => TokenType::Keyword,
    "INSTANTIABLE" => TokenType::Keyword,
    "INSTEAD" => TokenType::Keyword,
    "INTERSECT" => TokenType::Keyword,
    "INTO" => TokenType::Keyword,
    "INVOKER" => TokenType::Keyword,
    "IS" => TokenType::Keyword,
    "ISNULL" => TokenType::Keyword,
    "ISOLATION" => TokenType::Keyword,
    "ITERATE" => TokenType::Keyword,

    "KEY" => TokenType::Keyword,
    "KEY_MEMBER" => TokenType::Keyword,
    "KEY_TYPE" => TokenType::Keyword,

    "LANCOMPILER" => TokenType::Keyword,
    "LANGUAGE" => TokenType::Keyword,
    "LARGE" => TokenType::Keyword,
    "LAST" => TokenType::Keyword,
    "LATERAL" => TokenType::Keyword,
    "LEADING" => TokenType::Keyword,
    "LENGTH" => TokenType::Keyword,
    "LESS" => TokenType::Keyword,
    "LEVEL" => TokenType::Keyword,
    "LIMIT" => TokenType::Keyword,
    "LISTEN" => TokenType::Keyword,
    "LOAD" => TokenType::Keyword,
    "LOCAL" => TokenType::Keyword,
    "LOCALTIME" => TokenType::Keyword,
    "LOCALTIMESTAMP" => TokenType::Keyword,
    "LOCATION" => TokenType::Keyword,
    "LOCATOR" => TokenType::Keyword,
    "LOCK" => TokenType::Keyword,
    "LOWER" => TokenType::Keyword,

    "MAP" => TokenType::Keyword,
    "MATCH" => TokenType::Keyword,
    "MAXEXTENTS" => TokenType::Keyword,
    "MAXVALUE" => TokenType::Keyword,
    "MESSAGE_LENGTH" => TokenType::Keyword,
    "MESSAGE_OCTET_LENGTH" => TokenType::Keyword,
    "MESSAGE_TEXT" => TokenType::Keyword,
    "METHOD" => TokenType::Keyword,
    "MINUTE" => TokenType::Keyword,
    "MINUS" => TokenType::Keyword,
    "MINVALUE" => TokenType::Keyword,
    "MOD" => TokenType::Keyword,
    "MODE" => TokenType::Keyword,
    "MODIFIES" => TokenType::Keyword,
    "MODIFY" => TokenType::Keyword,
    "MONTH" => TokenType::Keyword,
    "MORE" => TokenType::Keyword,
    "MOVE" => TokenType::Keyword,
    "MUMPS" => TokenType::Keyword,

    "NAMES" => TokenType::Keyword,
    "NATIONAL" => TokenType::Keyword,
    "NATURAL" => TokenType::Keyword,
    "NCHAR" => TokenType::Keyword,
    "NCLOB" => TokenType::Keyword,
    "NEW" => TokenType::Keyword,
    "NEXT" => TokenType::Keyword,
    "NO" => TokenType::Keyword,
    "NOAUDIT" => TokenType::Keyword,
    "NOCOMPRESS" => TokenType::Keyword,
    "NOCREATEDB" => TokenType::Keyword,
    "NOCREATEUSER" => TokenType::Keyword,
    "NONE" => TokenType::Keyword,
    "NOT" => TokenType::Keyword,
    "NOTFOUND" => TokenType::Keyword,
    "NOTHING" => TokenType::Keyword,
    "NOTIFY" => TokenType::Keyword,
    "NOTNULL" => TokenType::Keyword,
    "NOWAIT" => TokenType::Keyword,
    "NULL" => TokenType::Keyword,
    "NULLABLE" => TokenType::Keyword,
    "NULLIF" => TokenType::Keyword,

    "OBJECT" => TokenType::Keyword,
    "OCTET_LENGTH" => TokenType::Keyword,
    "OF" => TokenType::Keyword,
    "OFF" => TokenType::Keyword,
    "OFFLINE" => TokenType::Keyword,
    "OFFSET" => TokenType::Keyword,
    "OIDS" => TokenType::Keyword,
    "OLD" => TokenType::Keyword,
    "ONLINE" => TokenType::Keyword,
    "ONLY" => TokenType::Keyword,
    "OPEN" => TokenType::Keyword,
    "OPERATION" => TokenType::Keyword,
    "OPERATOR" => TokenType::Keyword,
    "OPTION" => TokenType::Keyword,
    "OPTIONS" => TokenType::Keyword,
    "ORDINALITY" => TokenType::Keyword,
    "OUT" => TokenType::Keyword,
    "OUTPUT" => TokenType::Keyword,
    "OVERLAPS" => TokenType::Keyword,
    "OVERLAY" => TokenType::Keyword,
    "OVERRIDING" => TokenType::Keyword,
    "OWNER" => TokenType::Keyword,

    "QUARTER" => TokenType::Keyword,

    "PAD" => TokenType::Keyword,
    "PARAMETER" => TokenType::Keyword,
    "PARAMETERS" => TokenType::Keyword,
    "PARAMETER_MODE" => TokenType::Keyword,
    "PARAMETER_NAME" => TokenType::Keyword,
    "PARAMETER_ORDINAL_POSITION" => TokenType::Keyword,
    "PARAMETER_SPECIFIC_CATALOG" => TokenType::Keyword,
    "PARAMETER_SPECIFIC_NAME" => TokenType::Keyword,
    "PARAMETER_SPECIFIC_SCHEMA" => TokenType::Keyword,
    "PARTIAL" => TokenType::Keyword,
    "PASCAL" => TokenType::Keyword,
    "PCTFREE" => TokenType::Keyword,
    "PENDANT" => TokenType::Keyword,
    "PLACING" => TokenType::Keyword,
    "PLI" => TokenType::Keyword,
    "POSITION" => TokenType::Keyword,
    "POSTFIX" => TokenType::Keyword,
    "PRECISION" => TokenType::Keyword,
    "PREFIX" => TokenType::Keyword,
    "PREORDER" => TokenType::Keyword,
    "PREPARE" => TokenType::Keyword,
    "PRESERVE" => TokenType::Keyword,
    "PRIMARY" => TokenType::Keyword,
    "PRIOR" => TokenType::Keyword,
    "PRIVILEGES" => TokenType::Keyword,
    "PROCEDURAL" => TokenType::Keyword,
    "PROCEDURE" => TokenType::Keyword,
    "PUBLIC" => TokenType::Keyword,

    "RAISE" => TokenType::Keyword,
    "RAW" => TokenType::Keyword,
    "READ" => TokenType::Keyword,
    "READS" => TokenType::Keyword,
    "RECHECK" => TokenType::Keyword,
    "RECURSIVE" => TokenType::Keyword,
    "REF" => TokenType::Keyword,
    "REFERENCES" => TokenType::Keyword,
    "REFERENCING" => TokenType::Keyword,
    "REINDEX" => TokenType::Keyword,
    "RELATIVE" => TokenType::Keyword,
    "RENAME" => TokenType::Keyword,
    "REPEATABLE" => TokenType::Keyword,
    "RESET" => TokenType::Keyword,
    "RESOURCE" => TokenType::Keyword,
    "RESTART" => TokenType::Keyword,
    "RESTRICT" => TokenType::Keyword,
    "RESULT" => TokenType::Keyword,
    "RETURN" => TokenType::Keyword,
    "RETURNED_LENGTH" => TokenType::Keyword,
    "RETURNED_OCTET_LENGTH" => TokenType::Keyword,
    "RETURNED_SQLSTATE" => TokenType::Keyword,
    "RETURNING" => TokenType::Keyword,
    "RETURNS" => TokenType::Keyword,
    "REVOKE" => TokenType::Keyword,
    "RIGHT" => TokenType::Keyword,
    "ROLE" => TokenType::Keyword,
    "ROLLBACK" => TokenType::Dml,
    "ROLLUP" => TokenType::Keyword,
    "ROUTINE" => TokenType::Keyword,
    "ROUTINE_CATALOG" => TokenType::Keyword,
    "ROUTINE_NAME" => TokenType::Keyword,
    "ROUTINE_SCHEMA" => TokenType::Keyword,
    "ROW" => TokenType::Keyword,
    "ROWS" => TokenType::Keyword,
    "ROW_COUNT" => TokenType::Keyword,
    "RULE" => TokenType::Keyword,

    "SAVE_POINT" => TokenType::Keyword,
    "SCALE" => TokenType::Keyword,
    "SCHEMA" => TokenType::Keyword,
    "SCHEMA_NAME" => TokenType::Keyword,
    "SCOPE" => TokenType::Keyword,
    "SCROLL" => TokenType::Keyword,
    "SEARCH" => TokenType::Keyword,
    "SECOND" => TokenType::Keyword,
    "SECURITY" => TokenType::Keyword,
    "SELF" => TokenType::Keyword,
    "SENSITIVE" => TokenType::Keyword,
    "SEQUENCE" => TokenType::Keyword,
    "SERIALIZABLE" => TokenType::Keyword,
    "SERVER_NAME" => TokenType::Keyword,
    "SESSION" => TokenType::Keyword,
    "SESSION_USER" => TokenType::Keyword,
    "SETOF" => TokenType::Keyword,
    "SETS" => TokenType::Keyword,
    "SHARE" => TokenType::Keyword,
    "SHOW" => TokenType::Keyword,
    "SIMILAR" => TokenType::Keyword,
    "SIMPLE" => TokenType::Keyword,
    "SIZE" => TokenType::Keyword,
    "SOME" => TokenType::Keyword,
    "SOURCE" => TokenType::Keyword,
    "SPACE" => TokenType::Keyword,
    "SPECIFIC" => TokenType::Keyword,
    "SPECIFICTYPE" => TokenType::Keyword,
    "SPECIFIC_NAME" => TokenType::Keyword,
    "SQL" => TokenType::Keyword,
    "SQLBUF" => TokenType::Keyword,
    "SQLCODE" => TokenType::Keyword,
    "SQLERROR" => TokenType::Keyword,
    "SQLEXCEPTION" => TokenType::Keyword,
    "SQLSTATE" => TokenType::Keyword,
    "SQLWARNING" => TokenType::Keyword,
    "STABLE" => TokenType::Keyword,
    "START" => TokenType::Dml,
    "STATEMENT" => TokenType::Keyword,
    "STATIC" => TokenType::Keyword,
    "STATISTICS" => TokenType::Keyword,
    "STDIN" => TokenType::Keyword,
    "STDOUT" => TokenType::Keyword,
    "STORAGE" => TokenType::Keyword,
    "STRICT" => TokenType::Keyword,
    "STRUCTURE" => TokenType::Keyword,
    "STYPE" => TokenType::Keyword,
    "SUBCLASS_ORIGIN" => TokenType::Keyword,
    "SUBLIST" => TokenType::Keyword,
    "SUBSTRING" => TokenType::Keyword,
    "SUCCESSFUL" => TokenType::Keyword,
    "SUM" => TokenType::Keyword,
    "SYMMETRIC" => TokenType::Keyword,
    "SYNONYM" => TokenType::Keyword,
    "SYSID" => TokenType::Keyword,
    "SYSTEM" => TokenType::Keyword,
    "SYSTEM_USER" => TokenType::Keyword,

    "TABLE" => TokenType::Keyword,
    "TABLE_NAME" => TokenType::Keyword,
    "TEMP" => TokenType::Keyword,
    "TEMPLATE" => TokenType::Keyword,
    "TEMPORARY" => TokenType::Keyword,
    "TERMINATE" => TokenType::Keyword,
    "THAN" => TokenType::Keyword,
    "TIMESTAMP" => TokenType::Keyword,
    "TIMEZONE_HOUR" => TokenType::Keyword,
    "TIMEZONE_MINUTE" => TokenType::Keyword,
    "TO" => TokenType::Keyword,
    "TOAST" => TokenType::Keyword,
    "TRAILING" => TokenType::Keyword,
    "TRANSATION" => TokenType::Keyword,
    "TRANSACTIONS_COMMITTED" => TokenType::Keyword,
    "TRANSACTIONS_ROLLED_BACK" => TokenType::Keyword,
    "TRANSATION_ACTIVE" => TokenType::Keyword,
    "TRANSFORM" => TokenType::Keyword,
    "TRANSFORMS" => TokenType::Keyword,
    "TRANSLATE" => TokenType::Keyword,
    "TRANSLATION" => TokenType::Keyword,
    "TREAT" => TokenType::Keyword,
    "TRIGGER" => TokenType::Keyword,
    "TRIGGER_CATALOG" => TokenType::Keyword,
    "TRIGGER_NAME" => TokenType::Keyword,
    "TRIGGER_SCHEMA" => TokenType::Keyword,
    "TRIM" => TokenType::Keyword,
    "TRUE" => TokenType::Keyword,
    "TRUNCATE" => TokenType::Keyword,
    "TRUSTED" => TokenType::Keyword,
    "TYPE" => TokenType::Keyword,

    "UID" => TokenType::Keyword,
    "UNCOMMITTED" => TokenType::Keyword,
    "UNDER" => TokenType::Keyword,
    "UNENCRYPTED" => TokenType::Keyword,
    "UNION" => TokenType::Keyword,
    "UNIQUE" => TokenType::Keyword,
    "UNKNOWN" => TokenType::Keyword,
    "UNLISTEN" => TokenType::Keyword,
    "UNNAMED" => TokenType::Keyword,
    "UNNEST" => TokenType::Keyword,
    "UNTIL" => TokenType::Keyword,
    "UPPER" => TokenType::Keyword,
    "USAGE" => TokenType::Keyword,
    "USE" => TokenType::Keyword,
    "USER" => TokenType::Keyword,
    "USER_DEFINED_TYPE_CATALOG" => TokenType::Keyword,
    "USER_DEFINED_TYPE_NAME" => TokenType::Keyword,
    "USER_DEFINED_TYPE_SCHEMA" => TokenType::Keyword,
    "USING" => TokenType::Keyword,

    "VACUUM" => TokenType::Keyword,
    "VALID" => TokenType::Keyword,
    "VALIDATE" => TokenType::Keyword,
    "VALIDATOR" => TokenType::Keyword,
    "VALUES" => TokenType::Keyword,
    "VARIABLE" => TokenType::Keyword,
    "VERBOSE" => TokenType::Keyword,
    "VERSION" => TokenType::Keyword,
    "VIEW" => TokenType::Keyword,
    "VOLATILE" => TokenType::Keyword,

    "WEEK" => TokenType::Keyword,
    "WHENEVER" => TokenType::Keyword,
    "WITH" => TokenType::Cte,
    "WITHOUT" => TokenType::Keyword,
    "WORK" => TokenType::Keyword,
    "WRITE" => TokenType::Keyword,

    "YEAR" => TokenType::Keyword,

    "ZONE" => TokenType::Keyword,

    // Name.Builtin
    "ARRAY" => TokenType::Builtin,
    "BIGINT" => TokenType::Builtin,
    "BINARY" => TokenType::Builtin,
    "BIT" => TokenType::Builtin,
    "BLOB" => TokenType::Builtin,
    "BOOLEAN" => TokenType::Builtin,
    "CHAR" => TokenType::Builtin,
    "CHARACTER" => TokenType::Builtin,
    "DATE" => TokenType::Builtin,
    "DEC" => TokenType::Builtin,
    "DECIMAL" => TokenType::Builtin,
    "FILE_TYPE" => TokenType::Builtin,
    "FLOAT" => TokenType::Builtin,
    "INT" => TokenType::Builtin,
    "INT8" => TokenType::Builtin,
    "INTEGER" => TokenType::Builtin,
    "INTERVAL" => TokenType::Builtin,
    "LONG" => TokenType::Builtin,
    "NATURALN" => TokenType::Builtin,
    "NVARCHAR" => TokenType::Builtin,
    "NUMBER" => TokenType::Builtin,
    "NUMERIC" => TokenType::Builtin,
    "PLS_INTEGER" => TokenType::Builtin,
    "POSITIVE" => TokenType::Builtin,
    "POSITIVEN" => TokenType::Builtin,
    "REAL" => TokenType::Builtin,
    "ROWID" => TokenType::Builtin,
    "ROWLABEL" => TokenType::Builtin,
    "ROWNUM" => TokenType::Builtin,
    "SERIAL" => TokenType::Builtin,
    "SERIAL8" => TokenType::Builtin,
    "SIGNED" => TokenType::Builtin,
    "SIGNTYPE" => TokenType::Builtin,
    "SIMPLE_DOUBLE" => TokenType::Builtin,
    "SIMPLE_FLOAT" => TokenType::Builtin,
    "SIMPLE_INTEGER" => TokenType::Builtin,
    "SMALLINT" => TokenType::Builtin,
    "SYS_REFCURSOR" => TokenType::Builtin,
    "SYSDATE" => TokenType::Name,
    "TEXT" => TokenType::Builtin,
    "TINYINT" => TokenType::Builtin,
    "UNSIGNED" => TokenType::Builtin,
    "UROWID" => TokenType::Builtin,
    "UTL_FILE" => TokenType::Builtin,
    "VARCHAR" => TokenType::Builtin,
    "VARCHAR2" => TokenType::Builtin,
    "VARYING" => TokenType::Builtin,
};

/// Common table: the words virtually every dialect agrees on, including the
/// statement-starting DML/DDL classifications.
pub static KEYWORDS_COMMON: phf::Map<&'static str, TokenType> = phf_map! {
    "SELECT" => TokenType::Dml,
    "INSERT" => TokenType::Dml,
    "DELETE" => TokenType::Dml,
    "UPDATE" => TokenType::Dml,
    "UPSERT" => TokenType::Dml,
    "REPLACE" => TokenType::Dml,
    "MERGE" => TokenType::Dml,
    "DROP" => TokenType::Ddl,
    "CREATE" => TokenType::Ddl,
    "ALTER" => TokenType::Ddl,

    "WHERE" => TokenType::Keyword,
    "FROM" => TokenType::Keyword,
    "INNER" => TokenType::Keyword,
    "JOIN" => TokenType::Keyword,
    "STRAIGHT_JOIN" => TokenType::Keyword,
    "AND" => TokenType::Keyword,
    "OR" => TokenType::Keyword,
    "LIKE" => TokenType::Keyword,
    "ON" => TokenType::Keyword,
    "IN" => TokenType::Keyword,
    "SET" => TokenType::Keyword,

    "BY" => TokenType::Keyword,
    "GROUP" => TokenType::Keyword,
    "ORDER" => TokenType::Keyword,
    "LEFT" => TokenType::Keyword,
    "OUTER" => TokenType::Keyword,
    "FULL" => TokenType::Keyword,

    "IF" => TokenType::Keyword,
    "END" => TokenType::Keyword,
    "THEN" => TokenType::Keyword,
    "LOOP" => TokenType::Keyword,
    "AS" => TokenType::Keyword,
    "ELSE" => TokenType::Keyword,
    "FOR" => TokenType::Keyword,
    "WHILE" => TokenType::Keyword,

    "CASE" => TokenType::Keyword,
    "WHEN" => TokenType::Keyword,
    "MIN" => TokenType::Keyword,
    "MAX" => TokenType::Keyword,
    "DISTINCT" => TokenType::Keyword,
};

/// Oracle-specific keywords.
pub static KEYWORDS_ORACLE: phf::Map<&'static str, TokenType> = phf_map! {
    "ARCHIVE" => TokenType::Keyword,
    "ARCHIVELOG" => TokenType::Keyword,

    "BACKUP" => TokenType::Keyword,
    "BECOME" => TokenType::Keyword,
    "BLOCK" => TokenType::Keyword,
    "BODY" => TokenType::Keyword,

    "CANCEL" => TokenType::Keyword,
    "CHANGE" => TokenType::Keyword,
    "COMPILE" => TokenType::Keyword,
    "CONTENTS" => TokenType::Keyword,
    "CONTROLFILE" => TokenType::Keyword,

    "DATAFILE" => TokenType::Keyword,
    "DBA" => TokenType::Keyword,
    "DISMOUNT" => TokenType::Keyword,
    "DOUBLE" => TokenType::Keyword,
    "DUMP" => TokenType::Keyword,

    "ELSIF" => TokenType::Keyword,
    "EVENTS" => TokenType::Keyword,
    "EXCEPTIONS" => TokenType::Keyword,
    "EXPLAIN" => TokenType::Keyword,
    "EXTENT" => TokenType::Keyword,
    "EXTERNALLY" => TokenType::Keyword,

    "FLUSH" => TokenType::Keyword,
    "FREELIST" => TokenType::Keyword,
    "FREELISTS" => TokenType::Keyword,

    "INDICATOR" => TokenType::Keyword,
    "INITRANS" => TokenType::Keyword,
    "INSTANCE" => TokenType::Keyword,

    "LAYER" => TokenType::Keyword,
    "LINK" => TokenType::Keyword,
    "LISTS" => TokenType::Keyword,
    "LOGFILE" => TokenType::Keyword,

    "MANAGE" => TokenType::Keyword,
    "MANUAL" => TokenType::Keyword,
    "MAXDATAFILES" => TokenType::Keyword,
    "MAXINSTANCES" => TokenType::Keyword,
    "MAXLOGFILES" => TokenType::Keyword,
    "MAXLOGHISTORY" => TokenType::Keyword,
    "MAXLOGMEMBERS" => TokenType::Keyword,
    "MAXTRANS" => TokenType::Keyword,
    "MINEXTENTS" => TokenType::Keyword,
    "MODULE" => TokenType::Keyword,
    "MOUNT" => TokenType::Keyword,

    "NOARCHIVELOG" => TokenType::Keyword,
    "NOCACHE" => TokenType::Keyword,
    "NOCYCLE" => TokenType::Keyword,
    "NOMAXVALUE" => TokenType::Keyword,
    "NOMINVALUE" => TokenType::Keyword,
    "NOORDER" => TokenType::Keyword,
    "NORESETLOGS" => TokenType::Keyword,
    "NORMAL" => TokenType::Keyword,
    "NOSORT" => TokenType::Keyword,

    "OPTIMAL" => TokenType::Keyword,
    "OWN" => TokenType::Keyword,

    "PACKAGE" => TokenType::Keyword,
    "PARALLEL" => TokenType::Keyword,
    "PCTINCREASE" => TokenType::Keyword,
    "PCTUSED" => TokenType::Keyword,
    "PLAN" => TokenType::Keyword,
    "PRIVATE" => TokenType::Keyword,
    "PROFILE" => TokenType::Keyword,

    "QUOTA" => TokenType::Keyword,

    "RECOVER" => TokenType::Keyword,
    "RESETLOGS" => TokenType::Keyword,
    "RESTRICTED" => TokenType::Keyword,
    "REUSE" => TokenType::Keyword,
    "ROLES" => TokenType::Keyword,

    "SAVEPOINT" => TokenType::Keyword,
    "SCN" => TokenType::Keyword,
    "SECTION" => TokenType::Keyword,
    "SEGMENT" => TokenType::Keyword,
    "SHARED" => TokenType::Keyword,
    "SNAPSHOT" => TokenType::Keyword,
    "SORT" => TokenType::Keyword,
    "STATEMENT_ID" => TokenType::Keyword,
    "STOP" => TokenType::Keyword,
    "SWITCH" => TokenType::Keyword,

    "TABLES" => TokenType::Keyword,
    "TABLESPACE" => TokenType::Keyword,
    "THREAD" => TokenType::Keyword,
    "TIME" => TokenType::Keyword,
    "TRACING" => TokenType::Keyword,
    "TRANSACTION" => TokenType::Keyword,
    "TRIGGERS" => TokenType::Keyword,

    "UNLIMITED" => TokenType::Keyword,
    "UNLOCK" => TokenType::Keyword,
};

/// PostgreSQL / PL/pgSQL keywords.
pub static KEYWORDS_PLPGSQL: phf::Map<&'static str, TokenType> = phf_map! {
    "CONFLICT" => TokenType::Keyword,
    "WINDOW" => TokenType::Keyword,
    "PARTITION" => TokenType::Keyword,
    "OVER" => TokenType::Keyword,
    "PERFORM" => TokenType::Keyword,
    "NOTICE" => TokenType::Keyword,
    "PLPGSQL" => TokenType::Keyword,
    "INHERIT" => TokenType::Keyword,
    "INDEXES" => TokenType::Keyword,
    "ON_ERROR_STOP" => TokenType::Keyword,

    "BYTEA" => TokenType::Keyword,
    "BIGSERIAL" => TokenType::Keyword,
    "BIT VARYING" => TokenType::Keyword,
    "BOX" => TokenType::Keyword,
    "CHARACTER" => TokenType::Keyword,
    "CHARACTER VARYING" => TokenType::Keyword,
    "CIDR" => TokenType::Keyword,
    "CIRCLE" => TokenType::Keyword,
    "DOUBLE PRECISION" => TokenType::Keyword,
    "INET" => TokenType::Keyword,
    "JSON" => TokenType::Keyword,
    "JSONB" => TokenType::Keyword,
    "LINE" => TokenType::Keyword,
    "LSEG" => TokenType::Keyword,
    "MACADDR" => TokenType::Keyword,
    "MONEY" => TokenType::Keyword,
    "PATH" => TokenType::Keyword,
    "PG_LSN" => TokenType::Keyword,
    "POINT" => TokenType::Keyword,
    "POLYGON" => TokenType::Keyword,
    "SMALLSERIAL" => TokenType::Keyword,
    "TSQUERY" => TokenType::Keyword,
    "TSVECTOR" => TokenType::Keyword,
    "TXID_SNAPSHOT" => TokenType::Keyword,
    "UUID" => TokenType::Keyword,
    "XML" => TokenType::Keyword,

    "FOR" => TokenType::Keyword,
    "IN" => TokenType::Keyword,
    "LOOP" => TokenType::Keyword,
};

/// Hive keywords.
pub static KEYWORDS_HQL: phf::Map<&'static str, TokenType> = phf_map! {
    "EXPLODE" => TokenType::Keyword,
    "DIRECTORY" => TokenType::Keyword,
    "DISTRIBUTE" => TokenType::Keyword,
    "INCLUDE" => TokenType::Keyword,
    "LOCATE" => TokenType::Keyword,
    "OVERWRITE" => TokenType::Keyword,
    "POSEXPLODE" => TokenType::Keyword,

    "ARRAY_CONTAINS" => TokenType::Keyword,
    "CMP" => TokenType::Keyword,
    "COLLECT_LIST" => TokenType::Keyword,
    "CONCAT" => TokenType::Keyword,
    "CONDITION" => TokenType::Keyword,
    "DATE_ADD" => TokenType::Keyword,
    "DATE_SUB" => TokenType::Keyword,
    "DECODE" => TokenType::Keyword,
    "DBMS_OUTPUT" => TokenType::Keyword,
    "ELEMENTS" => TokenType::Keyword,
    "EXCHANGE" => TokenType::Keyword,
    "EXTENDED" => TokenType::Keyword,
    "FLOOR" => TokenType::Keyword,
    "FOLLOWING" => TokenType::Keyword,
    "FROM_UNIXTIME" => TokenType::Keyword,
    "FTP" => TokenType::Keyword,
    "HOUR" => TokenType::Keyword,
    "INLINE" => TokenType::Keyword,
    "INSTR" => TokenType::Keyword,
    "LEN" => TokenType::Keyword,
    "MAP" => TokenType::Builtin,
    "MAXELEMENT" => TokenType::Keyword,
    "MAXINDEX" => TokenType::Keyword,
    "MAX_PART_DATE" => TokenType::Keyword,
    "MAX_PART_INT" => TokenType::Keyword,
    "MAX_PART_STRING" => TokenType::Keyword,
    "MINELEMENT" => TokenType::Keyword,
    "MININDEX" => TokenType::Keyword,
    "MIN_PART_DATE" => TokenType::Keyword,
    "MIN_PART_INT" => TokenType::Keyword,
    "MIN_PART_STRING" => TokenType::Keyword,
    "NOW" => TokenType::Keyword,
    "NVL" => TokenType::Keyword,
    "NVL2" => TokenType::Keyword,
    "PARSE_URL_TUPLE" => TokenType::Keyword,
    "PART_LOC" => TokenType::Keyword,
    "PART_COUNT" => TokenType::Keyword,
    "PART_COUNT_BY" => TokenType::Keyword,
    "PRINT" => TokenType::Keyword,
    "PUT_LINE" => TokenType::Keyword,
    "RANGE" => TokenType::Keyword,
    "REDUCE" => TokenType::Keyword,
    "REGEXP_REPLACE" => TokenType::Keyword,
    "RESIGNAL" => TokenType::Keyword,
    "RTRIM" => TokenType::Keyword,
    "SIGN" => TokenType::Keyword,
    "SIGNAL" => TokenType::Keyword,
    "SIN" => TokenType::Keyword,
    "SPLIT" => TokenType::Keyword,
    "SQRT" => TokenType::Keyword,
    "STACK" => TokenType::Keyword,
    "STR" => TokenType::Keyword,
    "STRING" => TokenType::Builtin,
    "STRUCT" => TokenType::Builtin,
    "SUBSTR" => TokenType::Keyword,
    "SUMMARY" => TokenType::Keyword,
    "TBLPROPERTIES" => TokenType::Keyword,
    "TIMESTAMP" => TokenType::Builtin,
    "TIMESTAMP_ISO" => TokenType::Keyword,
    "TO_CHAR" => TokenType::Keyword,
    "TO_DATE" => TokenType::Keyword,
    "TO_TIMESTAMP" => TokenType::Keyword,
    "TRUNC" => TokenType::Keyword,
    "UNBOUNDED" => TokenType::Keyword,
    "UNIQUEJOIN" => TokenType::Keyword,
    "UNIX_TIMESTAMP" => TokenType::Keyword,
    "UTC_TIMESTAMP" => TokenType::Keyword,
    "VIEWS" => TokenType::Keyword,

    "EXIT" => TokenType::Keyword,
    "BREAK" => TokenType::Keyword,
    "LEAVE" => TokenType::Keyword,
};

/// MS Access keywords.
pub static KEYWORDS_MSACCESS: phf::Map<&'static str, TokenType> = phf_map! {
    "DISTINCTROW" => TokenType::Keyword,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_statement_starters() {
        assert_eq!(resolve_keyword("select"), TokenType::Dml);
        assert_eq!(resolve_keyword("Insert"), TokenType::Dml);
        assert_eq!(resolve_keyword("CREATE"), TokenType::Ddl);
        assert_eq!(resolve_keyword("drop"), TokenType::Ddl);
        assert_eq!(resolve_keyword("WITH"), TokenType::Cte);
    }

    #[test]
    fn test_unknown_word_is_a_name() {
        assert_eq!(resolve_keyword("users"), TokenType::Name);
        assert_eq!(resolve_keyword("order_details"), TokenType::Name);
    }

    #[test]
    fn test_table_precedence_is_fixed() {
        // MAP and TIMESTAMP live in both the base table (Keyword) and the
        // Hive table (Builtin); the base table is probed first.
        assert_eq!(resolve_keyword("MAP"), TokenType::Keyword);
        assert_eq!(resolve_keyword("TIMESTAMP"), TokenType::Keyword);
        // EXPLAIN is in the base and Oracle tables, FOR in common and
        // PL/pgSQL; the earlier table wins either way.
        assert_eq!(resolve_keyword("EXPLAIN"), TokenType::Keyword);
        assert_eq!(resolve_keyword("FOR"), TokenType::Keyword);
        // TRANSACTION appears only in the Oracle table.
        assert_eq!(resolve_keyword("TRANSACTION"), TokenType::Keyword);
        // DISTINCTROW appears only in the MS Access table, the last probe.
        assert_eq!(resolve_keyword("DISTINCTROW"), TokenType::Keyword);
    }

    #[test]
    fn test_subtype_classifications() {
        assert_eq!(resolve_keyword("ASC"), TokenType::OrderKeyword);
        assert_eq!(resolve_keyword("DESC"), TokenType::OrderKeyword);
        assert_eq!(resolve_keyword("VARCHAR"), TokenType::Builtin);
        assert_eq!(resolve_keyword("DIV"), TokenType::Operator);
        assert_eq!(resolve_keyword("SYSDATE"), TokenType::Name);
        assert_eq!(resolve_keyword("COMMIT"), TokenType::Dml);
        assert_eq!(resolve_keyword("ROLLBACK"), TokenType::Dml);
        assert_eq!(resolve_keyword("START"), TokenType::Dml);
    }
}
