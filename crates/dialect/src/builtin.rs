// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Builtin dialects
//!
//! One canonical table of the shipped dialects, built on first use and
//! shared for the lifetime of the process.

use std::sync::LazyLock;

use crate::dialect::{Dialect, DialectSpec};
use crate::error::{DialectError, DialectResult};

/// Keywords shared by every dialect
pub const KEYWORDS: &str = "set unique pk auto asc desc";

/// Type names shared by every dialect
pub const SQL_TYPES: &str = "array binary bit boolean char character clob date decimal double float int integer \
     interval large national nchar nclob numeric object precision real smallint time timestamp varchar varying";

const MYSQL_KEYWORDS: &str = "btree hash zerofill character collate";

const MYSQL_TYPES: &str = "bool blob long longblob longtext medium mediumblob mediumint mediumtext tinyblob \
     tinyint tinytext text bigint int1 int2 int3 int4 int8 float4 float8 varbinary varcharacter precision \
     datetime unsigned signed";

const MYSQL_BUILTIN: &str = "charset clear edit ego help nopager notee nowarning pager print prompt quit rehash \
     source status system tee";

const MSSQL_TYPES: &str = "bigint smallint smallmoney tinyint money real text nvarchar ntext varbinary image \
     hierarchyid uniqueidentifier sql_variant xml";

const MSSQL_BUILTIN: &str = "binary_checksum checksum connectionproperty context_info current_request_id \
     error_line error_message error_number error_procedure error_severity error_state formatmessage \
     get_filestream_transaction_context getansinull host_id host_name isnull isnumeric min_active_rowversion \
     newid newsequentialid rowcount_big xact_state object_id";

const SQLITE_TYPES: &str = "bool blob long longblob longtext medium mediumblob mediumint mediumtext tinyblob \
     tinyint tinytext text bigint int2 int8 unsigned signed real";

const SQLITE_BUILTIN: &str = "auth backup bail changes clone databases dbinfo dump echo eqp explain fullschema \
     headers help import imposter indexes iotrace lint load log mode nullvalue once print prompt quit restore \
     save scanstats separator shell show stats system tables testcase timeout timer trace vfsinfo vfslist \
     vfsname width";

const PLSQL_TYPES: &str = "ascii bfile bfilename bigserial bit blob dec long number nvarchar nvarchar2 serial \
     smallint string text uid varchar2 xml";

const PLSQL_BUILTIN: &str = "appinfo arraysize autocommit autoprint autorecovery autotrace blockterminator \
     break btitle cmdsep colsep compatibility compute concat copycommit copytypecheck define echo editfile \
     embedded feedback flagger flush heading headsep instance linesize lno loboffset logsource longchunksize \
     markup native newpage numformat numwidth pagesize pause pno recsep recsepchar repfooter repheader \
     serveroutput shiftinout show showmode spool sqlblanklines sqlcase sqlcode sqlcontinue sqlnumber \
     sqlpluscompatibility sqlprefix sqlprompt sqlterminator suffix tab term termout timing trimout trimspool \
     ttitle underline verify version wrap";

const POSTGRES_TYPES: &str = "bigint int8 bigserial serial8 varbit bool box bytea cidr circle precision float8 \
     inet int4 json jsonb line lseg macaddr macaddr8 money numeric pg_lsn point polygon float4 int2 \
     smallserial serial2 serial serial4 text timetz timestamptz tsquery tsvector txid_snapshot uuid xml";

fn extend(base: &str, extra: &str) -> Option<String> {
    Some(format!("{base} {extra}"))
}

fn builtin_specs() -> Vec<DialectSpec> {
    let mysql = |name: &str| DialectSpec {
        operator_chars: Some("*+-%<>!=&|^".to_string()),
        char_set_casts: Some(true),
        double_quoted_strings: Some(true),
        unquoted_bit_literals: Some(true),
        hash_comments: Some(true),
        space_after_dashes: Some(true),
        special_var: Some("@?".to_string()),
        identifier_quotes: Some("`".to_string()),
        keywords: extend(KEYWORDS, MYSQL_KEYWORDS),
        types: extend(SQL_TYPES, MYSQL_TYPES),
        builtin: Some(MYSQL_BUILTIN.to_string()),
        ..DialectSpec::named(name)
    };

    vec![
        DialectSpec::named("Standard SQL"),
        mysql("MySQL"),
        mysql("MariaDB"),
        DialectSpec {
            types: extend(SQL_TYPES, MSSQL_TYPES),
            builtin: Some(MSSQL_BUILTIN.to_string()),
            operator_chars: Some("*+-%<>!=^&|/".to_string()),
            special_var: Some("@".to_string()),
            ..DialectSpec::named("Microsoft SQL Server")
        },
        DialectSpec {
            types: extend(SQL_TYPES, SQLITE_TYPES),
            builtin: Some(SQLITE_BUILTIN.to_string()),
            operator_chars: Some("*+-%<>!=&|/~".to_string()),
            identifier_quotes: Some("`\"".to_string()),
            special_var: Some("@:?$".to_string()),
            ..DialectSpec::named("SQLite")
        },
        DialectSpec {
            builtin: Some(PLSQL_BUILTIN.to_string()),
            types: extend(SQL_TYPES, PLSQL_TYPES),
            operator_chars: Some("*/+-%<>!=~".to_string()),
            double_quoted_strings: Some(true),
            char_set_casts: Some(true),
            plsql_quoting_mechanism: Some(true),
            ..DialectSpec::named("PL/SQL")
        },
        DialectSpec {
            char_set_casts: Some(true),
            double_dollar_quoted_strings: Some(true),
            operator_chars: Some("+-*/<>=~!@#%^&|`?".to_string()),
            special_var: Some(String::new()),
            types: extend(SQL_TYPES, POSTGRES_TYPES),
            ..DialectSpec::named("PostgreSQL")
        },
    ]
}

static BUILTIN: LazyLock<Vec<Dialect>> =
    LazyLock::new(|| builtin_specs().iter().map(Dialect::define).collect());

/// All builtin dialects, standard first
pub fn builtin_dialects() -> &'static [Dialect] {
    &BUILTIN
}

/// The dialect used when nothing else is configured
pub fn standard() -> &'static Dialect {
    &BUILTIN[0]
}

/// Look up a builtin dialect by display name or common alias
pub fn builtin_dialect(name: &str) -> DialectResult<&'static Dialect> {
    let wanted = match name.trim().to_ascii_lowercase().as_str() {
        "standard" | "sql" => "standard sql".to_string(),
        "mssql" | "sqlserver" | "sql server" => "microsoft sql server".to_string(),
        "plsql" | "pl/sql" | "oracle" => "pl/sql".to_string(),
        "postgres" | "pg" => "postgresql".to_string(),
        other => other.to_string(),
    };

    BUILTIN
        .iter()
        .find(|dialect| dialect.name.eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| DialectError::UnknownDialect(name.to_string()))
}
