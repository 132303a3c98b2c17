//! Lowering: resolving a parsed, untyped expression into typed
//! predicates bound to field accessors from a record source.

use crate::expr::ast::{Expr, RawPredicate};
use crate::expr::error::ParseError;
use crate::expr::parser::Parser;
use crate::filter::{Condition, FilterTree, Operator, Predicate, PredicateGroup, Value, ValueKind};
use crate::reader::RecordSource;
use chrono::NaiveDateTime;

/// chrono format used for datetime literals unless the caller supplies
/// another one, e.g. `2025-03-20 00:00:00`.
pub const DEFAULT_DATETIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Tokenize, parse, and lower `input` into a filter tree bound to
/// `source`.
pub fn compile(
    input: &str,
    source: &dyn RecordSource,
    datetime_layout: &str,
) -> Result<FilterTree, ParseError> {
    let expr = Parser::new(input).parse()?;
    lower(&expr, source, datetime_layout)
}

/// Lower a parsed expression into a bound [`FilterTree`].
///
/// Kind keywords, operator symbols and literal text are resolved here;
/// field keys are bound to accessors obtained from `source`. Any
/// failure rejects the whole expression.
pub fn lower(
    expr: &Expr,
    source: &dyn RecordSource,
    datetime_layout: &str,
) -> Result<FilterTree, ParseError> {
    match expr {
        Expr::Binary {
            condition,
            left,
            right,
        } => Ok(FilterTree::branch(
            *condition,
            lower(left, source, datetime_layout)?,
            lower(right, source, datetime_layout)?,
        )),
        Expr::Predicate(raw) => lower_predicate(raw, source, datetime_layout),
    }
}

fn lower_predicate(
    raw: &RawPredicate,
    source: &dyn RecordSource,
    datetime_layout: &str,
) -> Result<FilterTree, ParseError> {
    let kind = resolve_kind(&raw.kind)?;
    let operator = resolve_operator(&raw.operator)?;
    let index: usize = raw
        .key
        .parse()
        .map_err(|_| ParseError::InvalidFieldKey(raw.key.clone()))?;
    let literal = parse_literal(kind, &raw.literal, datetime_layout)?;

    let predicate = Predicate::new(operator, kind, literal)?;
    let accessor = match kind {
        ValueKind::String => source.string_field(index),
        ValueKind::Number => source.number_field(index),
        ValueKind::Datetime => source.datetime_field(index, datetime_layout),
    };
    let group = PredicateGroup::new(accessor, vec![predicate], Condition::And)?;

    Ok(FilterTree::leaf(group))
}

fn resolve_kind(keyword: &str) -> Result<ValueKind, ParseError> {
    match keyword {
        "string" => Ok(ValueKind::String),
        "int" | "float" | "number" => Ok(ValueKind::Number),
        "time" | "datetime" => Ok(ValueKind::Datetime),
        _ => Err(ParseError::UnknownKind(keyword.to_string())),
    }
}

fn resolve_operator(symbol: &str) -> Result<Operator, ParseError> {
    match symbol {
        "contain" => Ok(Operator::Contain),
        "==" => Ok(Operator::Equal),
        "!=" => Ok(Operator::NotEqual),
        "<" => Ok(Operator::LessThan),
        "<=" => Ok(Operator::LessThanOrEqual),
        ">" => Ok(Operator::GreaterThan),
        ">=" => Ok(Operator::GreaterThanOrEqual),
        _ => Err(ParseError::UnknownOperator(symbol.to_string())),
    }
}

fn parse_literal(
    kind: ValueKind,
    text: &str,
    datetime_layout: &str,
) -> Result<Value, ParseError> {
    match kind {
        ValueKind::String => Ok(Value::string(text)),
        ValueKind::Number => text
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| ParseError::MalformedLiteral {
                kind,
                text: text.to_string(),
            }),
        ValueKind::Datetime => NaiveDateTime::parse_from_str(text, datetime_layout)
            .map(|naive| Value::Datetime(naive.and_utc()))
            .map_err(|_| ParseError::MalformedLiteral {
                kind,
                text: text.to_string(),
            }),
    }
}
