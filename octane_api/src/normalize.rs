//! Turns caller-supplied filters into wire query parameters.

use crate::{
    clock::Clock,
    query::{FilterSet, FilterValue},
    revision::{Fallback, FilterKind, FilterSpec, QueryContract},
    Error,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders `filters` against an endpoint's contract.
///
/// Parameters come out in table order. A supplied filter is always sent,
/// whatever its value; an absent one is sent only when the table gives it a
/// fallback. Supplied filters the table does not list are dropped.
pub fn normalize(
    contract: &QueryContract,
    filters: &FilterSet,
    clock: &dyn Clock,
) -> Result<Vec<(String, String)>, Error> {
    for (name, _) in filters.iter() {
        if contract.filter(name).is_none() {
            tracing::debug!(
                "Filter `{}` is not accepted by {}, not forwarding it",
                name,
                contract.endpoint
            );
        }
    }

    let mut params = Vec::with_capacity(contract.filters.len());
    for spec in contract.filters {
        let value = match filters.get(spec.name) {
            Some(value) => coerce(spec, value)?,
            None => match spec.fallback {
                Fallback::Literal(value) => value.to_string(),
                Fallback::Today => clock.today().format(DATE_FORMAT).to_string(),
                Fallback::Omit if spec.required => {
                    tracing::error!(
                        "Missing required filter `{}` for {}",
                        spec.name,
                        contract.endpoint
                    );
                    return Err(Error::MissingFilter(spec.name.to_string()));
                }
                Fallback::Omit => continue,
            },
        };
        params.push((spec.wire.to_string(), value));
    }
    Ok(params)
}

fn coerce(spec: &FilterSpec, value: &FilterValue) -> Result<String, Error> {
    let rendered = match (spec.kind, value) {
        (FilterKind::Text | FilterKind::Integer, FilterValue::Text(text)) => Some(text.clone()),
        (FilterKind::Text | FilterKind::Integer, FilterValue::Integer(n)) => Some(n.to_string()),
        (FilterKind::Flag, FilterValue::Flag(flag)) => Some(flag.to_string()),
        (FilterKind::Date, FilterValue::Date(date)) => Some(date.format(DATE_FORMAT).to_string()),
        (FilterKind::Date, FilterValue::Text(text)) => Some(text.clone()),
        _ => None,
    };
    rendered.ok_or_else(|| {
        let expected = expected(spec.kind);
        tracing::error!(
            "Filter `{}` expects {}, got {}",
            spec.name,
            expected,
            value.type_name()
        );
        Error::InvalidFilter {
            filter: spec.name.to_string(),
            expected,
        }
    })
}

fn expected(kind: FilterKind) -> &'static str {
    match kind {
        FilterKind::Text => "text or integer",
        FilterKind::Integer => "integer or text",
        FilterKind::Flag => "boolean",
        FilterKind::Date => "date or YYYY-MM-DD text",
    }
}
