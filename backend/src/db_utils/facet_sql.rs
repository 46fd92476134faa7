//! SQL builder helpers for facet aggregation queries.

use common::condition::{Condition, ConditionValue, is_facet_key};

pub const SQL_FROM_CLAUSE: &'static str = "FROM catalog_goods";

pub const SQL_OPTIONS_CLAUSE: &'static str = "OPTION max_query_time=10000";

/// Upper bound of buckets returned per facet.
pub const FACET_BUCKET_LIMIT: usize = 1000;


pub fn id_column(facet_key: &str) -> String {
    format!("{facet_key}_id")
}

pub fn name_column(facet_key: &str) -> String {
    format!("{facet_key}_name")
}

pub fn build_sql_where_clause(condition: &Condition, category_id: u64) -> String {
    let mut terms = vec![format!("
        WHERE category_ids = {category_id}")];

    for (facet_key, values) in condition.selections.iter() {
        let ids = values.iter().filter_map(|value| match value {
            ConditionValue::Id(id) => Some(id.to_string()),
            ConditionValue::Text(_) => None,
        }).collect::<Vec<String>>();
        let names = values.iter().filter_map(|value| match value {
            ConditionValue::Id(_) => None,
            ConditionValue::Text(text) => Some(format_sql_query::QuotedData(text).to_string()),
        }).collect::<Vec<String>>();

        let mut alternatives = Vec::new();
        if !ids.is_empty() {
            alternatives.push(format!("{} IN ({})", id_column(facet_key), ids.join(", ")));
        }
        if !names.is_empty() {
            alternatives.push(format!("{} IN ({})", name_column(facet_key), names.join(", ")));
        }
        match alternatives.len() {
            0 => {}
            1 => terms.push(alternatives.remove(0)),
            _ => terms.push(format!("({})", alternatives.join(" OR "))),
        }
    }

    terms.join("
        AND ")
}

/// Facet keys become column names, so anything outside the identifier
/// charset is refused before it reaches the query text.
pub fn check_facet_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> anyhow::Result<()> {
    for key in keys {
        if !is_facet_key(key) {
            anyhow::bail!("facet key {key:?} is not a valid column name");
        }
    }
    Ok(())
}

pub fn build_facet_sql(condition: &Condition, category_id: u64, facet_key: &str) -> anyhow::Result<String> {
    check_facet_keys(std::iter::once(facet_key).chain(condition.selections.keys().map(String::as_str)))?;
    let sql_where_clause = build_sql_where_clause(condition, category_id);
    Ok(format!(
        "
        SELECT id
        {SQL_FROM_CLAUSE}
        {sql_where_clause}
        LIMIT 0

        {SQL_OPTIONS_CLAUSE}

        FACET {} ORDER BY COUNT(*) DESC LIMIT {FACET_BUCKET_LIMIT}
        ;",
        id_column(facet_key),
    ))
}
