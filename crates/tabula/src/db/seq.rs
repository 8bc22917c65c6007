//! Reads over sequence models, whose rows are spread across shards named
//! `prefix + suffix`.
//!
//! Shards are discovered on every call by listing the database's tables, so
//! a shard created between discovery and the per-shard queries is not seen
//! by that call.

use super::{cache_get, exec, Db};
use crate::{Cache, Record, Resolved, Result, SeqModel, Value};

use regex::Regex;
use tabula_core::{driver::render, Error};
use tabula_sql::serializer;

impl Db {
    /// Names of the live shards of `M`, newest first.
    ///
    /// A table qualifies when its full name is the registered prefix followed
    /// by a suffix matching [`SeqModel::suffix_pattern`]. Shards are ordered by
    /// name, descending, so with sortable suffixes the most recent come first.
    pub async fn resolve_candidate_tables<M: SeqModel>(&self) -> Result<Vec<String>> {
        let resolved = self.catalog.resolve::<M>()?;
        candidate_tables::<M>(resolved).await
    }

    /// Runs `{select} from {shard} where {filter}` on every shard and
    /// concatenates the rows, newest shard first. Each model remembers the
    /// shard it came from.
    pub async fn find_in_seq<M: SeqModel>(
        &self,
        select: &str,
        filter: &str,
        params: &[Value],
    ) -> Result<Vec<M>> {
        let resolved = self.catalog.resolve::<M>()?;
        let records = scan::<M>(resolved, select, filter, params, false).await?;
        records.into_iter().map(M::load).collect()
    }

    /// Like [`find_in_seq`](Db::find_in_seq), stopping at the first shard that
    /// returns a row. `None` if no shard has a match or no shard exists.
    pub async fn find_first_in_seq<M: SeqModel>(
        &self,
        select: &str,
        filter: &str,
        params: &[Value],
    ) -> Result<Option<M>> {
        let resolved = self.catalog.resolve::<M>()?;
        let records = scan::<M>(resolved, select, filter, params, true).await?;
        records.into_iter().next().map(M::load).transpose()
    }

    pub async fn find_in_seq_cached<M: SeqModel>(
        &self,
        cache: &dyn Cache,
        key: &str,
        select: &str,
        filter: &str,
        params: &[Value],
    ) -> Result<Vec<M>> {
        let resolved = self.catalog.resolve::<M>()?;
        let records = match cache_get(cache, key) {
            Some(records) => records,
            None => {
                let records = scan::<M>(resolved, select, filter, params, false).await?;
                cache.put(key, records.clone());
                records
            }
        };
        records.into_iter().map(M::load).collect()
    }

    pub async fn find_first_in_seq_cached<M: SeqModel>(
        &self,
        cache: &dyn Cache,
        key: &str,
        select: &str,
        filter: &str,
        params: &[Value],
    ) -> Result<Option<M>> {
        let resolved = self.catalog.resolve::<M>()?;
        let records = match cache_get(cache, key) {
            Some(records) => records,
            None => {
                let records = scan::<M>(resolved, select, filter, params, true).await?;
                cache.put(key, records.clone());
                records
            }
        };
        records.into_iter().next().map(M::load).transpose()
    }
}

async fn candidate_tables<M: SeqModel>(resolved: Resolved<'_>) -> Result<Vec<String>> {
    let Resolved { config, table } = resolved;

    let sequence = table.sequence().ok_or_else(|| {
        Error::invalid_configuration(format!(
            "model is not registered as a sequence; model={}",
            M::NAME
        ))
    })?;

    let suffix_pattern = (sequence.suffix_pattern)();
    if suffix_pattern.is_empty() {
        return Err(Error::invalid_configuration(format!(
            "suffix pattern cannot be empty; model={}",
            M::NAME
        )));
    }

    let matcher = shard_matcher(&sequence.prefix, &suffix_pattern).map_err(|err| {
        err.context(Error::invalid_configuration(format!(
            "invalid suffix pattern; model={} pattern={}",
            M::NAME,
            suffix_pattern
        )))
    })?;

    let sql = render(config.dialect().sql_list_tables(), &sequence.prefix);
    let rows = exec::query(config.pool(), &sql, &[]).await?;

    let mut tables = rows
        .into_first_column()
        .filter_map(|value| value.as_str().map(str::to_string))
        .filter(|name| matcher.is_match(name))
        .collect::<Vec<_>>();
    tables.sort_unstable_by(|a, b| b.cmp(a));
    tables.dedup();

    tracing::debug!(model = M::NAME, ?tables, "resolved candidate tables");
    Ok(tables)
}

fn shard_matcher(prefix: &str, suffix_pattern: &str) -> Result<Regex> {
    Regex::new(&format!(
        "^{}(?:{})$",
        regex::escape(prefix),
        suffix_pattern
    ))
    .map_err(Error::driver_operation_failed)
}

/// Queries shards newest first, tagging every record with its shard. With
/// `first_only`, returns at most one record and skips the remaining shards
/// once one is found.
async fn scan<M: SeqModel>(
    resolved: Resolved<'_>,
    select: &str,
    filter: &str,
    params: &[Value],
    first_only: bool,
) -> Result<Vec<Record>> {
    let pool = resolved.config.pool();
    let mut found = vec![];

    for table in candidate_tables::<M>(resolved).await? {
        let sql = serializer::select_from(select, &table, filter);
        let rows = exec::query(pool, &sql, params).await?;

        for mut record in rows.into_records() {
            record.set_table(table.as_str());
            found.push(record);

            if first_only {
                return Ok(found);
            }
        }
    }

    Ok(found)
}
