use super::{exec, Db, DbConfig, TableOptions};
use crate::{Catalog, Model, Result, SeqModel};

use std::sync::Arc;
use tabula_core::{
    driver::render,
    schema::{table_name_for, Sequence, TableName},
    Error, TableMeta,
};

/// Registers models against their data sources, then produces a [`Db`].
///
/// Registration introspects the live schema, so every table (or the newest
/// shard of a sequence model) must exist by the time its model is
/// registered.
#[derive(Debug, Default)]
pub struct Builder {
    catalog: Catalog,
}

impl Builder {
    /// Registers `M` with a table name derived from its type name and the
    /// dialect's default primary key.
    pub async fn register<M: Model>(&mut self, config: &DbConfig) -> Result<&mut Self> {
        self.register_with::<M>(config, TableOptions::default())
            .await
    }

    pub async fn register_with<M: Model>(
        &mut self,
        config: &DbConfig,
        options: TableOptions,
    ) -> Result<&mut Self> {
        self.catalog.ensure_unregistered::<M>()?;

        let table = non_blank(options.table, "table name", M::NAME)?
            .unwrap_or_else(|| table_name_for(M::NAME));
        self.introspect::<M>(config, TableName::Fixed(table), options.primary_key)
            .await
    }

    /// Registers a sequence model. The derived (or explicit) name is the shard
    /// prefix; columns are read from the newest shard.
    pub async fn register_seq<M: SeqModel>(&mut self, config: &DbConfig) -> Result<&mut Self> {
        self.register_seq_with::<M>(config, TableOptions::default())
            .await
    }

    pub async fn register_seq_with<M: SeqModel>(
        &mut self,
        config: &DbConfig,
        options: TableOptions,
    ) -> Result<&mut Self> {
        self.catalog.ensure_unregistered::<M>()?;

        let prefix = non_blank(options.table, "table prefix", M::NAME)?
            .unwrap_or_else(|| table_name_for(M::NAME));
        let sequence = Sequence {
            prefix,
            latest_suffix: M::latest_suffix,
            suffix_pattern: M::suffix_pattern,
        };
        self.introspect::<M>(config, TableName::Sequence(sequence), options.primary_key)
            .await
    }

    async fn introspect<M: Model>(
        &mut self,
        config: &DbConfig,
        name: TableName,
        primary_key: Option<String>,
    ) -> Result<&mut Self> {
        let primary_key = non_blank(primary_key, "primary key", M::NAME)?
            .unwrap_or_else(|| config.dialect().default_primary_key().to_string());

        let mut table = TableMeta::new(M::NAME, name, primary_key);
        let target = table.introspection_table();
        let sql = render(config.dialect().sql_describe_columns(), &target);

        let columns = exec::describe(config.pool(), &sql).await.map_err(|err| {
            err.context(Error::invalid_configuration(format!(
                "failed to introspect columns; model={} table={}",
                M::NAME,
                target
            )))
        })?;

        for column in columns {
            table.add_column(column.name, column.ty);
        }

        tracing::info!(
            model = M::NAME,
            config = config.id(),
            table = %target,
            primary_key = table.primary_key(),
            columns = table.columns().count(),
            "registered model"
        );

        self.catalog.insert::<M>(config, table)?;
        Ok(self)
    }

    pub fn build(self) -> Db {
        Db {
            catalog: Arc::new(self.catalog),
        }
    }
}

fn non_blank(value: Option<String>, what: &str, model: &str) -> Result<Option<String>> {
    match value {
        Some(value) if value.trim().is_empty() => Err(Error::invalid_configuration(format!(
            "{what} cannot be blank; model={model}"
        ))),
        value => Ok(value),
    }
}
