use crate::{DbConfig, Model, Result};

use indexmap::IndexMap;
use std::{any::TypeId, collections::HashMap};
use tabula_core::{Error, TableMeta};

/// Every registered model with its table metadata and owning data source.
///
/// Filled by [`Builder`](crate::db::Builder) during startup and read-only once
/// the [`Db`](crate::Db) is built. All model lookups go through
/// [`Catalog::resolve`].
#[derive(Debug, Default)]
pub struct Catalog {
    /// Data sources by config id, in registration order
    configs: IndexMap<String, ConfigEntry>,

    /// Model type to the config that owns it
    models: HashMap<TypeId, Registration>,
}

#[derive(Debug)]
struct ConfigEntry {
    config: DbConfig,
    tables: HashMap<TypeId, TableMeta>,
}

#[derive(Debug)]
struct Registration {
    model: &'static str,
    config: String,
}

/// A model's table metadata together with the data source it lives in.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub config: &'a DbConfig,
    pub table: &'a TableMeta,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered<M: Model>(&self) -> bool {
        self.models.contains_key(&TypeId::of::<M>())
    }

    /// Fails if `M` already has a registration.
    pub(crate) fn ensure_unregistered<M: Model>(&self) -> Result<()> {
        match self.models.get(&TypeId::of::<M>()) {
            Some(registration) => Err(Error::invalid_configuration(format!(
                "model already registered; model={} config={}",
                registration.model, registration.config
            ))),
            None => Ok(()),
        }
    }

    pub(crate) fn insert<M: Model>(&mut self, config: &DbConfig, table: TableMeta) -> Result<()> {
        self.ensure_unregistered::<M>()?;

        if let Some(entry) = self.configs.get(config.id()) {
            if !entry.config.same(config) {
                return Err(Error::invalid_configuration(format!(
                    "config id is already bound to another data source; id={}",
                    config.id()
                )));
            }
        }

        let entry = self
            .configs
            .entry(config.id().to_string())
            .or_insert_with(|| ConfigEntry {
                config: config.clone(),
                tables: HashMap::new(),
            });

        entry.tables.insert(TypeId::of::<M>(), table);
        self.models.insert(
            TypeId::of::<M>(),
            Registration {
                model: M::NAME,
                config: config.id().to_string(),
            },
        );

        Ok(())
    }

    pub fn resolve<M: Model>(&self) -> Result<Resolved<'_>> {
        let registration = self
            .models
            .get(&TypeId::of::<M>())
            .ok_or_else(|| Error::unregistered_model(M::NAME))?;

        let entry = self
            .configs
            .get(&registration.config)
            .ok_or_else(|| Error::data_source_not_found(M::NAME))?;

        let table = entry
            .tables
            .get(&TypeId::of::<M>())
            .ok_or_else(|| Error::table_not_found(M::NAME))?;

        Ok(Resolved {
            config: &entry.config,
            table,
        })
    }

    /// Registered data sources, in registration order.
    pub fn configs(&self) -> impl Iterator<Item = &DbConfig> + '_ {
        self.configs.values().map(|entry| &entry.config)
    }
}
