mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver, OpKind};

pub mod models;

use std::sync::{Arc, Mutex, Once};
use tabula::{DbConfig, Flavor, Pool, Sqlite};

/// Installs a `tracing` subscriber for the test binary, filtered by
/// `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A fresh in-memory SQLite database with every statement logged.
pub struct Harness {
    pub pool: Pool,
    pub config: DbConfig,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl Harness {
    pub fn new() -> Harness {
        init_tracing();

        let driver = LoggingDriver::new(Box::new(Sqlite::in_memory()));
        let ops_log = driver.ops_log_handle();
        let pool = Pool::new(driver).unwrap();
        let config = DbConfig::new("main", pool.clone(), Flavor::Sqlite).unwrap();

        Harness {
            pool,
            config,
            ops_log,
        }
    }

    /// Runs each DDL statement directly on the pool.
    pub async fn ddl(&self, statements: &[&str]) {
        let mut conn = self.pool.get().await.unwrap();
        for sql in statements {
            conn.execute(sql, &[]).await.unwrap();
        }
    }

    /// Every statement sent to the database so far.
    pub fn ops(&self) -> Vec<DriverOp> {
        self.ops_log.lock().unwrap().clone()
    }

    pub fn clear_ops(&self) {
        self.ops_log.lock().unwrap().clear();
    }

    /// SQL of every query sent since the log was last cleared.
    pub fn queries(&self) -> Vec<String> {
        self.ops()
            .into_iter()
            .filter(|op| op.kind == OpKind::Query)
            .map(|op| op.sql)
            .collect()
    }
}

impl Default for Harness {
    fn default() -> Self {
        Harness::new()
    }
}
