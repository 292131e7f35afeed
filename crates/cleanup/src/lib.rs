pub mod catalog;
pub mod error;
pub mod harness;
pub mod naming;
pub mod ports;
pub mod resolver;
pub mod service;

pub use catalog::{EntityCatalog, EntityMarker, EntityMetadata, Persistent, TableMarker};
pub use error::CleanupError;
pub use harness::IntegrationTestBase;
pub use naming::camel_to_snake_case;
pub use ports::{SessionError, SqlSession};
pub use resolver::{resolve_table, resolve_table_names, NameSource, ResolvedTable};
pub use service::DatabaseCleanupService;

#[cfg(any(test, feature = "test-mocks"))]
pub use ports::MockSqlSession;
