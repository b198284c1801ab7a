mod column;
mod dbms;
mod foreign_key;
mod project;
mod schema;
mod table;

pub use column::Column;
pub use dbms::Dbms;
pub use foreign_key::ForeignKey;
pub use project::Project;
pub use schema::Schema;
pub use table::Table;

///
/// Keys
///
/// Attribute and child-list vocabulary shared by the schema loader, the
/// typed nodes, and generated code.
///

pub mod keys {
    pub const NAME: &str = "name";
    pub const ENABLED: &str = "enabled";

    pub const DBMSES: &str = "dbmses";
    pub const SCHEMAS: &str = "schemas";
    pub const TABLES: &str = "tables";
    pub const COLUMNS: &str = "columns";
    pub const FOREIGN_KEYS: &str = "foreign_keys";

    pub const USERNAME: &str = "username";
    pub const IP_ADDRESS: &str = "ip_address";
    pub const PORT: &str = "port";
    pub const CONNECTION_URL: &str = "connection_url";

    pub const NULLABLE: &str = "nullable";
    pub const FOREIGN_TABLE: &str = "foreign_table";
    pub const FOREIGN_COLUMN: &str = "foreign_column";
}
