use crate::{Error, VERSION};
use alacrity_config::{
    Error as ConfigError,
    base::BaseDocument,
    document::Document,
    error::DocumentError,
    immutable::ImmutableDocument,
    node::{Dbms, Project, Schema, keys},
    traits::{DocumentNode, HasName},
    transcode,
    util::relative_name,
    validate::validate_project,
    value::DocValue,
};
use tracing::{info, warn};

type With<N> = Box<dyn Fn(&N) -> Result<(), DocumentError> + Send + Sync>;

///
/// ApplicationBuilder
///
/// Collects deferred configuration overrides and applies them to the
/// loaded document tree at build time: kind-wide overrides first, then
/// named ones, each in insertion order. The tree is validated, frozen and
/// published read-only.
///

#[derive(Default)]
pub struct ApplicationBuilder {
    metadata: Option<String>,
    dbms_withs_all: Vec<With<Dbms<BaseDocument>>>,
    dbms_withs_named: Vec<(String, With<Dbms<BaseDocument>>)>,
    schema_withs_all: Vec<With<Schema<BaseDocument>>>,
    schema_withs_named: Vec<(String, With<Schema<BaseDocument>>)>,
    default_password: Option<String>,
    named_passwords: Vec<(String, String)>,
    validate: bool,
}

impl ApplicationBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            validate: true,
            ..Self::default()
        }
    }

    /// Persisted configuration tree to load. Without metadata the build
    /// starts from a default single-node project.
    #[must_use]
    pub fn with_metadata(mut self, json: impl Into<String>) -> Self {
        self.metadata = Some(json.into());
        self
    }

    #[must_use]
    pub fn with_username(mut self, username: &str) -> Self {
        let username = username.to_string();
        self.dbms_withs_all
            .push(Box::new(move |dbms| dbms.set_username(&username)));
        self
    }

    #[must_use]
    pub fn with_username_for(mut self, dbms_name: &str, username: &str) -> Self {
        let username = username.to_string();
        self.dbms_withs_named.push((
            dbms_name.to_string(),
            Box::new(move |dbms| dbms.set_username(&username)),
        ));
        self
    }

    /// Passwords are held off-document; they never enter the tree.
    #[must_use]
    pub fn with_password(mut self, password: &str) -> Self {
        self.default_password = Some(password.to_string());
        self
    }

    #[must_use]
    pub fn with_password_for(mut self, dbms_name: &str, password: &str) -> Self {
        self.named_passwords
            .push((dbms_name.to_string(), password.to_string()));
        self
    }

    #[must_use]
    pub fn with_ip_address(mut self, ip_address: &str) -> Self {
        let ip_address = ip_address.to_string();
        self.dbms_withs_all
            .push(Box::new(move |dbms| dbms.set_ip_address(&ip_address)));
        self
    }

    #[must_use]
    pub fn with_ip_address_for(mut self, dbms_name: &str, ip_address: &str) -> Self {
        let ip_address = ip_address.to_string();
        self.dbms_withs_named.push((
            dbms_name.to_string(),
            Box::new(move |dbms| dbms.set_ip_address(&ip_address)),
        ));
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.dbms_withs_all
            .push(Box::new(move |dbms| dbms.set_port(port)));
        self
    }

    #[must_use]
    pub fn with_port_for(mut self, dbms_name: &str, port: u16) -> Self {
        self.dbms_withs_named.push((
            dbms_name.to_string(),
            Box::new(move |dbms| dbms.set_port(port)),
        ));
        self
    }

    #[must_use]
    pub fn with_connection_url(mut self, url: &str) -> Self {
        let url = url.to_string();
        self.dbms_withs_all
            .push(Box::new(move |dbms| dbms.set_connection_url(&url)));
        self
    }

    /// Writes `connection_url` on the matching dbms, like the kind-wide
    /// variant; the two overloads are specified independently.
    #[must_use]
    pub fn with_connection_url_for(mut self, dbms_name: &str, url: &str) -> Self {
        let url = url.to_string();
        self.dbms_withs_named.push((
            dbms_name.to_string(),
            Box::new(move |dbms| dbms.set_connection_url(&url)),
        ));
        self
    }

    /// Rename every schema.
    #[must_use]
    pub fn with_schema(mut self, schema_name: &str) -> Self {
        let schema_name = schema_name.to_string();
        self.schema_withs_all
            .push(Box::new(move |schema| schema.set_name(&schema_name)));
        self
    }

    /// Rename the schemas currently named `old_name`.
    #[must_use]
    pub fn with_schema_renamed(mut self, old_name: &str, schema_name: &str) -> Self {
        let schema_name = schema_name.to_string();
        self.schema_withs_named.push((
            old_name.to_string(),
            Box::new(move |schema| schema.set_name(&schema_name)),
        ));
        self
    }

    #[must_use]
    pub const fn with_validation(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }

    /// Load, override, validate, freeze, publish.
    pub fn build(self) -> Result<Application, Error> {
        let root = match &self.metadata {
            Some(json) => transcode::load(json).map_err(ConfigError::from)?,
            None => {
                let doc = BaseDocument::new();
                doc.put(keys::NAME, DocValue::from("project"))
                    .map_err(ConfigError::from)?;
                doc
            }
        };
        let project = Project::new(root);

        self.apply_overrides(&project).map_err(ConfigError::from)?;

        if self.validate {
            validate_project(&project).map_err(ConfigError::Validation)?;
        }

        let frozen = Project::new(
            ImmutableDocument::from(project.as_document()).map_err(ConfigError::from)?,
        );

        if frozen.dbmses().is_empty() {
            warn!("configuration contains no dbms; nothing will be generated");
        }
        info!(version = VERSION, "alacrity application built");

        Ok(Application {
            project: frozen,
            default_password: self.default_password,
            named_passwords: self.named_passwords,
        })
    }

    fn apply_overrides(&self, project: &Project<BaseDocument>) -> Result<(), DocumentError> {
        let root = project.as_document();

        // kind-wide overrides, in insertion order
        for with in &self.dbms_withs_all {
            for dbms in project.dbmses().iter() {
                with(dbms)?;
            }
        }
        for with in &self.schema_withs_all {
            for dbms in project.dbmses().iter() {
                for schema in dbms.schemas().iter() {
                    with(schema)?;
                }
            }
        }

        // named overrides; the match key is the document's relative name
        // from the project root
        for (name, with) in &self.dbms_withs_named {
            for dbms in project.dbmses().iter() {
                if relative_name(dbms.as_document(), root, '.') == *name {
                    with(dbms)?;
                }
            }
        }
        for (name, with) in &self.schema_withs_named {
            for dbms in project.dbmses().iter() {
                for schema in dbms.schemas().iter() {
                    if schema.name().as_deref() == Ok(name.as_str()) {
                        with(schema)?;
                    }
                }
            }
        }

        Ok(())
    }
}

///
/// Application
///
/// A built application: the frozen project tree shared read-only across
/// query threads, plus the off-document credentials.
///

#[derive(Debug)]
pub struct Application {
    project: Project<ImmutableDocument>,
    default_password: Option<String>,
    named_passwords: Vec<(String, String)>,
}

impl Application {
    #[must_use]
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    #[must_use]
    pub const fn project(&self) -> &Project<ImmutableDocument> {
        &self.project
    }

    #[must_use]
    pub fn password(&self, dbms_name: &str) -> Option<&str> {
        self.named_passwords
            .iter()
            .find_map(|(name, password)| (name == dbms_name).then_some(password.as_str()))
            .or(self.default_password.as_deref())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use alacrity_config::traits::HasEnabled;

    const METADATA: &str = r#"{
        "name": "project",
        "dbmses": [
            {
                "name": "primary",
                "port": 5432,
                "schemas": [{"name": "public", "tables": [{"name": "orders"}]}]
            },
            {"name": "replica", "schemas": [{"name": "public"}]}
        ]
    }"#;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .try_init();
    }

    #[test]
    fn default_build_yields_named_project() {
        init_tracing();
        let app = Application::builder().build().unwrap();

        assert_eq!(app.project().name().unwrap(), "project");
        assert!(app.project().dbmses().is_empty());
        assert!(app.project().is_enabled());
    }

    #[test]
    fn metadata_build_loads_the_tree() {
        let app = Application::builder().with_metadata(METADATA).build().unwrap();

        let dbmses = app.project().dbmses();
        assert_eq!(dbmses.len(), 2);
        assert_eq!(dbmses[0].name().unwrap(), "primary");
        assert_eq!(dbmses[0].port(), Some(5432));

        let tables = dbmses[0].schemas()[0].tables();
        assert_eq!(tables[0].name().unwrap(), "orders");
    }

    #[test]
    fn kind_wide_override_hits_every_dbms() {
        let app = Application::builder()
            .with_metadata(METADATA)
            .with_username("svc")
            .build()
            .unwrap();

        for dbms in app.project().dbmses().iter() {
            assert_eq!(dbms.username().as_deref(), Some("svc"));
        }
    }

    #[test]
    fn named_override_hits_only_the_matching_dbms() {
        let app = Application::builder()
            .with_metadata(METADATA)
            .with_username_for("replica", "ro")
            .build()
            .unwrap();

        let dbmses = app.project().dbmses();
        assert_eq!(dbmses[0].username(), None);
        assert_eq!(dbmses[1].username().as_deref(), Some("ro"));
    }

    #[test]
    fn connection_url_for_writes_the_url_not_the_name() {
        let app = Application::builder()
            .with_metadata(METADATA)
            .with_connection_url_for("primary", "jdbc:pg://h/db")
            .build()
            .unwrap();

        let dbmses = app.project().dbmses();
        assert_eq!(dbmses[0].name().unwrap(), "primary");
        assert_eq!(dbmses[0].connection_url().as_deref(), Some("jdbc:pg://h/db"));
        assert_eq!(dbmses[1].connection_url(), None);
    }

    #[test]
    fn schema_rename_matches_old_name() {
        let app = Application::builder()
            .with_metadata(METADATA)
            .with_schema_renamed("public", "app")
            .build()
            .unwrap();

        for dbms in app.project().dbmses().iter() {
            assert_eq!(dbms.schemas()[0].name().unwrap(), "app");
        }
    }

    #[test]
    fn overrides_apply_in_insertion_order() {
        let app = Application::builder()
            .with_metadata(METADATA)
            .with_username("first")
            .with_username("second")
            .build()
            .unwrap();

        assert_eq!(
            app.project().dbmses()[0].username().as_deref(),
            Some("second")
        );
    }

    #[test]
    fn passwords_stay_off_document() {
        let app = Application::builder()
            .with_metadata(METADATA)
            .with_password("fallback")
            .with_password_for("primary", "s3cret")
            .build()
            .unwrap();

        assert_eq!(app.password("primary"), Some("s3cret"));
        assert_eq!(app.password("replica"), Some("fallback"));

        let json = transcode::save(app.project().as_document()).unwrap();
        assert!(!json.contains("s3cret"));
        assert!(!json.contains("fallback"));
    }

    #[test]
    fn built_project_is_frozen() {
        let app = Application::builder().with_metadata(METADATA).build().unwrap();
        let dbmses = app.project().dbmses();

        assert!(matches!(
            dbmses[0].set_username("late"),
            Err(DocumentError::Immutable { .. })
        ));
    }

    #[test]
    fn validation_failure_surfaces_all_complaints() {
        let err = Application::builder()
            .with_metadata(r#"{"name":"p","dbmses":[{"port":90000}]}"#)
            .build()
            .unwrap_err();

        match err {
            Error::Config(ConfigError::Validation(tree)) => assert_eq!(tree.len(), 2),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn validation_can_be_disabled() {
        let app = Application::builder()
            .with_metadata(r#"{"name":"p","dbmses":[{"port":90000}]}"#)
            .with_validation(false)
            .build()
            .unwrap();

        assert_eq!(app.project().dbmses()[0].port(), Some(90000));
    }
}
