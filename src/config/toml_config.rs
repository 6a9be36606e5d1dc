use crate::config::seed;
use crate::core::catalog::Catalog;
use crate::core::middleware::LogFailurePolicy;
use crate::domain::model::{Item, ItemId, ItemKind, Member};
use crate::domain::ports::ActionRecorder;
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, validate_unique_ids,
    Validate,
};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_LIBRARY_NAME: &str = "Library Management System";
pub const DEFAULT_ACTION_LOG_PATH: &str = "library.log";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub library: LibrarySection,
    #[serde(default)]
    pub action_log: ActionLogConfig,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(default)]
    pub members: Vec<MemberConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibrarySection {
    #[serde(default = "default_library_name")]
    pub name: String,
}

impl Default for LibrarySection {
    fn default() -> Self {
        Self {
            name: default_library_name(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionLogConfig {
    #[serde(default = "default_action_log_path")]
    pub path: String,
    #[serde(default)]
    pub on_write_failure: LogFailurePolicy,
}

impl Default for ActionLogConfig {
    fn default() -> Self {
        Self {
            path: default_action_log_path(),
            on_write_failure: LogFailurePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKindConfig {
    Book,
    Periodical,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemConfig {
    pub kind: ItemKindConfig,
    pub id: u32,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub issue: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberConfig {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub is_member: bool,
}

fn default_library_name() -> String {
    DEFAULT_LIBRARY_NAME.to_string()
}

fn default_action_log_path() -> String {
    DEFAULT_ACTION_LOG_PATH.to_string()
}

impl ItemConfig {
    pub fn to_item(&self) -> Result<Item> {
        let kind = match self.kind {
            ItemKindConfig::Book => ItemKind::Book {
                isbn: validate_required_field("items.isbn", &self.isbn)?.clone(),
            },
            ItemKindConfig::Periodical => ItemKind::Periodical {
                issue: validate_required_field("items.issue", &self.issue)?.clone(),
            },
        };
        Ok(Item::new(
            ItemId(self.id),
            self.title.clone(),
            self.author.clone(),
            kind,
        ))
    }
}

impl MemberConfig {
    pub fn to_member(&self) -> Member {
        Member::new(self.id, self.name.clone(), self.is_member)
    }
}

impl LibraryConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LibraryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LibraryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` references from the environment; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LibraryError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("library.name", &self.library.name)?;
        validate_path("action_log.path", &self.action_log.path)?;

        for item in &self.items {
            validate_non_empty_string("items.title", &item.title)?;
            item.to_item()?;
        }
        for member in &self.members {
            validate_non_empty_string("members.name", &member.name)?;
        }

        validate_unique_ids("items.id", self.items.iter().map(|item| item.id))?;
        validate_unique_ids("members.id", self.members.iter().map(|member| member.id))?;

        Ok(())
    }

    pub fn action_log_path(&self) -> &str {
        &self.action_log.path
    }

    pub fn log_failure_policy(&self) -> LogFailurePolicy {
        self.action_log.on_write_failure
    }

    /// Configured items, or the built-in seed when none are listed.
    pub fn catalog_items(&self) -> Result<Vec<Item>> {
        if self.items.is_empty() {
            return Ok(seed::default_items());
        }
        self.items.iter().map(ItemConfig::to_item).collect()
    }

    pub fn catalog_members(&self) -> Vec<Member> {
        if self.members.is_empty() {
            return seed::default_members();
        }
        self.members.iter().map(MemberConfig::to_member).collect()
    }

    pub fn build_catalog<R: ActionRecorder>(&self, recorder: R) -> Result<Catalog<R>> {
        let mut catalog = Catalog::new(recorder).with_log_failure_policy(self.log_failure_policy());
        for item in self.catalog_items()? {
            catalog.add_item(item)?;
        }
        for member in self.catalog_members() {
            catalog.add_member(member)?;
        }
        tracing::debug!(
            "Catalog ready: {} items, {} members",
            catalog.items().len(),
            catalog.members().len()
        );
        Ok(catalog)
    }
}

impl Validate for LibraryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
