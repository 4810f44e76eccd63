//! Rendering options for the Swagger UI and the server configuration loaded by the binary.

use std::{collections::BTreeMap, env, fmt, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Registry name used when no instance name is configured.
pub const DEFAULT_INSTANCE_NAME: &str = "swagger";
/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/swagger.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SWAGGER_UI_CONFIG_PATH";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PREFIX: &str = "/swagger/";

/// Top-level layout component the UI is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Layout {
    /// Plain layout without the top bar.
    #[serde(rename = "BaseLayout")]
    Base,
    /// Layout with the top bar, requires the standalone preset.
    #[default]
    #[serde(rename = "StandaloneLayout")]
    Standalone,
}

impl Layout {
    /// Name of the layout component as Swagger UI expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Base => "BaseLayout",
            Layout::Standalone => "StandaloneLayout",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the models section is expanded (`1`) or hidden entirely (`-1`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelsExpandDepth {
    /// Show the models section.
    #[default]
    Show,
    /// Hide the models section.
    Hide,
}

impl ModelsExpandDepth {
    /// Value handed to `defaultModelsExpandDepth`.
    pub fn depth(self) -> i32 {
        match self {
            ModelsExpandDepth::Show => 1,
            ModelsExpandDepth::Hide => -1,
        }
    }
}

/// Options the bootstrap script configures the UI client with.
///
/// Built through consuming setters:
///
/// ```
/// use swagger_ui_middleware::{Config, Layout};
///
/// let config = Config::default()
///     .url("/api/openapi.json")
///     .deep_linking(false)
///     .layout(Layout::Base);
/// assert_eq!(config.url, "/api/openapi.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL the UI fetches the document from, relative to the UI page.
    pub url: String,
    /// Default expansion of operations: `list`, `full` or `none`.
    pub doc_expansion: String,
    /// Id of the element the UI mounts into, without the leading `#`.
    pub dom_id: String,
    /// Registry name of the document served as `doc.json`.
    pub instance_name: String,
    /// Enables deep linking for tags and operations.
    pub deep_linking: bool,
    /// Keeps authorization data across browser reloads.
    pub persist_authorization: bool,
    /// Layout component.
    pub layout: Layout,
    /// Expansion of the models section.
    pub default_models_expand_depth: ModelsExpandDepth,
    /// Shows vendor extensions (`x-`) of operations and parameters.
    pub show_extensions: bool,
    /// Extra plugins, as JavaScript expressions, appended after the built-in ones.
    pub plugins: Vec<String>,
    /// Additional `SwaggerUIBundle` options, key and value both raw JavaScript.
    pub ui_config: BTreeMap<String, String>,
    /// JavaScript run before the UI is built.
    pub before_script: Option<String>,
    /// JavaScript run after the UI is built.
    pub after_script: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: "doc.json".into(),
            doc_expansion: "list".into(),
            dom_id: "swagger-ui".into(),
            instance_name: DEFAULT_INSTANCE_NAME.into(),
            deep_linking: true,
            persist_authorization: false,
            layout: Layout::default(),
            default_models_expand_depth: ModelsExpandDepth::default(),
            show_extensions: false,
            plugins: Vec::new(),
            ui_config: BTreeMap::new(),
            before_script: None,
            after_script: None,
        }
    }
}

impl Config {
    /// Set the URL pointing to the API definition.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the default expansion of operations and tags.
    pub fn doc_expansion(mut self, expansion: impl Into<String>) -> Self {
        self.doc_expansion = expansion.into();
        self
    }

    /// Set the id of the DOM element the UI is mounted into.
    pub fn dom_id(mut self, dom_id: impl Into<String>) -> Self {
        self.dom_id = dom_id.into();
        self
    }

    /// Set the registry name of the served document. An empty name keeps the default.
    pub fn instance_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.instance_name = if name.is_empty() {
            DEFAULT_INSTANCE_NAME.into()
        } else {
            name
        };
        self
    }

    /// Enable or disable deep linking.
    pub fn deep_linking(mut self, enabled: bool) -> Self {
        self.deep_linking = enabled;
        self
    }

    /// Enable or disable persisting authorization data across reloads.
    pub fn persist_authorization(mut self, enabled: bool) -> Self {
        self.persist_authorization = enabled;
        self
    }

    /// Select the layout component.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Show or hide the models section.
    pub fn default_models_expand_depth(mut self, depth: ModelsExpandDepth) -> Self {
        self.default_models_expand_depth = depth;
        self
    }

    /// Show or hide vendor extensions.
    pub fn show_extensions(mut self, enabled: bool) -> Self {
        self.show_extensions = enabled;
        self
    }

    /// Replace the list of extra plugins.
    pub fn plugins<I, S>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins = plugins.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the additional `SwaggerUIBundle` options.
    pub fn ui_config<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.ui_config = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self
    }

    /// Set the script executed before the UI is built. An empty script clears it.
    pub fn before_script(mut self, script: impl Into<String>) -> Self {
        self.before_script = Some(script.into()).filter(|script| !script.is_empty());
        self
    }

    /// Set the script executed after the UI is built. An empty script clears it.
    pub fn after_script(mut self, script: impl Into<String>) -> Self {
        self.after_script = Some(script.into()).filter(|script| !script.is_empty());
        self
    }

    /// Registry name, falling back to [`DEFAULT_INSTANCE_NAME`] for configs built by hand.
    pub(crate) fn effective_instance_name(&self) -> &str {
        if self.instance_name.is_empty() {
            DEFAULT_INSTANCE_NAME
        } else {
            &self.instance_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Runtime configuration of the `swagger-ui-serve` binary.
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// URL prefix the UI is mounted under.
    pub prefix: String,
    /// OpenAPI document served under the configured instance name.
    pub document: Option<PathBuf>,
    /// UI rendering options.
    pub ui: Config,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            prefix: DEFAULT_PREFIX.into(),
            document: None,
            ui: Config::default(),
        }
    }
}

impl ServerConfig {
    /// Load the server configuration from disk, falling back to built-in defaults.
    ///
    /// `PORT` overrides whatever port the file carries.
    pub fn load() -> Self {
        let mut config = Self::load_file();
        if let Some(port) = env::var("PORT").ok().and_then(|value| value.parse().ok()) {
            config.port = port;
        }
        config
    }

    fn load_file() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(config) => {
                    info!(
                        path = %path.display(),
                        prefix = %config.prefix,
                        instance = %config.ui.instance_name,
                        "loaded server config"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
