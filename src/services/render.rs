//! Renders the HTML shell and the bootstrap script from a [`Config`].

use minijinja::{AutoEscape, Environment, context};

use crate::{config::Config, error::SwaggerError};

const INDEX_HTML: &str = "index.html";
const INDEX_JS: &str = "index.js";

const INDEX_HTML_TEMPLATE: &str = r#"<!-- HTML for static distribution bundle build -->
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Swagger UI</title>
  <link rel="stylesheet" type="text/css" href="./swagger-ui.css" >
  <link rel="icon" type="image/png" href="./favicon-32x32.png" sizes="32x32" />
  <link rel="icon" type="image/png" href="./favicon-16x16.png" sizes="16x16" />
  <style>
    html
    {
        box-sizing: border-box;
        overflow: -moz-scrollbars-vertical;
        overflow-y: scroll;
    }
    *,
    *:before,
    *:after
    {
        box-sizing: inherit;
    }

    body {
      margin:0;
      background: #fafafa;
    }
  </style>
</head>

<body>

<div id="{{ dom_id }}"></div>

<script src="./swagger-ui-bundle.js"> </script>
<script src="./swagger-ui-standalone-preset.js"> </script>
<script src="./index.js"> </script>
</body>

</html>
"#;

// Strings and booleans go through `tojson`; plugins, ui_config and the scripts are trusted code.
const INDEX_JS_TEMPLATE: &str = r##"
window.onload = function() {
  {%- if before_script %}
  {{ before_script }}
  {%- endif %}
  // Build a system
  const ui = SwaggerUIBundle({
    url: {{ url|tojson }},
    deepLinking: {{ deep_linking|tojson }},
    docExpansion: {{ doc_expansion|tojson }},
    dom_id: {{ ("#" ~ dom_id)|tojson }},
    persistAuthorization: {{ persist_authorization|tojson }},
    validatorUrl: null,
    presets: [
      SwaggerUIBundle.presets.apis,
      SwaggerUIStandalonePreset
    ],
    plugins: [
      SwaggerUIBundle.plugins.DownloadUrl
      {%- for plugin in plugins %},
      {{ plugin }}
      {%- endfor %}
    ],
    {%- for key, value in ui_config|items %}
    {{ key }}: {{ value }},
    {%- endfor %}
    layout: {{ layout|tojson }},
    defaultModelsExpandDepth: {{ default_models_expand_depth }},
    showExtensions: {{ show_extensions|tojson }}
  })

  window.ui = ui
  {%- if after_script %}
  {{ after_script }}
  {%- endif %}
}
"##;

/// The two fixed templates, compiled once per UI instance.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Compile the built-in templates.
    pub fn new() -> Result<Self, SwaggerError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|name| {
            if name.ends_with(".html") {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });

        for (name, source) in [
            (INDEX_HTML, INDEX_HTML_TEMPLATE),
            (INDEX_JS, INDEX_JS_TEMPLATE),
        ] {
            env.add_template(name, source)
                .map_err(|err| SwaggerError::render(name, err))?;
        }

        Ok(Self { env })
    }

    /// Render the HTML shell.
    pub fn index_html(&self, config: &Config) -> Result<String, minijinja::Error> {
        self.env
            .get_template(INDEX_HTML)?
            .render(context! { dom_id => &config.dom_id })
    }

    /// Render the bootstrap script.
    pub fn index_js(&self, config: &Config) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX_JS)?.render(context! {
            url => &config.url,
            deep_linking => config.deep_linking,
            doc_expansion => &config.doc_expansion,
            dom_id => &config.dom_id,
            persist_authorization => config.persist_authorization,
            plugins => &config.plugins,
            ui_config => &config.ui_config,
            layout => config.layout.as_str(),
            default_models_expand_depth => config.default_models_expand_depth.depth(),
            show_extensions => config.show_extensions,
            before_script => &config.before_script,
            after_script => &config.after_script,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Layout, ModelsExpandDepth};

    #[test]
    fn default_script() {
        let config = Config::default();
        let rendered = Templates::new().unwrap().index_js(&config).unwrap();

        let expected = r##"
window.onload = function() {
  // Build a system
  const ui = SwaggerUIBundle({
    url: "doc.json",
    deepLinking: true,
    docExpansion: "list",
    dom_id: "#swagger-ui",
    persistAuthorization: false,
    validatorUrl: null,
    presets: [
      SwaggerUIBundle.presets.apis,
      SwaggerUIStandalonePreset
    ],
    plugins: [
      SwaggerUIBundle.plugins.DownloadUrl
    ],
    layout: "StandaloneLayout",
    defaultModelsExpandDepth: 1,
    showExtensions: false
  })

  window.ui = ui
}
"##;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn scripted_configuration() {
        let config = Config::default()
            .url("swagger.json")
            .deep_linking(false)
            .persist_authorization(true)
            .doc_expansion("none")
            .dom_id("swagger-ui-id")
            .layout(Layout::Standalone)
            .before_script("const SomePlugin = (system) => ({\n    // Some plugin\n  });\n")
            .after_script(
                "const someOtherCode = function(){\n    // Do something\n  };\n  someOtherCode();",
            )
            .plugins(["SomePlugin", "AnotherPlugin"])
            .ui_config([
                ("showExtensions", "true"),
                ("onComplete", "() => { window.ui.setBasePath('v3'); }"),
                ("defaultModelRendering", r#""model""#),
            ])
            .default_models_expand_depth(ModelsExpandDepth::Hide);

        let rendered = Templates::new().unwrap().index_js(&config).unwrap();

        let expected = r##"
window.onload = function() {
  const SomePlugin = (system) => ({
    // Some plugin
  });

  // Build a system
  const ui = SwaggerUIBundle({
    url: "swagger.json",
    deepLinking: false,
    docExpansion: "none",
    dom_id: "#swagger-ui-id",
    persistAuthorization: true,
    validatorUrl: null,
    presets: [
      SwaggerUIBundle.presets.apis,
      SwaggerUIStandalonePreset
    ],
    plugins: [
      SwaggerUIBundle.plugins.DownloadUrl,
      SomePlugin,
      AnotherPlugin
    ],
    defaultModelRendering: "model",
    onComplete: () => { window.ui.setBasePath('v3'); },
    showExtensions: true,
    layout: "StandaloneLayout",
    defaultModelsExpandDepth: -1,
    showExtensions: false
  })

  window.ui = ui
  const someOtherCode = function(){
    // Do something
  };
  someOtherCode();
}
"##;
        // Compare line by line so a mismatch points at the offending line.
        for (line, (got, want)) in rendered.lines().zip(expected.lines()).enumerate() {
            assert_eq!(got, want, "line {line} differs");
        }
        assert_eq!(rendered, expected);
    }

    #[test]
    fn string_options_are_escaped() {
        let config = Config::default().url(r#"doc.json"</script><script>alert(1)"#);
        let rendered = Templates::new().unwrap().index_js(&config).unwrap();

        assert!(rendered.contains(r#"url: "doc.json\""#));
        assert!(!rendered.contains("</script>"));
    }

    #[test]
    fn booleans_render_as_javascript_literals() {
        let config = Config::default()
            .deep_linking(true)
            .persist_authorization(true)
            .show_extensions(false);
        let rendered = Templates::new().unwrap().index_js(&config).unwrap();

        assert!(rendered.contains("    deepLinking: true,\n"));
        assert!(rendered.contains("    persistAuthorization: true,\n"));
        assert!(rendered.contains("    showExtensions: false\n"));
        assert!(!rendered.contains("True"));
        assert!(!rendered.contains("False"));
    }

    #[test]
    fn built_in_templates_compile_and_render_defaults() {
        let templates = Templates::new().unwrap();
        let config = Config::default();

        assert!(templates.index_html(&config).is_ok());
        assert!(templates.index_js(&config).is_ok());
    }

    #[test]
    fn base_layout_renders_its_name() {
        let config = Config::default().layout(Layout::Base);
        let rendered = Templates::new().unwrap().index_js(&config).unwrap();
        assert!(rendered.contains("    layout: \"BaseLayout\",\n"));
    }

    #[test]
    fn html_shell_mounts_the_configured_element() {
        let html = Templates::new()
            .unwrap()
            .index_html(&Config::default().dom_id("api-docs"))
            .unwrap();

        assert!(html.starts_with("<!-- HTML for static distribution bundle build -->"));
        assert!(html.contains(r#"<div id="api-docs"></div>"#));
        assert!(html.contains(r#"<script src="./index.js"> </script>"#));
    }

    #[test]
    fn html_shell_escapes_the_element_id() {
        let html = Templates::new()
            .unwrap()
            .index_html(&Config::default().dom_id(r#"x"><script>"#))
            .unwrap();

        assert!(!html.contains("<script>\""));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
