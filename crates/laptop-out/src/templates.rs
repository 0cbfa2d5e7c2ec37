//! Templates file loading.
//!
//! Same YAML layout as `templates/views.yaml`: named handlebars templates
//! plus documentation for the helpers they may call.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Built-in templates, used when no templates path is configured
pub const DEFAULT_TEMPLATES: &str = include_str!("../../../templates/views.yaml");

/// Template names every templates file must define
pub const REQUIRED_TEMPLATES: &[&str] = &["candidate_list", "comparison", "metrics"];

#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
    #[serde(default)]
    pub helpers: HashMap<String, HelperDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HelperDoc {
    pub description: String,
    #[serde(default)]
    pub usage: Option<String>,
}

impl TemplatesFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
    }

    /// Parse and check that every required template is present
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let file: TemplatesFile =
            serde_yaml::from_str(yaml).map_err(|e| format!("invalid templates yaml: {}", e))?;

        let missing: Vec<&str> = REQUIRED_TEMPLATES
            .iter()
            .copied()
            .filter(|name| !file.templates.contains_key(*name))
            .collect();
        if !missing.is_empty() {
            return Err(format!("missing templates: {}", missing.join(", ")));
        }
        Ok(file)
    }

    pub fn builtin() -> Result<Self, String> {
        Self::from_yaml(DEFAULT_TEMPLATES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_parse() {
        let file = TemplatesFile::builtin().unwrap();
        for name in REQUIRED_TEMPLATES {
            assert!(file.templates.contains_key(*name), "missing {name}");
        }
        assert!(file.helpers.contains_key("rupiah"));
    }

    #[test]
    fn test_missing_template_is_rejected() {
        let yaml = r#"
version: "1.0"
templates:
  metrics:
    description: Model statistics
    template: "{{dataset_count}}"
"#;
        let err = TemplatesFile::from_yaml(yaml).unwrap_err();
        assert_eq!(err, "missing templates: candidate_list, comparison");
    }
}
