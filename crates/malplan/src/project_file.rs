//! Loading and saving project files
//!
//! A project file is a serialized [`Project`] in YAML (`.yaml`, `.yml`) or
//! JSON (`.json`). Files with any other extension are read as YAML.

use std::fs;
use std::path::{Path, PathBuf};

use malplan_core::model::Project;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_saphyr::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize project: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormat {
    Yaml,
    Json,
}

impl ProjectFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

pub fn from_yaml(yaml: &str) -> Result<Project, serde_saphyr::Error> {
    serde_saphyr::from_str(yaml)
}

pub fn to_yaml(project: &Project) -> Result<String, serde_saphyr::ser::Error> {
    serde_saphyr::to_string(project)
}

/// Read a project, choosing the parser from the file extension
pub fn load_project(path: &Path) -> Result<Project, ProjectFileError> {
    let content = fs::read_to_string(path).map_err(|source| ProjectFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let project = match ProjectFormat::from_path(path) {
        ProjectFormat::Yaml => from_yaml(&content).map_err(|source| ProjectFileError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
        ProjectFormat::Json => {
            serde_json::from_str(&content).map_err(|source| ProjectFileError::Json {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    tracing::debug!(
        path = %path.display(),
        regions = project.regions.len(),
        "Loaded project"
    );
    Ok(project)
}

/// Write a project in the format implied by the file extension
pub fn save_project(project: &Project, path: &Path) -> Result<(), ProjectFileError> {
    let content = match ProjectFormat::from_path(path) {
        ProjectFormat::Yaml => {
            to_yaml(project).map_err(|e| ProjectFileError::Serialize(e.to_string()))?
        }
        ProjectFormat::Json => serde_json::to_string_pretty(project)
            .map_err(|e| ProjectFileError::Serialize(e.to_string()))?,
    };
    fs::write(path, content).map_err(|source| ProjectFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use malplan_core::config::{ProjectBuilder, RegionBuilder};
    use malplan_core::model::Scenario;

    const YAML_PROJECT: &str = r#"
name: Coastal
budget: 250000
regions:
  - name: Delta
    formValues:
      population: 12000
      routine_coverage: true
      procurement_buffer: 7
    cases:
      - scenario: no_intervention
        year: 2
        casesPer1000: 400
      - scenario: irs_only
        year: 2
        casesPer1000: 310
"#;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ProjectFormat::from_path(Path::new("a.json")), ProjectFormat::Json);
        assert_eq!(ProjectFormat::from_path(Path::new("a.JSON")), ProjectFormat::Json);
        assert_eq!(ProjectFormat::from_path(Path::new("a.yml")), ProjectFormat::Yaml);
        assert_eq!(ProjectFormat::from_path(Path::new("project")), ProjectFormat::Yaml);
    }

    #[test]
    fn test_load_yaml_project() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coastal.yaml");
        fs::write(&path, YAML_PROJECT).unwrap();

        let project = load_project(&path).unwrap();
        assert_eq!(project.name, "Coastal");
        assert_eq!(project.budget, Some(250_000.0));

        let delta = project.region("Delta").unwrap();
        assert_eq!(delta.population(), Some(12_000.0));
        assert_eq!(delta.cases.len(), 2);
        assert_eq!(delta.cases[1].scenario, Scenario::IrsOnly);
        assert_eq!(delta.cases[1].cases_per_1000, 310.0);
    }

    #[test]
    fn test_json_save_and_load() {
        let project = ProjectBuilder::new("Inland")
            .region(
                RegionBuilder::new("Highlands")
                    .population(8_000.0)
                    .post_intervention_cases(Scenario::NoIntervention, [100.0, 90.0, 80.0]),
            )
            .build();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inland.json");
        save_project(&project, &path).unwrap();

        assert_eq!(load_project(&path).unwrap(), project);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = load_project(&path).unwrap_err();
        assert!(matches!(err, ProjectFileError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_project(&path),
            Err(ProjectFileError::Json { .. })
        ));
    }
}
