use crate::error::{AppError, Result};
use crate::models::{
    Employee, PayrollPeriod, Payslip, RecordSnapshot, SalaryComponent, SalaryStructure,
};
use crate::providers::RecordSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Snapshot file format, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotFormat {
    Json,
    Toml,
}

impl SnapshotFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(SnapshotFormat::Json),
            Some("toml") => Ok(SnapshotFormat::Toml),
            other => Err(AppError::Configuration(format!(
                "Unsupported snapshot file extension {:?} for {}",
                other,
                path.display()
            ))),
        }
    }
}

/// Record source reading a JSON or TOML snapshot document from disk.
///
/// The document has one array per collection (`employees`,
/// `salary_structures`, `salary_components`, `payroll_periods`, `payslips`);
/// missing arrays are treated as empty. Every record is validated on load.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<RecordSnapshot> {
        let format = SnapshotFormat::from_path(&self.path)?;
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::NotFound(format!("Snapshot file {}", self.path.display()))
            } else {
                AppError::Io(e)
            }
        })?;

        let snapshot: RecordSnapshot = match format {
            SnapshotFormat::Json => serde_json::from_str(&contents)?,
            SnapshotFormat::Toml => toml::from_str(&contents)?,
        };
        snapshot.validate_records()?;

        tracing::debug!(
            path = %self.path.display(),
            records = snapshot.len(),
            "Snapshot file loaded"
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl RecordSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn employees(&self) -> Result<Vec<Employee>> {
        Ok(self.load().await?.employees)
    }

    async fn salary_structures(&self) -> Result<Vec<SalaryStructure>> {
        Ok(self.load().await?.salary_structures)
    }

    async fn salary_components(&self) -> Result<Vec<SalaryComponent>> {
        Ok(self.load().await?.salary_components)
    }

    async fn payroll_periods(&self) -> Result<Vec<PayrollPeriod>> {
        Ok(self.load().await?.payroll_periods)
    }

    async fn payslips(&self) -> Result<Vec<Payslip>> {
        Ok(self.load().await?.payslips)
    }

    async fn snapshot(&self) -> Result<RecordSnapshot> {
        self.load().await
    }
}
