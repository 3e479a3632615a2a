use crate::core::{Advocate, AdvocateSource, Result};
use crate::utils::error::DirectoryError;
use crate::utils::validation::{validate_one_of, validate_path, validate_url};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Csv,
}

impl DataFormat {
    /// Guess from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => DataFormat::Csv,
            _ => DataFormat::Json,
        }
    }
}

impl FromStr for DataFormat {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().to_lowercase();
        validate_one_of("data.format", &value, &SUPPORTED_FORMATS)?;
        Ok(if value == "csv" {
            DataFormat::Csv
        } else {
            DataFormat::Json
        })
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormat::Json => f.write_str("json"),
            DataFormat::Csv => f.write_str("csv"),
        }
    }
}

/// A JSON dataset is either a bare array or the `{"data": [...]}` body served by
/// `GET /api/advocates`.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPayload {
    List(Vec<Advocate>),
    Wrapped { data: Vec<Advocate> },
}

/// CSV rows carry specialties as one `|`-separated column.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    first_name: String,
    last_name: String,
    city: String,
    degree: String,
    #[serde(default)]
    specialties: String,
    years_of_experience: u32,
    phone_number: u64,
}

impl From<CsvRow> for Advocate {
    fn from(row: CsvRow) -> Self {
        let specialties = row
            .specialties
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Advocate {
            first_name: row.first_name,
            last_name: row.last_name,
            city: row.city,
            degree: row.degree,
            specialties,
            years_of_experience: row.years_of_experience,
            phone_number: row.phone_number,
        }
    }
}

pub fn parse_advocates(bytes: &[u8], format: DataFormat) -> Result<Vec<Advocate>> {
    match format {
        DataFormat::Json => match serde_json::from_slice::<JsonPayload>(bytes)? {
            JsonPayload::List(advocates) | JsonPayload::Wrapped { data: advocates } => Ok(advocates),
        },
        DataFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(bytes);
            let mut advocates = Vec::new();
            for row in reader.deserialize::<CsvRow>() {
                advocates.push(row?.into());
            }
            Ok(advocates)
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: DataFormat,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, format: Option<DataFormat>) -> Self {
        let path = path.into();
        let format = format.unwrap_or_else(|| DataFormat::from_path(&path));
        Self { path, format }
    }
}

#[async_trait]
impl AdvocateSource for FileSource {
    fn describe(&self) -> String {
        format!("{} file {}", self.format, self.path.display())
    }

    async fn load(&self) -> Result<Vec<Advocate>> {
        tracing::debug!("Reading dataset file: {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        parse_advocates(&bytes, self.format)
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    format: DataFormat,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, format: Option<DataFormat>) -> Self {
        Self {
            url: url.into(),
            format: format.unwrap_or(DataFormat::Json),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl AdvocateSource for HttpSource {
    fn describe(&self) -> String {
        format!("{} endpoint {}", self.format, self.url)
    }

    async fn load(&self) -> Result<Vec<Advocate>> {
        tracing::debug!("Making API request to: {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let bytes = response.error_for_status()?.bytes().await?;
        parse_advocates(&bytes, self.format)
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Pick the source implementation for a configured location.
pub fn source_from_location(location: &str, format: Option<&str>) -> Result<Box<dyn AdvocateSource>> {
    let format = format.map(str::parse::<DataFormat>).transpose()?;

    if is_remote(location) {
        validate_url("data.source", location)?;
        Ok(Box::new(HttpSource::new(location, format)))
    } else {
        validate_path("data.source", location)?;
        Ok(Box::new(FileSource::new(location, format)))
    }
}
