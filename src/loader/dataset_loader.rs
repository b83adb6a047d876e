use crate::loader::error::LoadError;
use crate::types::dataset::Dataset;
use crate::validation::schema::validate_dataset;
use async_compression::tokio::bufread::GzipDecoder;
use futures_util::TryStreamExt;
use log::{info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};
use tokio::task;
use tokio_util::io::StreamReader;

/// Where the static dataset document lives.
///
/// A location ending in `.gz` is treated as a gzip-compressed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetSource {
    Url(String),
    Path(PathBuf),
}

impl DatasetSource {
    fn is_gzip(&self) -> bool {
        match self {
            DatasetSource::Url(url) => url.split(['?', '#']).next().is_some_and(|p| p.ends_with(".gz")),
            DatasetSource::Path(path) => path.extension().is_some_and(|ext| ext == "gz"),
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Url(url) => write!(f, "{url}"),
            DatasetSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parses and validates a dataset document from raw bytes.
///
/// # Errors
///
/// [`LoadError::JsonParse`] for malformed JSON, [`LoadError::Validation`] when
/// the document does not have the dataset shape.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let document: serde_json::Value = serde_json::from_slice(bytes)?;
    Ok(validate_dataset(&document)?)
}

/// Fetches or reads the dataset document and validates it.
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    download_client: Client,
}

impl DatasetLoader {
    pub fn new() -> DatasetLoader {
        DatasetLoader {
            download_client: Client::new(),
        }
    }

    /// Uses a preconfigured HTTP client, e.g. one with custom headers or proxy.
    pub fn with_client(download_client: Client) -> DatasetLoader {
        DatasetLoader { download_client }
    }

    /// Loads the full dataset from `source`.
    ///
    /// Parsing and validation run on the blocking thread pool since the
    /// document can be large. Failures are returned as-is and never retried.
    pub async fn load(&self, source: &DatasetSource) -> Result<Dataset, LoadError> {
        let raw_bytes = match source {
            DatasetSource::Url(url) => self.download(url, source.is_gzip()).await?,
            DatasetSource::Path(path) => Self::read_file(path, source.is_gzip()).await?,
        };

        let parse_start = Instant::now();
        let byte_count = raw_bytes.len();
        let dataset = task::spawn_blocking(move || parse_dataset(&raw_bytes)).await??;
        info!(
            "Parsed {} stations ({} records, {} bytes) from {} in {:?}",
            dataset.len(),
            dataset.record_count(),
            byte_count,
            source,
            parse_start.elapsed()
        );
        Ok(dataset)
    }

    /// Downloads the document, decompressing it when `gzip` is set.
    async fn download(&self, url: &str, gzip: bool) -> Result<Vec<u8>, LoadError> {
        info!("Downloading dataset from {}", url);

        let response = self
            .download_client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    LoadError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    LoadError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let stream = response
            .bytes_stream()
            .map_err(std::io::Error::other);
        let reader = StreamReader::new(stream);
        let bytes = read_all(reader, gzip)
            .await
            .map_err(|e| LoadError::Download(url.to_string(), e))?;
        info!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }

    async fn read_file(path: &Path, gzip: bool) -> Result<Vec<u8>, LoadError> {
        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| LoadError::FileRead(path.to_path_buf(), e))?;
        if !gzip {
            return Ok(raw);
        }
        read_all(raw.as_slice(), true)
            .await
            .map_err(|e| LoadError::FileRead(path.to_path_buf(), e))
    }
}

async fn read_all<R>(reader: R, gzip: bool) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = Vec::new();
    if gzip {
        GzipDecoder::new(BufReader::new(reader))
            .read_to_end(&mut buffer)
            .await?;
    } else {
        let mut reader = reader;
        reader.read_to_end(&mut buffer).await?;
    }
    Ok(buffer)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::validation::error::ViolationKind;
    use async_compression::tokio::write::GzipEncoder;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    pub(crate) const STATION_X: &str = r#"{
        "X": { "name": "Station X", "temps": [
            { "date": "2000-06-01", "day": 1, "month": 6, "year": 2000, "avg": 20, "high": 26, "low": 14 },
            { "date": "2000-06-15", "day": 15, "month": 6, "year": 2000, "avg": 25, "high": 31, "low": 18 },
            { "date": "2000-07-31", "day": 31, "month": 7, "year": 2000, "avg": 18, "high": 23, "low": 12 }
        ]}
    }"#;

    pub(crate) fn dataset_file(contents: &[u8], suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(contents).expect("write temp file");
        file.flush().expect("flush temp file");
        file
    }

    #[test]
    fn test_parse_dataset() -> Result<(), LoadError> {
        let dataset = parse_dataset(STATION_X.as_bytes())?;
        assert_eq!(dataset.station("X").unwrap().temps().len(), 3);
        Ok(())
    }

    #[test]
    fn test_parse_dataset_reports_syntax_and_shape_separately() {
        assert!(matches!(parse_dataset(b"{ not json"), Err(LoadError::JsonParse(_))));
        match parse_dataset(br#"{ "X": { "name": "X", "temps": [] } }"#) {
            Err(LoadError::Validation(err)) => assert_eq!(err.kind(), &ViolationKind::EmptySeries),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_plain_file() -> Result<(), LoadError> {
        let file = dataset_file(STATION_X.as_bytes(), ".json");
        let source = DatasetSource::Path(file.path().to_path_buf());
        let dataset = DatasetLoader::new().load(&source).await?;
        assert_eq!(dataset.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_gzip_file() -> Result<(), LoadError> {
        let mut encoder = GzipEncoder::new(Vec::new());
        encoder.write_all(STATION_X.as_bytes()).await.unwrap();
        encoder.shutdown().await.unwrap();
        let file = dataset_file(&encoder.into_inner(), ".json.gz");

        let source = DatasetSource::Path(file.path().to_path_buf());
        let dataset = DatasetLoader::new().load(&source).await?;
        assert_eq!(dataset.record_count(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = DatasetSource::Path(PathBuf::from("/definitely/not/here/dataset.json"));
        let err = DatasetLoader::new().load(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::FileRead(..)));
    }

    #[tokio::test]
    async fn test_unreachable_url_is_a_network_error() {
        let source = DatasetSource::Url("http://127.0.0.1:9/dataset.json".to_string());
        let err = local_loader().load(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::NetworkRequest(..)), "got {err:?}");
    }

    /// Serves `response` verbatim to the first connection and returns the base URL.
    async fn serve_once(response: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            socket.write_all(&response).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}")
    }

    fn local_loader() -> DatasetLoader {
        DatasetLoader::with_client(Client::builder().no_proxy().build().unwrap())
    }

    fn http_response(status_line: &str, body: &[u8]) -> Vec<u8> {
        let mut response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);
        response
    }

    #[tokio::test]
    async fn test_download_plain_json() -> Result<(), LoadError> {
        let base = serve_once(http_response("200 OK", STATION_X.as_bytes())).await;
        let source = DatasetSource::Url(format!("{base}/dataset.json"));
        let dataset = local_loader().load(&source).await?;
        assert_eq!(dataset.record_count(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let base = serve_once(http_response("404 Not Found", b"")).await;
        let source = DatasetSource::Url(format!("{base}/dataset.json"));
        match local_loader().load(&source).await {
            Err(LoadError::HttpStatus { url, status, .. }) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert!(url.ends_with("/dataset.json"));
            }
            other => panic!("expected an HTTP status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_corrupt_gzip_download() {
        let base = serve_once(http_response("200 OK", b"this is not gzip data")).await;
        let source = DatasetSource::Url(format!("{base}/dataset.json.gz"));
        let err = local_loader().load(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Download(..)), "got {err:?}");
    }

    #[test]
    fn test_gzip_detection() {
        assert!(DatasetSource::Url("https://x.test/data.json.gz?v=3".into()).is_gzip());
        assert!(!DatasetSource::Url("https://x.test/data.json".into()).is_gzip());
        assert!(DatasetSource::Path(PathBuf::from("data/dataset.json.gz")).is_gzip());
    }
}
