use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::error::{ChartError, ChartResult};

/// Fetches the raw text of the Test heart-rate table.
pub trait SampleSource: Debug {
    fn fetch(&self) -> ChartResult<String>;

    /// Short description used in log events.
    fn describe(&self) -> String;
}

/// Reads the table from a local file.
#[derive(Debug, Clone)]
pub struct FileSampleSource {
    path: PathBuf,
}

impl FileSampleSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SampleSource for FileSampleSource {
    fn fetch(&self) -> ChartResult<String> {
        std::fs::read_to_string(&self.path).map_err(|err| {
            ChartError::SourceUnavailable(format!("{}: {err}", self.path.display()))
        })
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Serves an in-memory table. Useful for embedded fixtures and tests.
#[derive(Debug, Clone)]
pub struct StaticSampleSource {
    text: String,
}

impl StaticSampleSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SampleSource for StaticSampleSource {
    fn fetch(&self) -> ChartResult<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} bytes", self.text.len())
    }
}

#[cfg(feature = "http-source")]
pub use http::HttpSampleSource;

#[cfg(feature = "http-source")]
mod http {
    use std::time::Duration;

    use super::SampleSource;
    use crate::error::{ChartError, ChartResult};

    /// Downloads the table with a blocking HTTP GET.
    #[derive(Debug, Clone)]
    pub struct HttpSampleSource {
        url: String,
        timeout: Duration,
    }

    impl HttpSampleSource {
        pub fn new(url: impl Into<String>) -> Self {
            Self {
                url: url.into(),
                timeout: Duration::from_secs(12),
            }
        }

        #[must_use]
        pub fn with_timeout(mut self, timeout: Duration) -> Self {
            self.timeout = timeout;
            self
        }
    }

    impl SampleSource for HttpSampleSource {
        fn fetch(&self) -> ChartResult<String> {
            let client = reqwest::blocking::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| ChartError::SourceUnavailable(format!("http client error: {e}")))?;
            client
                .get(&self.url)
                .send()
                .and_then(|r| r.error_for_status())
                .and_then(|r| r.text())
                .map_err(|e| ChartError::SourceUnavailable(format!("{}: {e}", self.url)))
        }

        fn describe(&self) -> String {
            format!("http:{}", self.url)
        }
    }
}
