use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use folio_data::SourceId;

/// Metadata attached to every machine-readable report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub request_id: String,
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceId>,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Standard wrapper for folio's machine-readable outputs.
#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    pub meta: ReportMeta,
    pub data: T,
}

impl<T> Report<T> {
    pub fn new(data: T) -> Self {
        Self {
            meta: ReportMeta {
                request_id: Uuid::new_v4().to_string(),
                generated_at: OffsetDateTime::now_utc()
                    .format(&Rfc3339)
                    .unwrap_or_else(|_| String::from("<unformattable>")),
                source: None,
                latency_ms: 0,
                warnings: Vec::new(),
            },
            data,
        }
    }

    pub fn with_source(mut self, source: SourceId) -> Self {
        self.meta.source = Some(source);
        self
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.meta.latency_ms = latency_ms;
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.meta.warnings.push(warning.into());
        self
    }
}
