use serde::{Deserialize, Serialize};

/// Metric names listed by OpenTSDB's `/api/suggest`. Decoded as-is, never run through the
/// series extractor.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricDescriptorsResponse {
    pub(crate) metrics: Vec<String>,
}

impl MetricDescriptorsResponse {
    pub fn new(metrics: Vec<String>) -> Self {
        MetricDescriptorsResponse { metrics }
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl From<MetricDescriptorsResponse> for Vec<String> {
    fn from(response: MetricDescriptorsResponse) -> Self {
        response.metrics
    }
}
