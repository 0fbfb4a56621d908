use super::{MetricDescriptorsResponse, TimeSeriesResult};

/// The shape a caller expects a response body to have. Selects the decode path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResponseTarget {
    /// `/api/query` data: walked by the series extractor.
    Series,
    /// Metric descriptor listing: decoded generically.
    Descriptors,
}

/// Outcome of extracting series from a query response.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesOutcome {
    Series(Vec<TimeSeriesResult>),
    /// The backend answered with an empty result list.
    NoData,
}

impl SeriesOutcome {
    pub fn is_no_data(&self) -> bool {
        matches!(self, SeriesOutcome::NoData)
    }

    pub fn len(&self) -> usize {
        match self {
            SeriesOutcome::Series(series) => series.len(),
            SeriesOutcome::NoData => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn series(&self) -> &[TimeSeriesResult] {
        match self {
            SeriesOutcome::Series(series) => series,
            SeriesOutcome::NoData => &[],
        }
    }

    pub fn into_series(self) -> Vec<TimeSeriesResult> {
        match self {
            SeriesOutcome::Series(series) => series,
            SeriesOutcome::NoData => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertedResponse {
    Series(SeriesOutcome),
    Descriptors(MetricDescriptorsResponse),
}

impl ConvertedResponse {
    pub fn target(&self) -> ResponseTarget {
        match self {
            ConvertedResponse::Series(_) => ResponseTarget::Series,
            ConvertedResponse::Descriptors(_) => ResponseTarget::Descriptors,
        }
    }

    pub fn into_series(self) -> Option<SeriesOutcome> {
        match self {
            ConvertedResponse::Series(outcome) => Some(outcome),
            ConvertedResponse::Descriptors(_) => None,
        }
    }

    pub fn into_descriptors(self) -> Option<MetricDescriptorsResponse> {
        match self {
            ConvertedResponse::Descriptors(descriptors) => Some(descriptors),
            ConvertedResponse::Series(_) => None,
        }
    }
}
