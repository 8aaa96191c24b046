use crate::analyze::Analyzer;
use crate::design::params::DesignParameters;
use crate::foundation::error::PosterResult;

/// Try `primary`; on any error log it and ask `fallback` instead.
#[derive(Clone, Debug, Default)]
pub struct FallbackAnalyzer<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Analyzer, F: Analyzer> FallbackAnalyzer<P, F> {
    /// Chain two analyzers.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Analyzer, F: Analyzer> Analyzer for FallbackAnalyzer<P, F> {
    fn analyze(&self, city: &str, memory: &str) -> PosterResult<DesignParameters> {
        match self.primary.analyze(city, memory) {
            Ok(params) => Ok(params),
            Err(err) => {
                tracing::warn!(error = %err, "primary analyzer failed, using fallback");
                self.fallback.analyze(city, memory)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analyze/fallback.rs"]
mod tests;
