//! Configuration for the careview engine.

/// Configuration shared by the list views and access checks
///
/// One flat struct with display-safe defaults; individual views override
/// fields as needed when building their queries.
#[derive(Debug, Clone)]
pub struct CareviewConfig {
    /// Rows per page when a view does not choose its own page size
    pub default_page_size: usize,
    /// Clock-time format accepted by time-log and visit forms
    pub clock_format: String,
    /// Minimum percentage for passing a training quiz
    pub pass_mark: f64,
    /// Role name granted access to protected views
    pub admin_role: String,
}

impl Default for CareviewConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            clock_format: crate::time::CLOCK_FORMAT.to_string(),
            pass_mark: 80.0,
            admin_role: "admin".to_string(),
        }
    }
}

impl CareviewConfig {
    /// Whether a raw quiz percentage meets the configured pass mark
    ///
    /// The scorer itself only reports percentages; the pass/fail policy
    /// lives here so callers apply it uniformly.
    #[must_use]
    pub fn is_passing(&self, score: f64) -> bool {
        score >= self.pass_mark
    }
}

#[cfg(test)]
mod tests {
    use super::CareviewConfig;

    #[test]
    fn pass_mark_is_inclusive() {
        let config = CareviewConfig::default();
        assert!(config.is_passing(80.0));
        assert!(config.is_passing(100.0));
        assert!(!config.is_passing(79.9));
    }
}
