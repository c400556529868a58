//! Result of a probe run.

use crate::config::FailOn;

/// What a probe run observed.
///
/// Fields for steps that never ran (because an earlier step failed) keep their
/// default values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeSummary {
    /// Final status of the root page
    pub root_status: Option<u16>,
    /// URLs the root request was redirected away from
    pub redirect_history: Vec<String>,
    /// Final URL of the root request
    pub final_url: Option<String>,
    /// Inline scripts that mention the chunk loader
    pub chunk_scripts: usize,
    /// Final status of the login page
    pub login_status: Option<u16>,
    /// JavaScript files referenced by preload links
    pub preload_scripts: Vec<String>,
    /// Candidate paths that answered 200
    pub found_paths: Vec<String>,
    /// Message printed by the top-level error handler, if the run aborted
    pub error: Option<String>,
}

impl ProbeSummary {
    /// Whether the run reached the end without the top-level handler firing.
    pub fn completed(&self) -> bool {
        self.error.is_none()
    }

    /// Process exit code under the given policy.
    ///
    /// `FailOn::Never` always yields 0; `FailOn::Error` yields 2 for an
    /// aborted run.
    pub fn exit_code(&self, fail_on: FailOn) -> i32 {
        match fail_on {
            FailOn::Never => 0,
            FailOn::Error => {
                if self.completed() {
                    0
                } else {
                    2
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_on_never_ignores_errors() {
        let summary = ProbeSummary {
            error: Some("request failed".to_string()),
            ..Default::default()
        };
        assert_eq!(summary.exit_code(FailOn::Never), 0);
    }

    #[test]
    fn test_fail_on_error() {
        let aborted = ProbeSummary {
            error: Some("request failed".to_string()),
            ..Default::default()
        };
        assert_eq!(aborted.exit_code(FailOn::Error), 2);

        let completed = ProbeSummary {
            root_status: Some(404),
            ..Default::default()
        };
        assert!(completed.completed());
        assert_eq!(completed.exit_code(FailOn::Error), 0);
    }
}
