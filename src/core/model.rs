//! Result Model
//!
//! Every lookup ends up as a `Resolution`; the `Report` is the single reduced
//! view over all of them that the renderers consume.

use serde::Serialize;

/// An icon collection on the search service (e.g. `cbi`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    id: String,
    prefix: String,
}

impl Collection {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let prefix = format!("{}:", id);
        Self { id, prefix }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Namespace token the service puts in front of every icon id
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Strip the collection prefix, leaving identifiers without it untouched
    pub fn strip<'a>(&self, icon: &'a str) -> &'a str {
        icon.strip_prefix(self.prefix()).unwrap_or(icon)
    }

    /// Re-attach the collection prefix to a bare icon name
    pub fn qualify(&self, bare: &str) -> String {
        format!("{}{}", self.prefix(), bare)
    }
}

/// Outcome of resolving one candidate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// `icon` is the bare icon name (prefix stripped)
    Found { app: String, icon: String },
    NotFound { app: String },
    /// Only produced when lookup failures are reported separately
    CheckFailed { app: String, reason: String },
}

impl Resolution {
    pub fn found(app: impl Into<String>, icon: impl Into<String>) -> Self {
        Resolution::Found {
            app: app.into(),
            icon: icon.into(),
        }
    }

    pub fn not_found(app: impl Into<String>) -> Self {
        Resolution::NotFound { app: app.into() }
    }

    pub fn check_failed(app: impl Into<String>, reason: impl Into<String>) -> Self {
        Resolution::CheckFailed {
            app: app.into(),
            reason: reason.into(),
        }
    }

    pub fn app(&self) -> &str {
        match self {
            Resolution::Found { app, .. }
            | Resolution::NotFound { app }
            | Resolution::CheckFailed { app, .. } => app,
        }
    }

    #[allow(dead_code)]
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found { .. })
    }
}

/// Record status as emitted in machine-readable output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Found,
    NotFound,
    CheckFailed,
}

/// One line of JSONL output
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub app: String,
    pub status: Status,

    /// Fully-qualified icon id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// An application with a matching icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundIcon {
    pub app: String,

    /// Fully-qualified icon id (e.g. `cbi:argocd`)
    pub icon: String,
}

/// An application whose lookup could not be completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedCheck {
    pub app: String,
    pub reason: String,
}

/// Summary of a full run; built once, never mutated
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub collection: String,
    pub total: usize,
    pub found_count: usize,
    pub not_found_count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_failed_count: Option<usize>,

    /// Sorted by application name
    pub found: Vec<FoundIcon>,

    /// In collection order
    pub not_found: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub check_failed: Vec<FailedCheck>,

    #[serde(skip)]
    records: Vec<Record>,
}

impl Report {
    /// Partition resolutions (given in candidate order) into report groups.
    ///
    /// `track_failures` controls whether the failed count is shown even when
    /// it is zero.
    pub fn from_resolutions(
        collection: &Collection,
        resolutions: Vec<Resolution>,
        track_failures: bool,
    ) -> Self {
        let total = resolutions.len();
        let mut found = Vec::new();
        let mut not_found = Vec::new();
        let mut check_failed = Vec::new();
        let mut records = Vec::with_capacity(total);

        for resolution in resolutions {
            match resolution {
                Resolution::Found { app, icon } => {
                    let icon = collection.qualify(&icon);
                    records.push(Record {
                        app: app.clone(),
                        status: Status::Found,
                        icon: Some(icon.clone()),
                        reason: None,
                    });
                    found.push(FoundIcon { app, icon });
                }
                Resolution::NotFound { app } => {
                    records.push(Record {
                        app: app.clone(),
                        status: Status::NotFound,
                        icon: None,
                        reason: None,
                    });
                    not_found.push(app);
                }
                Resolution::CheckFailed { app, reason } => {
                    records.push(Record {
                        app: app.clone(),
                        status: Status::CheckFailed,
                        icon: None,
                        reason: Some(reason.clone()),
                    });
                    check_failed.push(FailedCheck { app, reason });
                }
            }
        }

        found.sort_by(|a, b| a.app.cmp(&b.app));

        let track_failures = track_failures || !check_failed.is_empty();

        Self {
            collection: collection.id().to_string(),
            total,
            found_count: found.len(),
            not_found_count: not_found.len(),
            check_failed_count: track_failures.then_some(check_failed.len()),
            found,
            not_found,
            check_failed,
            records,
        }
    }

    /// Per-application records in candidate order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
