//! Application lookup filters
//!
//! The lookup accepts at most one of `id`, `label` and `label_prefix`. The raw
//! optional fields are folded into [`AppFilter`] once, at construction, so the
//! rest of the read path matches on a variant instead of probing fields.

use std::fmt;

use crate::{error::Result, ids::AppId, OktaError};

/// Status filter expression Okta accepts on `GET /api/v1/apps`
pub const ACTIVE_STATUS_FILTER: &str = "status eq \"ACTIVE\"";

/// Which application to look up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppFilter {
    /// Exact application id, fetched directly
    ById(AppId),
    /// Exact label; the first search result must carry this label
    ByLabel(String),
    /// Label prefix; the first search result is accepted as-is
    ByLabelPrefix(String),
    /// No narrowing filter; the first search result is accepted as-is
    Any,
}

impl AppFilter {
    /// Search text sent as the `q` parameter, if any
    pub fn search_text(&self) -> Option<&str> {
        match self {
            Self::ByLabel(label) => Some(label),
            Self::ByLabelPrefix(prefix) => Some(prefix),
            Self::ById(_) | Self::Any => None,
        }
    }
}

/// Validated lookup criteria for one read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub filter: AppFilter,
    /// Restrict searches to applications in ACTIVE status
    pub active_only: bool,
    /// Skip listing users assigned to the application
    pub skip_users: bool,
    /// Skip listing groups assigned to the application
    pub skip_groups: bool,
}

impl FilterCriteria {
    pub fn new(filter: AppFilter) -> Self {
        Self {
            filter,
            active_only: true,
            skip_users: false,
            skip_groups: false,
        }
    }

    /// Build criteria from the raw optional attributes.
    ///
    /// Empty strings count as unset. Supplying more than one of `id`, `label`
    /// and `label_prefix` is rejected with [`OktaError::InvalidFilter`].
    pub fn from_fields(
        id: Option<&str>,
        label: Option<&str>,
        label_prefix: Option<&str>,
        active_only: bool,
    ) -> Result<Self> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|s| !s.is_empty())
        }

        let fields = [
            ("id", present(id)),
            ("label", present(label)),
            ("label_prefix", present(label_prefix)),
        ];

        let set: Vec<(&str, &str)> = fields
            .iter()
            .filter_map(|(name, value)| value.map(|v| (*name, v)))
            .collect();

        if set.len() > 1 {
            let described: Vec<String> = set
                .iter()
                .map(|(name, value)| format!("{}=\"{}\"", name, value))
                .collect();
            return Err(OktaError::invalid_filter(format!(
                "only one of id, label, label_prefix may be set (got {})",
                described.join(", ")
            )));
        }

        let filter = match set.first() {
            Some(("id", v)) => AppFilter::ById(AppId::new(*v)),
            Some(("label", v)) => AppFilter::ByLabel(v.to_string()),
            Some((_, v)) => AppFilter::ByLabelPrefix(v.to_string()),
            None => AppFilter::Any,
        };

        Ok(Self {
            active_only,
            ..Self::new(filter)
        })
    }

    pub fn with_skip_users(mut self, skip: bool) -> Self {
        self.skip_users = skip;
        self
    }

    pub fn with_skip_groups(mut self, skip: bool) -> Self {
        self.skip_groups = skip;
        self
    }

    /// Query for the search path: a single result, optionally status-filtered
    pub fn search_query(&self) -> AppQuery {
        AppQuery {
            limit: Some(1),
            filter: self.active_only.then(|| ACTIVE_STATUS_FILTER.to_string()),
            q: self.filter.search_text().map(str::to_string),
        }
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (id, label, prefix) = match &self.filter {
            AppFilter::ById(id) => (id.as_str(), "", ""),
            AppFilter::ByLabel(label) => ("", label.as_str(), ""),
            AppFilter::ByLabelPrefix(prefix) => ("", "", prefix.as_str()),
            AppFilter::Any => ("", "", ""),
        };
        write!(
            f,
            "id: {}, label: {}, label_prefix: {}, active_only: {}",
            id, label, prefix, self.active_only
        )
    }
}

/// Query parameters for `GET /api/v1/apps`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppQuery {
    pub limit: Option<u32>,
    pub filter: Option<String>,
    pub q: Option<String>,
}

impl AppQuery {
    /// Render as a query string including the leading `?`, or empty
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }
        if let Some(filter) = &self.filter {
            parts.push(format!("filter={}", urlencoding::encode(filter)));
        }
        if let Some(q) = &self.q {
            parts.push(format!("q={}", urlencoding::encode(q)));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}
