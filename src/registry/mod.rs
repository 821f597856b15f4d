//! Route registry: which backend APIs each frontend route is expected to call
//!
//! The registry is plain data. Adding a route means adding one entry, either
//! to the built-in table or to a TOML file:
//!
//! ```toml
//! [[routes]]
//! route = "/companies/5"
//! apis = ["/api/v1/auth/me", "/api/v1/companies/5/"]
//! ```

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use builtin::BUILTIN_ROUTES;

/// A frontend route and the APIs it is expected to trigger, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    #[serde(alias = "page")]
    pub route: String,
    #[serde(default, alias = "expected_apis")]
    pub apis: Vec<String>,
}

impl RouteSpec {
    pub fn new<I, S>(route: impl Into<String>, apis: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            route: route.into(),
            apis: apis.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate route in registry: {0}")]
    DuplicateRoute(String),
    #[error("route must start with '/': {0:?}")]
    InvalidRoute(String),
    #[error("API path for route {route} must start with '/': {api:?}")]
    InvalidApi { route: String, api: String },
    #[error("failed to read registry file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse registry file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Deserialize)]
struct RegistryFile {
    #[serde(default)]
    routes: Vec<RouteSpec>,
}

/// Ordered, immutable set of [`RouteSpec`]s with unique routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRegistry {
    routes: Vec<RouteSpec>,
}

impl RouteRegistry {
    /// Validate and wrap a list of route specs
    pub fn new(routes: Vec<RouteSpec>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for spec in &routes {
            if !spec.route.starts_with('/') {
                return Err(RegistryError::InvalidRoute(spec.route.clone()));
            }
            if !seen.insert(spec.route.as_str()) {
                return Err(RegistryError::DuplicateRoute(spec.route.clone()));
            }
            if let Some(api) = spec.apis.iter().find(|a| !a.starts_with('/')) {
                return Err(RegistryError::InvalidApi {
                    route: spec.route.clone(),
                    api: api.clone(),
                });
            }
        }
        Ok(Self { routes })
    }

    /// The table shipped with the binary
    pub fn builtin() -> Self {
        let routes = BUILTIN_ROUTES
            .iter()
            .map(|(route, apis)| RouteSpec::new(*route, apis.iter().copied()))
            .collect();
        Self { routes }
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = toml::from_str(content).map_err(|source| RegistryError::Parse {
            path: origin.to_string(),
            source,
        })?;
        Self::new(file.routes)
    }

    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let origin = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| RegistryError::Read {
            path: origin.clone(),
            source,
        })?;
        Self::from_toml_str(&content, &origin)
    }

    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    pub fn get(&self, route: &str) -> Option<&RouteSpec> {
        self.routes.iter().find(|s| s.route == route)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Number of API calls across all routes, counting repeats
    pub fn total_apis(&self) -> usize {
        self.routes.iter().map(|s| s.apis.len()).sum()
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
