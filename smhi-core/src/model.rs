use serde::{Deserialize, Serialize};

/// Transport scheme of a request target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Plain,
    Secure,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Plain => "plain",
            Scheme::Secure => "secure",
        }
    }

    /// Scheme part of the formatted URL.
    pub fn url_scheme(&self) -> &'static str {
        match self {
            Scheme::Plain => "http",
            Scheme::Secure => "https",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scheme/host/path triple identifying the resource to fetch.
///
/// Built fresh per request and discarded once the request completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub scheme: Scheme,
    pub host: String,
    pub path: String,
}

impl Target {
    /// Format the target as a full URL.
    pub fn url(&self) -> String {
        format!("{}://{}{}", self.scheme.url_scheme(), self.host, self.path)
    }
}
