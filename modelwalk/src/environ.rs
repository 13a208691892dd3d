//! Request environment and the request collaborator.
//!
//! The surrounding web layer hands traversal an [`Environ`]: string variables
//! such as `PATH_INFO` and the virtual-host root, plus the match dictionary
//! produced by route matching, if any.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::ModelRef;

/// Environment key holding the request path.
pub const PATH_INFO: &str = "PATH_INFO";

/// Default environment key holding the virtual-root path prefix.
pub const VH_ROOT_KEY: &str = "HTTP_X_VHM_ROOT";

/// Match dictionary key holding the path to traverse.
pub const TRAVERSE_KEY: &str = "traverse";

/// Match dictionary key holding the subpath.
pub const SUBPATH_KEY: &str = "subpath";

/// A path given either as a slash-separated string or as decoded segments.
///
/// Also used for match dictionary values, where a `*stararg` route variable
/// yields segments and a plain `:name` variable yields text.
///
/// # Examples
///
/// ```
/// use modelwalk::PathSpec;
///
/// assert_eq!(PathSpec::from("/a/b"), PathSpec::Text("/a/b".into()));
/// assert_eq!(
///     PathSpec::from(vec!["", "a"]),
///     PathSpec::Segments(vec![String::new(), "a".into()])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    /// Percent-encoded, slash-separated text.
    Text(String),
    /// Decoded segments.
    Segments(Vec<String>),
}

impl PathSpec {
    /// The text form, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Segments(_) => None,
        }
    }
}

impl From<&str> for PathSpec {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for PathSpec {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Vec<String>> for PathSpec {
    fn from(value: Vec<String>) -> Self {
        Self::Segments(value)
    }
}

impl From<Vec<&str>> for PathSpec {
    fn from(value: Vec<&str>) -> Self {
        Self::Segments(value.into_iter().map(ToString::to_string).collect())
    }
}

impl From<&[&str]> for PathSpec {
    fn from(value: &[&str]) -> Self {
        Self::Segments(value.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathSpec {
    fn from(value: [&str; N]) -> Self {
        Self::Segments(value.iter().map(ToString::to_string).collect())
    }
}

impl From<&[String]> for PathSpec {
    fn from(value: &[String]) -> Self {
        Self::Segments(value.to_vec())
    }
}

/// Values captured by route matching, by variable name.
pub type MatchDict = BTreeMap<String, PathSpec>;

/// The request environment seen by traversal.
///
/// # Examples
///
/// ```
/// use modelwalk::Environ;
///
/// let environ = Environ::for_path("/a/b").with_var("HTTP_X_VHM_ROOT", "/site");
/// assert_eq!(environ.path_info(), Some("/a/b"));
/// assert_eq!(environ.get("HTTP_X_VHM_ROOT"), Some("/site"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environ {
    vars: HashMap<String, String>,
    matchdict: Option<MatchDict>,
}

impl Environ {
    /// An empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment whose `PATH_INFO` is `path`.
    #[must_use]
    pub fn for_path(path: impl Into<String>) -> Self {
        Self::new().with_var(PATH_INFO, path)
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`set_matchdict`](Self::set_matchdict).
    #[must_use]
    pub fn with_matchdict(mut self, matchdict: MatchDict) -> Self {
        self.set_matchdict(matchdict);
        self
    }

    /// Set a variable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove a variable, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// A variable's value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether a variable is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// The `PATH_INFO` variable.
    #[must_use]
    pub fn path_info(&self) -> Option<&str> {
        self.get(PATH_INFO)
    }

    /// Record the result of route matching.
    pub fn set_matchdict(&mut self, matchdict: MatchDict) {
        self.matchdict = Some(matchdict);
    }

    /// The route match dictionary, present only when a route matched.
    #[must_use]
    pub fn matchdict(&self) -> Option<&MatchDict> {
        self.matchdict.as_ref()
    }
}

/// The web request as seen by this crate.
///
/// Only the environment, the application URL and an optional cached root
/// are needed; everything else about the request stays opaque.
pub trait Request {
    /// The request environment.
    fn environ(&self) -> &Environ;

    /// Scheme, host and script prefix, never ending in `/`.
    fn application_url(&self) -> &str;

    /// The physical root found for this request, if already known.
    fn root(&self) -> Option<ModelRef> {
        None
    }

    /// The route match dictionary.
    fn matchdict(&self) -> Option<&MatchDict> {
        self.environ().matchdict()
    }
}

/// A plain [`Request`] implementation.
///
/// # Examples
///
/// ```
/// use modelwalk::{BasicRequest, Request};
///
/// let request = BasicRequest::blank("/a/b").with_application_url("https://example.com/app/");
/// assert_eq!(request.application_url(), "https://example.com/app");
/// assert_eq!(request.environ().path_info(), Some("/a/b"));
/// ```
#[derive(Debug, Clone)]
pub struct BasicRequest {
    environ: Environ,
    application_url: String,
    root: Option<ModelRef>,
}

impl BasicRequest {
    /// Application URL used by [`blank`](Self::blank).
    pub const DEFAULT_APPLICATION_URL: &'static str = "http://localhost";

    /// A request for `path` on `http://localhost`.
    #[must_use]
    pub fn blank(path: impl Into<String>) -> Self {
        Self::new(Environ::for_path(path))
    }

    /// A request with the given environment on `http://localhost`.
    #[must_use]
    pub fn new(environ: Environ) -> Self {
        Self {
            environ,
            application_url: Self::DEFAULT_APPLICATION_URL.to_string(),
            root: None,
        }
    }

    /// Set the application URL. Trailing slashes are removed.
    #[must_use]
    pub fn with_application_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.application_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Cache the physical root on the request.
    #[must_use]
    pub fn with_root(mut self, root: ModelRef) -> Self {
        self.root = Some(root);
        self
    }

    /// Mutable access to the environment.
    pub fn environ_mut(&mut self) -> &mut Environ {
        &mut self.environ
    }
}

impl Request for BasicRequest {
    fn environ(&self) -> &Environ {
        &self.environ
    }

    fn application_url(&self) -> &str {
        &self.application_url
    }

    fn root(&self) -> Option<ModelRef> {
        self.root.clone()
    }
}
