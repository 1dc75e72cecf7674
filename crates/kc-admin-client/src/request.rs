//! Request assembly: path templates, parameters and query strings.

use url::Url;

use crate::error::{Error, Result};

/// A single admin API request being assembled: a path template with
/// `:name` placeholders plus the parameters that fill it.
///
/// A parameter bound with [`param`](Self::param) replaces the placeholder
/// of the same name; a parameter with no matching placeholder is appended
/// to the query string instead. Explicit query pairs are added with
/// [`query`](Self::query), or with [`query_list`](Self::query_list) for
/// the alternating key/value convention the listing endpoints document.
/// Values are percent-encoded in both positions.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    path: &'static str,
    params: Vec<(&'static str, String)>,
    query: Vec<(String, String)>,
}

impl RequestSpec {
    /// Starts a request for the given path template.
    #[must_use]
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            params: Vec::new(),
            query: Vec::new(),
        }
    }

    /// Binds a named parameter.
    #[must_use]
    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// Appends one query pair.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Appends query pairs given as alternating key/value strings.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidParameterCount`] if the list has an odd
    /// number of strings. Nothing has been sent at that point.
    pub fn query_list(mut self, params: &[&str]) -> Result<Self> {
        if params.len() % 2 != 0 {
            return Err(Error::invalid_params(format!(
                "query parameters must be key/value pairs, got {} strings",
                params.len()
            )));
        }
        for pair in params.chunks_exact(2) {
            self.query.push((pair[0].to_string(), pair[1].to_string()));
        }
        Ok(self)
    }

    /// Resolves the template against a base URL.
    ///
    /// Each `:name` segment is replaced by the parameter of that name.
    /// Parameters consumed by no placeholder are appended to the query
    /// string, after the explicit pairs were validated.
    pub(crate) fn build_url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        let mut used = vec![false; self.params.len()];

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::Config(format!("base URL {base} cannot carry a path")))?;
            segments.pop_if_empty();

            for segment in self.path.split('/').filter(|s| !s.is_empty()) {
                if let Some(name) = segment.strip_prefix(':') {
                    let index = self
                        .params
                        .iter()
                        .position(|(key, _)| *key == name)
                        .ok_or_else(|| {
                            Error::invalid_params(format!(
                                "no value supplied for path placeholder :{name}"
                            ))
                        })?;
                    used[index] = true;
                    segments.push(&self.params[index].1);
                } else {
                    segments.push(segment);
                }
            }
        }

        let mut pairs: Vec<(&str, &str)> = Vec::new();
        for (index, (key, value)) in self.params.iter().enumerate() {
            if !used[index] {
                pairs.push((*key, value.as_str()));
            }
        }
        for (key, value) in &self.query {
            pairs.push((key.as_str(), value.as_str()));
        }
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in pairs {
                serializer.append_pair(key, value);
            }
        }

        Ok(url)
    }
}
