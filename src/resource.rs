//! Static resources under the configured content root.
//!
//! A request path maps 1:1 to a file beneath the root. When the final path
//! segment has no `.`, `.html` is appended. Paths that would leave the root,
//! through `..` or a symlink, are reported as not found.

use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::http::mime;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("no resource at {0}")]
    NotFound(String),
    #[error("{0} resolves outside the content root")]
    OutsideRoot(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ResourceError {
    /// Whether the client should see this as a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResourceError::NotFound(_) | ResourceError::OutsideRoot(_))
    }
}

/// A loaded static file and the content type derived from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub body: String,
    pub content_type: &'static str,
}

#[derive(Debug, Clone)]
pub struct StaticResourceResolver {
    root: PathBuf,
}

impl StaticResourceResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a request path to a file path under the root, without touching
    /// the filesystem.
    pub fn resource_path(&self, request_path: &str) -> Result<PathBuf, ResourceError> {
        let mut relative = PathBuf::new();
        for component in Path::new(request_path.trim_start_matches('/')).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                _ => return Err(ResourceError::OutsideRoot(request_path.to_string())),
            }
        }

        // A trailing `/` names a directory, and directories are never served.
        // `components()` would otherwise drop it and `/index.html/` would
        // resolve to the file.
        if relative.as_os_str().is_empty() || request_path.ends_with('/') {
            return Err(ResourceError::NotFound(request_path.to_string()));
        }

        let has_extension = relative
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.contains('.'));
        if !has_extension {
            let mut name = relative.file_name().unwrap_or_default().to_os_string();
            name.push(".html");
            relative.set_file_name(name);
        }

        Ok(self.root.join(relative))
    }

    /// Loads the resource for `request_path`.
    ///
    /// The file is read as text; invalid UTF-8 is replaced. Lines are joined
    /// with `\n` and a trailing newline is appended.
    pub fn resolve(&self, request_path: &str) -> Result<Resource, ResourceError> {
        let path = self.resource_path(request_path)?;

        if !path.is_file() {
            return Err(ResourceError::NotFound(request_path.to_string()));
        }

        let io_err = |source| ResourceError::Io {
            path: path.clone(),
            source,
        };
        let root = self.root.canonicalize().map_err(io_err)?;
        let canonical = path.canonicalize().map_err(io_err)?;
        if !canonical.starts_with(&root) {
            tracing::warn!(path = %request_path, "Static path escapes content root");
            return Err(ResourceError::OutsideRoot(request_path.to_string()));
        }

        let bytes = std::fs::read(&canonical).map_err(io_err)?;
        let text = String::from_utf8_lossy(&bytes);
        let mut body = text.lines().collect::<Vec<_>>().join("\n");
        body.push('\n');

        Ok(Resource {
            body,
            content_type: mime::content_type_for(&path),
        })
    }
}
