//! Document sources and the registry the UI looks them up in.

use std::{fmt, fs, io, path::PathBuf, sync::Arc};

use dashmap::DashMap;
use thiserror::Error;
use tracing::debug;

/// Result alias for registry lookups.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error raised when a document cannot be produced for an instance name.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Nothing is registered under the requested name.
    #[error("no document registered under `{0}`")]
    NotRegistered(String),
    /// The document file could not be read.
    #[error("failed to read document `{}`", .path.display())]
    Unreadable {
        /// Location of the document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The OpenAPI document could not be serialized.
    #[error("failed to serialize OpenAPI document")]
    Serialize(#[source] serde_json::Error),
}

/// A source of an API definition document.
pub trait Swagger: Send + Sync {
    /// Produce the document, usually as JSON.
    fn read_doc(&self) -> RegistryResult<String>;
}

impl Swagger for String {
    fn read_doc(&self) -> RegistryResult<String> {
        Ok(self.clone())
    }
}

impl Swagger for &'static str {
    fn read_doc(&self) -> RegistryResult<String> {
        Ok((*self).to_owned())
    }
}

impl Swagger for utoipa::openapi::OpenApi {
    fn read_doc(&self) -> RegistryResult<String> {
        self.to_pretty_json().map_err(RegistryError::Serialize)
    }
}

/// Document read from disk on every request, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    /// Serve the document stored at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Swagger for DocumentFile {
    fn read_doc(&self) -> RegistryResult<String> {
        fs::read_to_string(&self.path).map_err(|source| RegistryError::Unreadable {
            path: self.path.clone(),
            source,
        })
    }
}

/// Lookup of documents by instance name.
pub trait DocumentRegistry: Send + Sync {
    /// Return the document registered under `name`.
    fn read_doc(&self, name: &str) -> RegistryResult<String>;
}

/// In-process registry backed by a concurrent map.
#[derive(Default, Clone)]
pub struct MemoryRegistry {
    docs: Arc<DashMap<String, Arc<dyn Swagger>>>,
}

impl MemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `doc` under `name`, replacing any previous registration.
    pub fn register(&self, name: impl Into<String>, doc: impl Swagger + 'static) {
        let name = name.into();
        debug!(instance = %name, "registering document");
        self.docs.insert(name, Arc::new(doc));
    }

    /// Remove the document registered under `name`; returns whether one existed.
    pub fn unregister(&self, name: &str) -> bool {
        self.docs.remove(name).is_some()
    }

    /// Names of all registered documents, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names = self
            .docs
            .iter()
            .map(|entry| entry.key().clone())
            .collect::<Vec<_>>();
        names.sort();
        names
    }
}

impl DocumentRegistry for MemoryRegistry {
    fn read_doc(&self, name: &str) -> RegistryResult<String> {
        // Clone the handle out so the shard lock is not held while the document renders.
        let doc = self
            .docs
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| RegistryError::NotRegistered(name.to_owned()))?;
        doc.read_doc()
    }
}

impl fmt::Debug for MemoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRegistry")
            .field("names", &self.names())
            .finish()
    }
}
