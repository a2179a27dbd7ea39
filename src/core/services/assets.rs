//=========================================================================
// Asset Service
//=========================================================================
//
// Resolves logical resource names ("Spaceship", "JetParticle",
// "sfx_point.wav") to loadable paths.
//
// Resolution is explicit and fallible: callers receive an `AssetError`
// instead of a missing-file crash deep inside a loader.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

//=== External Crates =====================================================

use log::{debug, trace};

//=== AssetKind ===========================================================

/// Resource category; decides the file extension appended on lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Sprite image, looked up as `<name>.png`.
    Texture,

    /// Particle emitter definition, looked up as `<name>.sks`.
    Emitter,

    /// Sound effect or music; the name already carries its extension.
    Audio,
}

impl AssetKind {
    fn file_name(self, name: &str) -> String {
        match self {
            Self::Texture => format!("{name}.png"),
            Self::Emitter => format!("{name}.sks"),
            Self::Audio => name.to_owned(),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Texture => write!(f, "texture"),
            Self::Emitter => write!(f, "emitter"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

//=== AssetError ==========================================================

/// Asset resolution failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// No bundle entry matches the requested name and kind.
    NotFound { name: String, kind: AssetKind },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name, kind } => write!(f, "{} asset '{}' not found", kind, name),
        }
    }
}

impl std::error::Error for AssetError {}

//=== AssetService ========================================================

pub trait AssetService {
    /// Resolves `name` of `kind` to a loadable path.
    fn resolve(&self, name: &str, kind: AssetKind) -> Result<PathBuf, AssetError>;
}

//=== AssetBundle =========================================================

/// A flat directory of resources and the file names known to exist in it.
///
/// Built either by scanning a directory on disk or by listing entries
/// explicitly (for builds that ship their assets elsewhere).
#[derive(Debug, Clone)]
pub struct AssetBundle {
    root: PathBuf,
    entries: BTreeSet<String>,
}

impl AssetBundle {
    //--- Construction -----------------------------------------------------

    /// Creates an empty bundle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: BTreeSet::new(),
        }
    }

    /// Adds a file name (relative to the root) to the bundle.
    pub fn with_entry(mut self, file_name: impl Into<String>) -> Self {
        self.entries.insert(file_name.into());
        self
    }

    /// Builds a bundle from the regular files directly inside `root`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the directory cannot be read.
    pub fn scan(root: impl Into<PathBuf>) -> io::Result<Self> {
        let mut bundle = Self::new(root);

        for entry in std::fs::read_dir(&bundle.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                trace!(target: "assets", "Found {}", name);
                bundle.entries.insert(name.to_owned());
            }
        }

        debug!(
            target: "assets",
            "Scanned {} ({} entries)",
            bundle.root.display(),
            bundle.entries.len()
        );
        Ok(bundle)
    }

    //--- Accessors --------------------------------------------------------

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AssetService for AssetBundle {
    fn resolve(&self, name: &str, kind: AssetKind) -> Result<PathBuf, AssetError> {
        let file_name = kind.file_name(name);

        if self.entries.contains(&file_name) {
            Ok(self.root.join(file_name))
        } else {
            Err(AssetError::NotFound {
                name: name.to_owned(),
                kind,
            })
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
