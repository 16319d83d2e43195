//=========================================================================
// Room Data
//=========================================================================
//
// Raw `.RDF` room blobs. The whole file is loaded once and read with
// little-endian 16-bit word accessors.
//
// Layout (known offsets):
//   0xaa + crew * 4      beam-in x (word)
//   0xaa + crew * 4 + 2  beam-in y (word)
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

//=== External Crates =====================================================

use log::{debug, warn};
use thiserror::Error;

//=== Constants ===========================================================

/// Offset of crewman 0's beam-in coordinates.
const BEAM_IN_BASE: usize = 0xaa;

/// Bytes per beam-in record.
const BEAM_IN_STRIDE: usize = 4;

//=== RoomError ===========================================================

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("failed to load room file {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("word at offset {offset:#x} lies outside a {len}-byte room file")]
    OutOfRange { offset: usize, len: usize },
}

//=== ResourceLoader ======================================================

/// Source of named game files.
pub trait ResourceLoader {
    fn load(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// Reads files from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirLoader {
    root: PathBuf,
}

impl DirLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceLoader for DirLoader {
    fn load(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(name))
    }
}

/// In-memory files, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, data: Vec<u8>) -> &mut Self {
        self.files.insert(name.into(), data);
        self
    }
}

impl ResourceLoader for MemoryLoader {
    fn load(&self, name: &str) -> io::Result<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }
}

//=== Point ===============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

//=== Room ================================================================

/// A loaded room file.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    data: Vec<u8>,
}

impl Room {
    /// Loads `<name>.RDF`.
    pub fn load(loader: &impl ResourceLoader, name: &str) -> Result<Self, RoomError> {
        let file = format!("{}.RDF", name);
        let data = loader.load(&file).map_err(|source| {
            warn!(target: "room", "Cannot read {}: {}", file, source);
            RoomError::Io { name: file.clone(), source }
        })?;

        debug!(target: "room", "Loaded {} ({} bytes)", file, data.len());
        Ok(Self::from_bytes(name, data))
    }

    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self { name: name.into(), data }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Little-endian word at `offset`.
    pub fn read_word(&self, offset: usize) -> Result<u16, RoomError> {
        offset
            .checked_add(2)
            .and_then(|end| self.data.get(offset..end))
            .map(|bytes| u16::from_le_bytes([bytes[0], bytes[1]]))
            .ok_or(RoomError::OutOfRange { offset, len: self.data.len() })
    }

    /// Where `crewman` appears when beaming into the room.
    pub fn beam_in_position(&self, crewman: usize) -> Result<Point, RoomError> {
        let base = crewman.saturating_mul(BEAM_IN_STRIDE).saturating_add(BEAM_IN_BASE);
        Ok(Point { x: self.read_word(base)?, y: self.read_word(base.saturating_add(2))? })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
