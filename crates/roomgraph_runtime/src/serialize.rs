//! Scene document serialization and deserialization.
//!
//! Documents are JSON by default. `MessagePack` (with named fields, so the
//! document keeps its keys) is used for files ending in `.msgpack` or `.mp`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use roomgraph_foundation::{DocumentFormat, Error, ErrorContext, Result};
use roomgraph_scene::SceneGraph;

/// Picks the wire format for a file path by its extension.
#[must_use]
pub fn format_for_path(path: &Path) -> DocumentFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("msgpack" | "mp") => DocumentFormat::MessagePack,
        _ => DocumentFormat::Json,
    }
}

/// Parses a scene graph from JSON text.
///
/// # Errors
///
/// Returns a parse error if the text is not a valid scene document.
pub fn from_json_str(json: &str) -> Result<SceneGraph> {
    serde_json::from_str(json).map_err(|e| Error::parse(DocumentFormat::Json, e.to_string()))
}

/// Converts a JSON value into a scene graph.
///
/// # Errors
///
/// Returns a parse error if the value is not a valid scene document.
pub fn from_json_value(value: serde_json::Value) -> Result<SceneGraph> {
    serde_json::from_value(value).map_err(|e| Error::parse(DocumentFormat::Json, e.to_string()))
}

/// Writes a scene graph as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_string(graph: &SceneGraph) -> Result<String> {
    serde_json::to_string_pretty(graph).map_err(|e| Error::serialization(e.to_string()))
}

/// Converts a scene graph into a JSON value.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_value(graph: &SceneGraph) -> Result<serde_json::Value> {
    serde_json::to_value(graph).map_err(|e| Error::serialization(e.to_string()))
}

/// Serializes a scene graph to `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_msgpack(graph: &SceneGraph) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(graph).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a scene graph from `MessagePack` bytes.
///
/// # Errors
///
/// Returns a parse error if the bytes are not a valid scene document.
pub fn from_msgpack(bytes: &[u8]) -> Result<SceneGraph> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::parse(DocumentFormat::MessagePack, e.to_string()))
}

/// Decodes a scene graph from raw bytes in the given format.
///
/// # Errors
///
/// Returns a parse error if the bytes are not a valid scene document.
pub fn from_bytes(bytes: &[u8], format: DocumentFormat) -> Result<SceneGraph> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_slice(bytes).map_err(|e| Error::parse(format, e.to_string()))
        }
        DocumentFormat::MessagePack => from_msgpack(bytes),
    }
}

/// Encodes a scene graph to raw bytes in the given format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(graph: &SceneGraph, format: DocumentFormat) -> Result<Vec<u8>> {
    match format {
        DocumentFormat::Json => to_json_string(graph).map(String::into_bytes),
        DocumentFormat::MessagePack => to_msgpack(graph),
    }
}

/// Saves a scene graph to a file, choosing the format by extension.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(graph: &SceneGraph, path: P) -> Result<()> {
    let path = path.as_ref();
    let context = || ErrorContext::new().with_source(path.display().to_string());

    let bytes = to_bytes(graph, format_for_path(path))?;

    let file = File::create(path).map_err(|e| {
        Error::io(format!("failed to create file '{}': {e}", path.display())).with_context(context())
    })?;

    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!("failed to write to file '{}': {e}", path.display()))
            .with_context(context())
    })?;

    writer.flush().map_err(|e| {
        Error::io(format!("failed to flush file '{}': {e}", path.display())).with_context(context())
    })?;

    log::debug!("saved {} entries to {}", graph.len(), path.display());
    Ok(())
}

/// Loads a scene graph from a file, choosing the format by extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if decoding fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SceneGraph> {
    let path = path.as_ref();
    let context = || ErrorContext::new().with_source(path.display().to_string());

    let file = File::open(path).map_err(|e| {
        Error::io(format!("failed to open file '{}': {e}", path.display())).with_context(context())
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!("failed to read file '{}': {e}", path.display())).with_context(context())
    })?;

    let graph = from_bytes(&bytes, format_for_path(path)).map_err(|e| e.with_context(context()))?;
    log::debug!("loaded {} entries from {}", graph.len(), path.display());
    Ok(graph)
}
