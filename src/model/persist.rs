use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bincode::Options;
use tempfile::NamedTempFile;

use crate::error::{EngineError, EngineResult};
use crate::model::model::Model;

/// Upper bound on an encoded model's size. A corrupt file decoded without a
/// limit can claim a multi-exabyte vector length and abort the process inside
/// the allocator before an error can surface.
const MAX_MODEL_BYTES: u64 = 1 << 30;

/// Binary codec shared by the save and load paths: fixed-width integers, so
/// the wire format stays stable, plus the size cap.
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(MAX_MODEL_BYTES)
}

impl Model {
    /// Writes the complete model — both vocabularies, both weight matrices,
    /// both bias vectors — as an opaque bincode snapshot.
    ///
    /// The bytes go to a temp file in the destination directory and are
    /// renamed over `path` only after a full successful encode and flush, so
    /// a failed save never leaves a truncated model file behind.
    pub fn save_file(&self, path: &Path) -> EngineResult<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(parent)?;
        let mut writer = BufWriter::new(&temp);
        codec().serialize_into(&mut writer, self)?;
        writer.flush()?;
        drop(writer);
        temp.persist(path).map_err(|e| EngineError::Io(e.error))?;

        tracing::debug!("model saved to {}", path.display());
        Ok(())
    }

    /// Reads back a model written by [`Model::save_file`].
    ///
    /// Round-trips exactly, down to f64 bit patterns. Files that decode but
    /// violate the model's shape invariants are rejected as corrupt; files
    /// that do not decode at all surface as serialization errors.
    pub fn load_file(path: &Path) -> EngineResult<Model> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let model: Model = codec().deserialize_from(reader)?;
        model.validate()?;

        tracing::debug!(
            "model loaded from {}: {} keyword(s), {} answer(s)",
            path.display(),
            model.input_size(),
            model.output_size()
        );
        Ok(model)
    }
}
