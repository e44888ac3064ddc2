//! Encoder configuration.
//!
//! Controls how finished columns are validated, metered and written as Arrow
//! IPC. The process-wide configuration is read from the environment once:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `RR_IPC_ALIGNMENT` | `ipc_alignment` | 64 |
//! | `RR_IPC_LEGACY_FORMAT` | `write_legacy_ipc_format` | false |
//! | `RR_VALIDATE_ARRAYS` | `validate_arrays` | true |
//! | `RR_MEMORY_LIMIT` | `memory_limit` (bytes per column, and default pool cap) | unbounded |

use std::sync::OnceLock;

use arrow::ipc::writer::IpcWriteOptions;
use arrow::ipc::MetadataVersion;
use rr_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Buffer alignments accepted by the IPC writer.
pub const VALID_IPC_ALIGNMENTS: [usize; 4] = [8, 16, 32, 64];

/// Default IPC buffer alignment.
pub const DEFAULT_IPC_ALIGNMENT: usize = 64;

/// Configuration for the component encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Alignment of buffers in the IPC stream.
    pub ipc_alignment: usize,

    /// Emit the pre-1.0 IPC framing (metadata version 4).
    pub write_legacy_ipc_format: bool,

    /// Run full Arrow validation on every finished column.
    pub validate_arrays: bool,

    /// Byte limit for a single encoded column.
    ///
    /// Enforced on every call that uses this configuration; the
    /// process-wide configuration also caps the default memory pool.
    pub memory_limit: Option<usize>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            ipc_alignment: DEFAULT_IPC_ALIGNMENT,
            write_legacy_ipc_format: false,
            validate_arrays: true,
            memory_limit: None,
        }
    }
}

impl EncoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide configuration, resolved from the environment on first use.
    pub fn global() -> &'static EncoderConfig {
        static GLOBAL: OnceLock<EncoderConfig> = OnceLock::new();
        GLOBAL.get_or_init(EncoderConfig::from_env)
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Values that do not parse, or that fail [`EncoderConfig::validate`],
    /// are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = EncoderConfig::default();

        if let Some(alignment) = parse_var::<usize>(&lookup, "RR_IPC_ALIGNMENT") {
            if VALID_IPC_ALIGNMENTS.contains(&alignment) {
                config.ipc_alignment = alignment;
            } else {
                tracing::warn!(alignment, "ignoring unsupported RR_IPC_ALIGNMENT");
            }
        }
        if let Some(legacy) = parse_var::<bool>(&lookup, "RR_IPC_LEGACY_FORMAT") {
            config.write_legacy_ipc_format = legacy;
        }
        if let Some(validate) = parse_var::<bool>(&lookup, "RR_VALIDATE_ARRAYS") {
            config.validate_arrays = validate;
        }
        if let Some(limit) = parse_var::<usize>(&lookup, "RR_MEMORY_LIMIT") {
            config.memory_limit = Some(limit);
        }

        config
    }

    pub fn with_ipc_alignment(mut self, alignment: usize) -> Self {
        self.ipc_alignment = alignment;
        self
    }

    pub fn with_legacy_ipc_format(mut self, enabled: bool) -> Self {
        self.write_legacy_ipc_format = enabled;
        self
    }

    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_arrays = enabled;
        self
    }

    pub fn with_memory_limit(mut self, limit: Option<usize>) -> Self {
        self.memory_limit = limit;
        self
    }

    /// Reject settings the IPC writer cannot honour.
    pub fn validate(&self) -> Result<()> {
        if !VALID_IPC_ALIGNMENTS.contains(&self.ipc_alignment) {
            return Err(Error::InvalidConfig(format!(
                "ipc_alignment must be one of {:?}, got {}",
                VALID_IPC_ALIGNMENTS, self.ipc_alignment
            )));
        }
        Ok(())
    }

    /// Arrow IPC writer options for this configuration.
    pub fn ipc_write_options(&self) -> Result<IpcWriteOptions> {
        self.validate()?;
        let metadata_version = if self.write_legacy_ipc_format {
            MetadataVersion::V4
        } else {
            MetadataVersion::V5
        };
        Ok(IpcWriteOptions::try_new(
            self.ipc_alignment,
            self.write_legacy_ipc_format,
            metadata_version,
        )?)
    }
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable encoder setting");
            None
        }
    }
}
