//! Decode configuration.

/// How closely a decoder follows the behavior of legacy LDB readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Reject anything a well-formed writer would not produce.
    #[default]
    Strict,
    /// Mirror legacy readers: booleans are any non-zero byte, declared sizes
    /// are never checked, and only BYTE arrays can be read. Other array
    /// kinds fail with [`LdbError::LegacyUnsupported`](crate::LdbError::LegacyUnsupported),
    /// which is where those readers faulted on an unallocated backing store.
    Legacy,
}

/// Options controlling container decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    mode: DecodeMode,
    verify_sizes: bool,
}

impl DecodeOptions {
    /// Strict decoding with size verification. This is the default.
    pub const fn strict() -> Self {
        Self {
            mode: DecodeMode::Strict,
            verify_sizes: true,
        }
    }

    /// Legacy-compatible decoding. Size verification is off.
    pub const fn legacy() -> Self {
        Self {
            mode: DecodeMode::Legacy,
            verify_sizes: false,
        }
    }

    /// Sets whether declared container sizes must match the bytes consumed.
    ///
    /// Has no effect in [`DecodeMode::Legacy`], which never verifies sizes.
    pub const fn verify_sizes(mut self, verify: bool) -> Self {
        self.verify_sizes = verify;
        self
    }

    pub const fn mode(&self) -> DecodeMode {
        self.mode
    }

    pub const fn is_legacy(&self) -> bool {
        matches!(self.mode, DecodeMode::Legacy)
    }

    pub(crate) const fn checks_sizes(&self) -> bool {
        self.verify_sizes && !self.is_legacy()
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict_with_size_checks() {
        let opts = DecodeOptions::default();
        assert_eq!(opts.mode(), DecodeMode::Strict);
        assert!(opts.checks_sizes());
    }

    #[test]
    fn legacy_never_checks_sizes() {
        assert!(!DecodeOptions::legacy().checks_sizes());
        assert!(!DecodeOptions::legacy().verify_sizes(true).checks_sizes());
        assert!(!DecodeOptions::strict().verify_sizes(false).checks_sizes());
    }
}
