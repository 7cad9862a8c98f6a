use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug)]
pub enum TimingError {
    /// Error that occurs when the given polynomial size is not valid.
    #[error("Polynomial size {0} is not valid!")]
    PolynomialSizeUnValid(
        /// The polynomial size being rejected.
        usize,
    ),
    /// Error that occurs when the given message modulus is not valid.
    #[error("Message modulus {0} is not valid!")]
    MessageModulusUnValid(
        /// The message modulus being rejected.
        u64,
    ),
    /// Error that occurs when the requested parameter preset does not exist.
    #[error("Parameter preset `{0}` is not known!")]
    UnknownPreset(
        /// The preset name being rejected.
        String,
    ),
    /// Error that occurs when the requested slot count is not valid.
    #[error("Slot count {0} is not valid!")]
    SlotCountUnValid(
        /// The slot count being rejected.
        usize,
    ),
    /// Error that occurs when a decrypted slot disagrees with the expected value.
    #[error("Slot {slot} decrypted to {found}, expected {expected}!")]
    SlotMismatch {
        /// Index of the failing slot.
        slot: usize,
        /// Decrypted value.
        found: u64,
        /// Expected value.
        expected: u64,
    },
    /// I/O errors for report files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML serialization errors for report files.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
