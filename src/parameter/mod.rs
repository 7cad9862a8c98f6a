//! The parameters of the timing harness.

use tfhe::shortint::ClassicPBSParameters;

use crate::error::TimingError;

mod constants;

pub use constants::*;

/// The cryptographic context parameters handed to the wrapped library,
/// together with the security level the preset advertises.
#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    pbs: ClassicPBSParameters,
    security_bits: u32,
}

impl Parameters {
    /// Create a new Parameters instance.
    pub fn new(pbs: ClassicPBSParameters, security_bits: u32) -> Result<Self, TimingError> {
        // N = 2^i
        if !pbs.polynomial_size.0.is_power_of_two() {
            return Err(TimingError::PolynomialSizeUnValid(pbs.polynomial_size.0));
        }

        let t = pbs.message_modulus.0 as u64;
        if t < 2 {
            return Err(TimingError::MessageModulusUnValid(t));
        }

        Ok(Self { pbs, security_bits })
    }

    /// Resolves a named preset: `default`, `light` or `wide`.
    pub fn from_preset(name: &str) -> Result<Self, TimingError> {
        match name {
            "default" => Ok(*DEFAULT_128_BITS_PARAMETERS),
            "light" => Ok(*LIGHT_128_BITS_PARAMETERS),
            "wide" => Ok(*WIDE_DIGIT_128_BITS_PARAMETERS),
            _ => Err(TimingError::UnknownPreset(name.to_string())),
        }
    }

    /// Returns the wrapped library's parameter set of this [`Parameters`].
    #[inline]
    pub fn pbs(&self) -> ClassicPBSParameters {
        self.pbs
    }

    /// Returns the LWE dimension of this [`Parameters`], refers to **n** in the paper.
    #[inline]
    pub fn lwe_dimension(&self) -> usize {
        self.pbs.lwe_dimension.0
    }

    /// Returns the GLWE dimension of this [`Parameters`], refers to **k** in the paper.
    #[inline]
    pub fn glwe_dimension(&self) -> usize {
        self.pbs.glwe_dimension.0
    }

    /// Returns the ring polynomial dimension of this [`Parameters`], refers to **N** in the paper.
    #[inline]
    pub fn polynomial_size(&self) -> usize {
        self.pbs.polynomial_size.0
    }

    /// Returns the plaintext message modulus of this [`Parameters`], refers to **t** in the paper.
    #[inline]
    pub fn message_modulus(&self) -> u64 {
        self.pbs.message_modulus.0 as u64
    }

    /// Returns the carry modulus of this [`Parameters`].
    #[inline]
    pub fn carry_modulus(&self) -> u64 {
        self.pbs.carry_modulus.0 as u64
    }

    /// Returns the bootstrapping decomposition base's bits of this [`Parameters`].
    #[inline]
    pub fn pbs_base_log(&self) -> usize {
        self.pbs.pbs_base_log.0
    }

    /// Returns the bootstrapping decomposition level count of this [`Parameters`].
    #[inline]
    pub fn pbs_level(&self) -> usize {
        self.pbs.pbs_level.0
    }

    /// Returns the key switching decomposition base's bits of this [`Parameters`].
    #[inline]
    pub fn ks_base_log(&self) -> usize {
        self.pbs.ks_base_log.0
    }

    /// Returns the key switching decomposition level count of this [`Parameters`].
    #[inline]
    pub fn ks_level(&self) -> usize {
        self.pbs.ks_level.0
    }

    /// Returns the log2 of the bootstrap failure probability of this [`Parameters`].
    #[inline]
    pub fn log2_p_fail(&self) -> f64 {
        self.pbs.log2_p_fail
    }

    /// Returns the advertised security level of this [`Parameters`] in bits.
    #[inline]
    pub fn security_bits(&self) -> u32 {
        self.security_bits
    }
}

#[cfg(test)]
mod tests {
    use tfhe::core_crypto::prelude::PolynomialSize;

    use super::*;

    #[test]
    fn test_presets_resolve() {
        for name in ["default", "light", "wide"] {
            assert!(Parameters::from_preset(name).is_ok());
        }
    }

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            Parameters::from_preset("huge"),
            Err(TimingError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_invalid_polynomial_size() {
        let mut pbs = DEFAULT_128_BITS_PARAMETERS.pbs();
        pbs.polynomial_size = PolynomialSize(1000);

        assert!(matches!(
            Parameters::new(pbs, 128),
            Err(TimingError::PolynomialSizeUnValid(1000))
        ));
    }

    #[test]
    fn test_accessors() {
        let params = *DEFAULT_128_BITS_PARAMETERS;

        assert_eq!(params.message_modulus(), 4);
        assert_eq!(params.carry_modulus(), 4);
        assert!(params.polynomial_size().is_power_of_two());
        assert_eq!(params.security_bits(), 128);
    }

    #[test]
    fn test_wide_digit_preset() {
        let params = *WIDE_DIGIT_128_BITS_PARAMETERS;

        assert_eq!(params.message_modulus(), 256);
        assert_eq!(params.carry_modulus(), 1);
    }
}
