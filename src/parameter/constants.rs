use std::sync::LazyLock;

use tfhe::core_crypto::prelude::{
    CiphertextModulus, DecompositionBaseLog, DecompositionLevelCount, DynamicDistribution,
    EncryptionKeyChoice, GlweDimension, LweDimension, PolynomialSize, StandardDev,
};
use tfhe::shortint::parameters::{
    V0_11_PARAM_MESSAGE_1_CARRY_1_KS_PBS_GAUSSIAN_2M64,
    V0_11_PARAM_MESSAGE_2_CARRY_2_KS_PBS_GAUSSIAN_2M64,
};
use tfhe::shortint::{CarryModulus, ClassicPBSParameters, MaxNoiseLevel, MessageModulus};

use super::Parameters;

/// Default 128-bits security parameters: 2-bit message, 2-bit carry.
pub static DEFAULT_128_BITS_PARAMETERS: LazyLock<Parameters> = LazyLock::new(|| {
    Parameters::new(V0_11_PARAM_MESSAGE_2_CARRY_2_KS_PBS_GAUSSIAN_2M64, 128).unwrap()
});

/// Light 128-bits security parameters: 1-bit message, 1-bit carry.
///
/// The cheapest preset, used by the integration tests.
pub static LIGHT_128_BITS_PARAMETERS: LazyLock<Parameters> = LazyLock::new(|| {
    Parameters::new(V0_11_PARAM_MESSAGE_1_CARRY_1_KS_PBS_GAUSSIAN_2M64, 128).unwrap()
});

/// Wide-digit 128-bits security parameters: 8-bit message space, no carry,
/// built from explicit scalars rather than a library preset.
pub static WIDE_DIGIT_128_BITS_PARAMETERS: LazyLock<Parameters> = LazyLock::new(|| {
    Parameters::new(
        ClassicPBSParameters {
            lwe_dimension: LweDimension(1091),
            glwe_dimension: GlweDimension(1),
            polynomial_size: PolynomialSize(32768),
            lwe_noise_distribution: DynamicDistribution::new_gaussian_from_std_dev(StandardDev(
                3.038278019865525e-08,
            )),
            glwe_noise_distribution: DynamicDistribution::new_gaussian_from_std_dev(StandardDev(
                2.168404344971009e-19,
            )),
            pbs_base_log: DecompositionBaseLog(6),
            pbs_level: DecompositionLevelCount(6),
            ks_base_log: DecompositionBaseLog(2),
            ks_level: DecompositionLevelCount(11),
            message_modulus: MessageModulus(256),
            carry_modulus: CarryModulus(1),
            max_noise_level: MaxNoiseLevel::new(10),
            log2_p_fail: -64.074,
            ciphertext_modulus: CiphertextModulus::new_native(),
            encryption_key_choice: EncryptionKeyChoice::Big,
        },
        128,
    )
    .unwrap()
});
