//! Context of the timing harness.

use std::io::{self, Write};

use tfhe::shortint::{gen_keys, Ciphertext, ClientKey, ServerKey};

use crate::parameter::Parameters;

/// The cryptographic context: parameters plus the generated keys.
pub struct Context {
    params: Parameters,
    client_key: ClientKey,
    server_key: ServerKey,
}

impl Context {
    /// Create a new instance, generating the client and server keys.
    pub fn new(params: Parameters) -> Self {
        let (client_key, server_key) = gen_keys(params.pbs());
        Self {
            params,
            client_key,
            server_key,
        }
    }

    /// Returns the parameters of this [`Context`].
    #[inline]
    pub fn params(&self) -> Parameters {
        self.params
    }

    /// Returns a reference to the client key of this [`Context`].
    #[inline]
    pub fn client_key(&self) -> &ClientKey {
        &self.client_key
    }

    /// Returns a reference to the server key of this [`Context`].
    #[inline]
    pub fn server_key(&self) -> &ServerKey {
        &self.server_key
    }

    /// Writes a human-readable listing of the context parameters.
    pub fn printout(&self, out: &mut dyn Write) -> io::Result<()> {
        let params = self.params;
        writeln!(out, "lwe_dimension: {}", params.lwe_dimension())?;
        writeln!(out, "glwe_dimension: {}", params.glwe_dimension())?;
        writeln!(out, "polynomial_size: {}", params.polynomial_size())?;
        writeln!(out, "message_modulus: {}", params.message_modulus())?;
        writeln!(out, "carry_modulus: {}", params.carry_modulus())?;
        writeln!(
            out,
            "pbs decomposition: base 2^{}, {} levels",
            params.pbs_base_log(),
            params.pbs_level()
        )?;
        writeln!(
            out,
            "ks decomposition: base 2^{}, {} levels",
            params.ks_base_log(),
            params.ks_level()
        )?;
        Ok(())
    }

    /// Encrypts one slot per value, each reduced modulo the message modulus.
    pub fn encrypt_slots(&self, values: &[u64]) -> PackedCiphertext {
        let t = self.params.message_modulus();
        let slots = values
            .iter()
            .map(|&value| self.client_key.encrypt(value % t))
            .collect();
        PackedCiphertext { slots }
    }

    /// Decrypts every slot.
    pub fn decrypt_slots(&self, ct: &PackedCiphertext) -> Vec<u64> {
        ct.slots
            .iter()
            .map(|slot| self.client_key.decrypt(slot))
            .collect()
    }
}

/// A plaintext vector encrypted slotwise.
#[derive(Clone)]
pub struct PackedCiphertext {
    pub(crate) slots: Vec<Ciphertext>,
}

impl PackedCiphertext {
    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
