//! The homomorphic operations timed by the harness.

use tfhe::shortint::server_key::LookupTableOwned;
use tfhe::shortint::ServerKey;

use crate::context::{Context, PackedCiphertext};
use crate::timing;

/// Evaluates the timed homomorphic operations with a borrowed server key.
///
/// Every operation records a whole-vector timer and a per-slot timer into
/// the global registry, under the names listed in [`crate::timing`].
pub struct Evaluator<'a> {
    server_key: &'a ServerKey,
    identity_lut: LookupTableOwned,
}

impl<'a> Evaluator<'a> {
    /// Create a new instance, precomputing the full-state refresh lookup table.
    pub fn new(context: &'a Context) -> Self {
        let server_key = context.server_key();
        let identity_lut = server_key.generate_lookup_table(|value| value);
        Self {
            server_key,
            identity_lut,
        }
    }

    /// Slotwise ciphertext multiplication: `lhs[i] *= rhs[i]`.
    pub fn mul_assign(&self, lhs: &mut PackedCiphertext, rhs: &PackedCiphertext) {
        assert_eq!(
            lhs.len(),
            rhs.len(),
            "Slot counts of the operands differ!"
        );
        let _timer = timing::start(timing::MULTIPLY);
        for (lhs_slot, rhs_slot) in lhs.slots.iter_mut().zip(rhs.slots.iter()) {
            let _slot_timer = timing::start(timing::MULTIPLY_SLOT);
            *lhs_slot = self.server_key.unchecked_mul_lsb(lhs_slot, rhs_slot);
        }
    }

    /// Slotwise multiplication of the vector by itself.
    pub fn square_assign(&self, ct: &mut PackedCiphertext) {
        let _timer = timing::start(timing::MULTIPLY);
        for slot in ct.slots.iter_mut() {
            let _slot_timer = timing::start(timing::MULTIPLY_SLOT);
            *slot = self.server_key.unchecked_mul_lsb(slot, slot);
        }
    }

    /// Full-state refresh: bootstraps every slot, preserving message and carry.
    pub fn refresh_assign(&self, ct: &mut PackedCiphertext) {
        let _timer = timing::start(timing::REFRESH);
        for slot in ct.slots.iter_mut() {
            let _slot_timer = timing::start(timing::REFRESH_SLOT);
            *slot = self.server_key.apply_lookup_table(slot, &self.identity_lut);
        }
    }

    /// Message-only refresh: bootstraps every slot down to its message part.
    pub fn extract_message_assign(&self, ct: &mut PackedCiphertext) {
        let _timer = timing::start(timing::EXTRACT);
        for slot in ct.slots.iter_mut() {
            let _slot_timer = timing::start(timing::EXTRACT_SLOT);
            self.server_key.message_extract_assign(slot);
        }
    }
}
