#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! This library contains a timing harness for homomorphic-encryption
//! operations: context construction, key generation, packed encryption,
//! and named-timer measurement of ciphertext multiplication and the two
//! bootstrap flavors of the wrapped library.

mod context;
mod error;
mod evaluate;
mod parameter;
mod report;

pub mod timing;

pub use context::{Context, PackedCiphertext};
pub use error::TimingError;
pub use evaluate::Evaluator;
pub use parameter::{
    Parameters, DEFAULT_128_BITS_PARAMETERS, LIGHT_128_BITS_PARAMETERS,
    WIDE_DIGIT_128_BITS_PARAMETERS,
};
pub use report::{SectionReport, TimerReport, TimingReport};
