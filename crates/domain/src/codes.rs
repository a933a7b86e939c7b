//! Order code generation.

use common::OrderCode;

/// Source of candidate order codes.
///
/// Generators are stateless from the ledger's point of view: a code may
/// repeat, and the ledger decides what to do about it.
pub trait CodeGenerator: Send + Sync {
    /// Produces the next candidate code.
    fn next_code(&self) -> OrderCode;
}

/// Draws each code uniformly at random using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn next_code(&self) -> OrderCode {
        OrderCode::generate(&mut rand::thread_rng())
    }
}
