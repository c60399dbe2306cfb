//! Global pairwise alignment with affine gap penalties.
//!
//! The aligner fills three score matrices (match, insertion and deletion) with Gotoh's recurrence,
//! storing a backpointer for each entry, and traces back an optimal alignment from them.
//! [`verify_score`] recomputes the score of an alignment from the aligned sequences alone.

pub mod aligner;
pub mod alignment_matrix;
pub mod alignment_result;
pub mod alphabet;
pub mod error;
pub mod gap_penalty;
mod io;
pub mod samples;
pub mod score;
pub mod scoring;
pub mod sequences;
pub mod verify;

pub use aligner::align;
pub use verify::verify_score;

#[cfg(test)]
mod tests;
