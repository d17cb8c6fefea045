//! Parallel fork-join LSD radix sort for signed 32-bit integers.
//!
//! The engine splits the input in half recursively until a hardware-derived
//! leaf size is reached, sorts each leaf with four stable counting passes
//! (least-significant byte first, sign byte remapped), and merges the halves
//! on the way back up. A primary/scratch buffer pair ping-pongs between
//! passes; every recursive call reports which physical buffer holds its
//! sorted run, so parents merge without extra copies.
//!
//! Three interchangeable fork-join backends are provided: a rayon pool
//! (default), scoped OS threads, and a sequential fallback. The driver only
//! ever asks them to "run two units concurrently and wait for both".
//!
//! ```
//! use parradix::{SortConfig, sort_into};
//!
//! let input = [3, -1, 4, -1, 5, -9, 2, -6];
//! let mut output = [0i32; 8];
//! sort_into(&input, &mut output, SortConfig::default()).unwrap();
//! assert_eq!(output, [-9, -6, -1, -1, 2, 3, 4, 5]);
//! ```

mod driver;
pub mod fork;
pub mod key;
mod merge;
mod radix;
mod task;

pub use task::{Backend, SortConfig, SortError, SortTask};

use task::alloc_buffer;

/// Sort `input` ascending into `output`, leaving `input` unmodified.
///
/// `output` must have exactly the input's length and is fully overwritten.
pub fn sort_into(input: &[i32], output: &mut [i32], config: SortConfig) -> Result<(), SortError> {
    SortTask::new(input, output, config).run()
}

/// Sort `values` ascending in place.
pub fn sort(values: &mut [i32], config: SortConfig) -> Result<(), SortError> {
    let mut out = alloc_buffer(values.len())?;
    out.resize(values.len(), 0);
    sort_into(values, &mut out, config)?;
    values.copy_from_slice(&out);
    Ok(())
}
