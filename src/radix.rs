//! LSD radix sort for `i32`: one stable counting pass per key byte.
//! 8-bit passes, 4 rounds, ping-ponging between two buffers.

use crate::key::{KEY_BYTES, RADIX, key_byte};

/// One stable counting-sort pass: redistribute `src` into `dest` by the key
/// byte at `byte`. `counter` is zeroed here; after the exclusive prefix sum it
/// holds the next free write offset per byte value.
pub(crate) fn counting_sort_pass(
    src: &[i32],
    dest: &mut [i32],
    byte: usize,
    counter: &mut [usize; RADIX],
) {
    debug_assert_eq!(src.len(), dest.len());
    counter.fill(0);

    // Tally
    for &v in src {
        counter[key_byte(v, byte)] += 1;
    }

    // Exclusive prefix sum: swap the running total with each cell.
    let mut running = 0usize;
    for slot in counter.iter_mut() {
        let count = *slot;
        *slot = running;
        running += count;
    }

    // Scatter in original order (stable for equal keys)
    for &v in src {
        let k = key_byte(v, byte);
        dest[counter[k]] = v;
        counter[k] += 1;
    }
}

/// Sort `data` with four counting passes, least-significant byte first, using
/// `scratch` as the alternate buffer. An even pass count leaves the sorted
/// run back in `data`.
pub(crate) fn sort_sequential(data: &mut [i32], scratch: &mut [i32]) {
    let mut counter = [0usize; RADIX];
    for byte in 0..KEY_BYTES {
        if byte % 2 == 0 {
            counting_sort_pass(data, scratch, byte, &mut counter);
        } else {
            counting_sort_pass(scratch, data, byte, &mut counter);
        }
    }
}
