use std::num::NonZeroUsize;
use std::slice::Chunks;

use crate::Link;

/// Splits `links` into contiguous batches of at most `batch_size` links.
///
/// Every batch but the last holds exactly `batch_size` links; concatenating
/// the batches in order yields `links` again.
pub fn partition_batches(links: &[Link], batch_size: NonZeroUsize) -> Chunks<'_, Link> {
    links.chunks(batch_size.get())
}

/// Number of batches `partition_batches` yields for `total` links.
pub fn batch_count(total: usize, batch_size: NonZeroUsize) -> usize {
    total.div_ceil(batch_size.get())
}
