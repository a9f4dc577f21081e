//! Difference distribution and differential uniformity.

/// Counts, for one nonzero input difference `alpha`, how often each output
/// difference occurs across all 256 inputs.
fn ddt_row(table: &[u8; 256], alpha: u8) -> [u16; 256] {
    let mut counts = [0u16; 256];
    for x in 0..=255u8 {
        let diff = table[x as usize] ^ table[(x ^ alpha) as usize];
        counts[diff as usize] += 1;
    }
    counts
}

/// Computes the differential uniformity of a substitution table.
///
/// For every nonzero input difference α, builds the histogram of output
/// differences `table[x] ⊕ table[x ⊕ α]` over all x and takes its maximum
/// bucket count; the result is the maximum over all α. Bounded at
/// 256 × 256 lookups, no early exit needed.
///
/// Well-defined for any 256-entry table, but the value only carries its
/// cryptographic meaning when the table is a bijection.
pub fn differential_uniformity(table: &[u8; 256]) -> usize {
    let mut max_count = 0u16;
    for alpha in 1..=255u8 {
        let row_max = ddt_row(table, alpha)
            .into_iter()
            .max()
            .unwrap_or_default();
        max_count = max_count.max(row_max);
    }
    usize::from(max_count)
}

/// Computes the full difference distribution table.
///
/// Entry `[α][β]` is the number of inputs x with
/// `table[x] ⊕ table[x ⊕ α] == β`. Row 0 is the trivial α = 0 case, where
/// every input lands in bucket 0. Boxed: the table is 128 KiB.
pub fn difference_distribution_table(table: &[u8; 256]) -> Box<[[u16; 256]; 256]> {
    let mut ddt: Box<[[u16; 256]; 256]> = vec![[0u16; 256]; 256]
        .into_boxed_slice()
        .try_into()
        .unwrap_or_else(|_| unreachable!("vec length is 256"));
    ddt[0][0] = 256;
    for alpha in 1..=255u8 {
        ddt[alpha as usize] = ddt_row(table, alpha);
    }
    ddt
}
