//! Integer percentage helpers shared by the distribution analyzers.

/// `round(100 × part / whole)` with halves rounded up.  `whole == 0` → 0.
pub fn round_percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((200 * part + whole) / (2 * whole)).min(100) as u32
}

/// Split 100 points across `counts` by largest remainder.
///
/// Each share starts at `floor(100 × count / total)`; the points left over go
/// to the largest remainders, earlier slots first on equal remainders.  The
/// result always sums to exactly 100, and equals plain rounding whenever plain
/// rounding already sums to 100.  Returns `None` when every count is zero.
pub fn apportion<const N: usize>(counts: [u64; N]) -> Option<[u32; N]> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return None;
    }

    let mut shares = [0u32; N];
    let mut remainders = [0u64; N];
    let mut assigned = 0u32;
    for (i, &count) in counts.iter().enumerate() {
        let scaled = count * 100;
        shares[i] = (scaled / total) as u32;
        remainders[i] = scaled % total;
        assigned += shares[i];
    }

    let mut order: Vec<usize> = (0..N).collect();
    order.sort_by(|&a, &b| remainders[b].cmp(&remainders[a]).then(a.cmp(&b)));
    for &i in order.iter().take(100u32.saturating_sub(assigned) as usize) {
        shares[i] += 1;
    }

    Some(shares)
}
