//! GF(2^8) multiplication and inversion.

/// The AES irreducible polynomial x^8 + x^4 + x^3 + x + 1, including the
/// degree-8 term.
pub const POLY: u16 = 0x11b;

/// Multiplies two field elements modulo [`POLY`].
///
/// Russian-peasant multiplication: for each set bit of `b`, XOR the running
/// `a` into the product, doubling `a` (with reduction) between bits.
pub fn mul(a: u8, b: u8) -> u8 {
    let mut a = u16::from(a);
    let mut b = b;
    let mut product: u16 = 0;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            // Reduce: XOR with POLY clears bit 8, keeping a within 8 bits.
            a ^= POLY;
        }
        b >>= 1;
    }
    product as u8
}

/// Returns the multiplicative inverse of `a`, with `inverse(0) == 0` by
/// AES convention.
///
/// Brute-force scan over the 255 nonzero candidates; acceptable for a
/// 256-element field.
///
/// # Panics
///
/// Panics if no inverse exists for a nonzero input. Every nonzero element
/// of a finite field has one, so reaching the panic means [`mul`] itself
/// is broken and any table derived from it would be silently corrupt.
pub fn inverse(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    for candidate in 1..=255u8 {
        if mul(a, candidate) == 1 {
            return candidate;
        }
    }
    unreachable!("no multiplicative inverse for {a:#04x}: field multiplication is broken");
}

/// Extended-Euclidean inverse, kept as an algorithmically distinct
/// cross-check for [`inverse`].
///
/// Runs the polynomial GCD of [`POLY`] and `a` over GF(2), reducing one
/// term per step and tracking the Bézout coefficient with field
/// multiplications. Returns 0 for input 0.
pub fn inverse_euclidean(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }

    // Invariant: old_r ≡ old_s * a and r ≡ s * a (mod POLY).
    let mut old_r: u16 = POLY;
    let mut r: u16 = u16::from(a);
    let mut old_s: u8 = 0;
    let mut s: u8 = 1;

    while r != 0 {
        while old_r != 0 && degree(old_r) >= degree(r) {
            let shift = degree(old_r) - degree(r);
            old_r ^= r << shift;
            old_s ^= mul(s, x_power(shift));
        }
        core::mem::swap(&mut old_r, &mut r);
        core::mem::swap(&mut old_s, &mut s);
    }

    // old_r is now gcd(POLY, a) = 1, so old_s * a ≡ 1 (mod POLY).
    old_s
}

fn degree(p: u16) -> u32 {
    debug_assert!(p != 0);
    15 - p.leading_zeros()
}

/// x^k reduced modulo [`POLY`], for k up to 8.
fn x_power(k: u32) -> u8 {
    if k == 8 {
        // x^8 ≡ x^4 + x^3 + x + 1.
        0x1b
    } else {
        1u8 << k
    }
}
