//! The fixed AES affine transform over GF(2).

/// Additive constant of the affine transform.
const AFFINE_CONST: u8 = 0x63;

/// Applies the AES affine transform to a byte.
///
/// Output bit `i` is the parity of input bits `i`, `i+4`, `i+5`, `i+6`,
/// `i+7` (indices mod 8), XORed with bit `i` of 0x63. This is the FIPS-197
/// affine matrix in closed bitwise form; the cyclic offsets and the
/// constant are exact, not an approximation.
pub fn affine_transform(x: u8) -> u8 {
    let mut out = 0u8;
    for i in 0..8 {
        let bit = (x >> i)
            ^ (x >> ((i + 4) % 8))
            ^ (x >> ((i + 5) % 8))
            ^ (x >> ((i + 6) % 8))
            ^ (x >> ((i + 7) % 8))
            ^ (AFFINE_CONST >> i);
        out |= (bit & 1) << i;
    }
    out
}
