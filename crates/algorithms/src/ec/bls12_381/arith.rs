//! Multi-limb Montgomery arithmetic shared by the base field and the scalar field.
//!
//! Elements are little-endian `[u64; N]` limb arrays. Every routine here is a
//! `const fn` with no data-dependent branches, so the field types built on top
//! can be used in constant definitions and stay constant-time.

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
///
/// The borrow is either 0 or `u64::MAX`, usable directly as a mask.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Returns `(hi:limbs) - modulus` when that is non-negative, `limbs` otherwise.
#[inline(always)]
const fn reduce_once<const N: usize>(limbs: [u64; N], hi: u64, modulus: &[u64; N]) -> [u64; N] {
    let mut diff = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (d, b) = sbb(limbs[i], modulus[i], borrow);
        diff[i] = d;
        borrow = b;
        i += 1;
    }
    let (_, borrow) = sbb(hi, 0, borrow);

    // borrow is all-ones exactly when the subtraction underflowed
    let mut out = [0u64; N];
    let mut i = 0;
    while i < N {
        out[i] = (limbs[i] & borrow) | (diff[i] & !borrow);
        i += 1;
    }
    out
}

/// Montgomery product `a * b * 2^(-64N) mod modulus` (CIOS).
///
/// Inputs must satisfy `a * b < modulus * 2^(64N)`, which holds for reduced
/// operands and for one unreduced operand below `2^(64N)` times a reduced one.
#[inline]
pub(crate) const fn mont_mul<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    modulus: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = [0u64; N];
    let mut hi = 0u64;

    let mut i = 0;
    while i < N {
        let mut carry = 0;
        let mut j = 0;
        while j < N {
            let (v, c) = mac(t[j], a[j], b[i], carry);
            t[j] = v;
            carry = c;
            j += 1;
        }
        let (lo, top) = adc(hi, carry, 0);

        let k = t[0].wrapping_mul(inv);
        let (_, mut carry) = mac(t[0], k, modulus[0], 0);
        let mut j = 1;
        while j < N {
            let (v, c) = mac(t[j], k, modulus[j], carry);
            t[j - 1] = v;
            carry = c;
            j += 1;
        }
        let (v, c) = adc(lo, carry, 0);
        t[N - 1] = v;
        hi = top + c;

        i += 1;
    }

    reduce_once(t, hi, modulus)
}

/// Leaves Montgomery form: `a * 2^(-64N) mod modulus`.
#[inline]
pub(crate) const fn mont_reduce<const N: usize>(a: &[u64; N], modulus: &[u64; N], inv: u64) -> [u64; N] {
    let mut one = [0u64; N];
    one[0] = 1;
    mont_mul(a, &one, modulus, inv)
}

/// `a + b mod modulus` for reduced operands.
#[inline]
pub(crate) const fn add_mod<const N: usize>(a: &[u64; N], b: &[u64; N], modulus: &[u64; N]) -> [u64; N] {
    let mut sum = [0u64; N];
    let mut carry = 0;
    let mut i = 0;
    while i < N {
        let (v, c) = adc(a[i], b[i], carry);
        sum[i] = v;
        carry = c;
        i += 1;
    }
    reduce_once(sum, carry, modulus)
}

/// `a - b mod modulus` for reduced operands.
#[inline]
pub(crate) const fn sub_mod<const N: usize>(a: &[u64; N], b: &[u64; N], modulus: &[u64; N]) -> [u64; N] {
    let mut diff = [0u64; N];
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (v, bw) = sbb(a[i], b[i], borrow);
        diff[i] = v;
        borrow = bw;
        i += 1;
    }

    // add the modulus back when the subtraction underflowed
    let mut carry = 0;
    let mut i = 0;
    while i < N {
        let (v, c) = adc(diff[i], modulus[i] & borrow, carry);
        diff[i] = v;
        carry = c;
        i += 1;
    }
    diff
}

/// `-a mod modulus` for a reduced operand; zero maps to zero.
#[inline]
pub(crate) const fn neg_mod<const N: usize>(a: &[u64; N], modulus: &[u64; N]) -> [u64; N] {
    let mut out = [0u64; N];
    let mut borrow = 0;
    let mut acc = 0;
    let mut i = 0;
    while i < N {
        let (v, bw) = sbb(modulus[i], a[i], borrow);
        out[i] = v;
        borrow = bw;
        acc |= a[i];
        i += 1;
    }

    let mask = ((acc == 0) as u64).wrapping_sub(1);
    let mut i = 0;
    while i < N {
        out[i] &= mask;
        i += 1;
    }
    out
}

/// True (as 1) when the little-endian value `a` is strictly below `bound`.
#[inline]
pub(crate) const fn is_below<const N: usize>(a: &[u64; N], bound: &[u64; N]) -> u8 {
    let mut borrow = 0;
    let mut i = 0;
    while i < N {
        let (_, bw) = sbb(a[i], bound[i], borrow);
        borrow = bw;
        i += 1;
    }
    (borrow & 1) as u8
}
