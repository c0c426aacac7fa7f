//! Arbitrary-precision unsigned integer used by the slow float paths.
//!
//! Little-endian `u32` limbs. Only the handful of operations the
//! conversion algorithms need; all of them keep the limb vector
//! normalized (no trailing zero limbs).

use core::cmp::Ordering;

const LIMB_BITS: u32 = 32;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Bignum {
    limbs: Vec<u32>,
}

impl Bignum {
    pub fn from_u64(value: u64) -> Self {
        let mut n = Self { limbs: Vec::with_capacity(2) };
        let lo = value as u32;
        let hi = (value >> 32) as u32;
        if hi != 0 {
            n.limbs.push(lo);
            n.limbs.push(hi);
        } else if lo != 0 {
            n.limbs.push(lo);
        }
        n
    }

    /// Build from digit values under `radix`, most significant first.
    pub fn from_digits(digits: &[u32], radix: u32) -> Self {
        // Fold digits in chunks that fit a u32 to cut the number of
        // big-integer multiplications.
        let (step, step_pow) = max_chunk(radix);
        let mut n = Self::from_u64(0);
        let mut chunk = 0u64;
        let mut in_chunk = 0u32;
        for &d in digits {
            chunk = chunk * radix as u64 + d as u64;
            in_chunk += 1;
            if in_chunk == step {
                n.mul_small(step_pow);
                n.add_small(chunk as u32);
                chunk = 0;
                in_chunk = 0;
            }
        }
        if in_chunk > 0 {
            n.mul_small(radix.pow(in_chunk));
            n.add_small(chunk as u32);
        }
        n
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub fn bit_length(&self) -> u32 {
        match self.limbs.last() {
            None => 0,
            Some(&top) => {
                (self.limbs.len() as u32 - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros())
            }
        }
    }

    /// Low 64 bits. Only meaningful when `bit_length() <= 64`.
    pub fn as_u64(&self) -> u64 {
        let lo = self.limbs.first().copied().unwrap_or(0) as u64;
        let hi = self.limbs.get(1).copied().unwrap_or(0) as u64;
        lo | (hi << 32)
    }

    pub fn mul_small(&mut self, factor: u32) {
        if factor == 0 {
            self.limbs.clear();
            return;
        }
        let mut carry = 0u64;
        for limb in &mut self.limbs {
            let wide = *limb as u64 * factor as u64 + carry;
            *limb = wide as u32;
            carry = wide >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
    }

    pub fn add_small(&mut self, value: u32) {
        let mut carry = value as u64;
        for limb in &mut self.limbs {
            if carry == 0 {
                return;
            }
            let wide = *limb as u64 + carry;
            *limb = wide as u32;
            carry = wide >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
    }

    /// Multiply by `radix^exp`.
    pub fn mul_pow(&mut self, radix: u32, mut exp: u32) {
        if self.is_zero() || exp == 0 {
            return;
        }
        let (step, step_pow) = max_chunk(radix);
        while exp >= step {
            self.mul_small(step_pow);
            exp -= step;
        }
        if exp > 0 {
            self.mul_small(radix.pow(exp));
        }
    }

    pub fn shl(&mut self, bits: u32) {
        if self.is_zero() || bits == 0 {
            return;
        }
        let limbs = (bits / LIMB_BITS) as usize;
        let rem = bits % LIMB_BITS;
        if rem != 0 {
            let mut carry = 0u32;
            for limb in &mut self.limbs {
                let wide = ((*limb as u64) << rem) | carry as u64;
                *limb = wide as u32;
                carry = (wide >> 32) as u32;
            }
            if carry != 0 {
                self.limbs.push(carry);
            }
        }
        if limbs > 0 {
            let mut shifted = vec![0u32; limbs];
            shifted.extend_from_slice(&self.limbs);
            self.limbs = shifted;
        }
    }

    /// Shift right by one bit, dropping the low bit.
    pub fn shr1(&mut self) {
        let mut carry = 0u32;
        for limb in self.limbs.iter_mut().rev() {
            let next_carry = *limb & 1;
            *limb = (*limb >> 1) | (carry << 31);
            carry = next_carry;
        }
        self.normalize();
    }

    pub fn cmp_with(&self, other: &Self) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }

    pub fn add_assign(&mut self, other: &Self) {
        if self.limbs.len() < other.limbs.len() {
            self.limbs.resize(other.limbs.len(), 0);
        }
        let mut carry = 0u64;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let rhs = other.limbs.get(i).copied().unwrap_or(0) as u64;
            let wide = *limb as u64 + rhs + carry;
            *limb = wide as u32;
            carry = wide >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
    }

    /// `self -= other`. Caller guarantees `self >= other`.
    pub fn sub_assign(&mut self, other: &Self) {
        debug_assert!(self.cmp_with(other) != Ordering::Less);
        let mut borrow = 0i64;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            let rhs = other.limbs.get(i).copied().unwrap_or(0) as i64;
            let mut diff = *limb as i64 - rhs - borrow;
            if diff < 0 {
                diff += 1 << 32;
                borrow = 1;
            } else {
                borrow = 0;
            }
            *limb = diff as u32;
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

/// Largest `(count, radix^count)` with `radix^count` fitting a `u32`.
fn max_chunk(radix: u32) -> (u32, u32) {
    let mut count = 0u32;
    let mut pow = 1u64;
    while pow * radix as u64 <= u32::MAX as u64 {
        pow *= radix as u64;
        count += 1;
    }
    (count, pow as u32)
}

/// `floor(num / den)` and the remainder. The quotient must fit a `u64`,
/// which every caller guarantees by scaling first.
pub(crate) fn div_rem(num: &Bignum, den: &Bignum) -> (u64, Bignum) {
    debug_assert!(!den.is_zero());
    let nb = num.bit_length();
    let db = den.bit_length();
    if nb < db {
        return (0, num.clone());
    }
    let qbits = nb - db + 1;
    debug_assert!(qbits <= 64);
    let mut rem = num.clone();
    let mut shifted = den.clone();
    shifted.shl(qbits - 1);
    let mut q = 0u64;
    for i in (0..qbits).rev() {
        if rem.cmp_with(&shifted) != Ordering::Less {
            rem.sub_assign(&shifted);
            q |= 1u64 << i;
        }
        shifted.shr1();
    }
    (q, rem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u64_round_trip() {
        assert!(Bignum::from_u64(0).is_zero());
        assert_eq!(Bignum::from_u64(1).as_u64(), 1);
        assert_eq!(Bignum::from_u64(u64::MAX).as_u64(), u64::MAX);
        assert_eq!(Bignum::from_u64(u64::MAX).bit_length(), 64);
    }

    #[test]
    fn test_from_digits() {
        let digits = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];
        assert_eq!(Bignum::from_digits(&digits, 10).as_u64(), 1234567890);
        assert_eq!(Bignum::from_digits(&[1, 0, 1], 2).as_u64(), 5);
        assert_eq!(Bignum::from_digits(&[15, 15], 16).as_u64(), 255);
        // 20 nines exceeds u64; check via division.
        let big = Bignum::from_digits(&[9; 20], 10);
        assert_eq!(big.bit_length(), 67);
    }

    #[test]
    fn test_mul_pow_and_shift() {
        let mut n = Bignum::from_u64(1);
        n.mul_pow(10, 19);
        assert_eq!(n.as_u64(), 10_000_000_000_000_000_000);
        let mut n = Bignum::from_u64(1);
        n.shl(100);
        assert_eq!(n.bit_length(), 101);
        n.shr1();
        assert_eq!(n.bit_length(), 100);
    }

    #[test]
    fn test_sub_and_cmp() {
        let mut a = Bignum::from_u64(1 << 40);
        let b = Bignum::from_u64((1 << 40) - 1);
        assert_eq!(a.cmp_with(&b), Ordering::Greater);
        a.sub_assign(&b);
        assert_eq!(a.as_u64(), 1);
        let mut c = Bignum::from_u64(100);
        c.sub_assign(&Bignum::from_u64(100));
        assert!(c.is_zero());
    }

    #[test]
    fn test_add_assign() {
        let mut a = Bignum::from_u64(u64::MAX);
        a.add_assign(&Bignum::from_u64(1));
        assert_eq!(a.bit_length(), 65);
    }

    #[test]
    fn test_div_rem() {
        let num = Bignum::from_u64(1000);
        let den = Bignum::from_u64(7);
        let (q, r) = div_rem(&num, &den);
        assert_eq!(q, 142);
        assert_eq!(r.as_u64(), 6);

        let mut num = Bignum::from_u64(1);
        num.mul_pow(10, 30);
        let mut den = Bignum::from_u64(1);
        den.mul_pow(10, 25);
        let (q, r) = div_rem(&num, &den);
        assert_eq!(q, 100_000);
        assert!(r.is_zero());
    }
}
