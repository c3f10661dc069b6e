//! Limb algorithms over little endian `u64` word slices.

use std::cmp::Ordering;

const HALF_LIMB_BITS: u32 = 32;
const HALF_LIMB_MASK: u64 = u32::MAX as u64;

pub(crate) fn add_assign_words(lhs: &mut [u64], rhs: &[u64]) {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut carry = false;
    for (lhs_word, rhs_word) in lhs.iter_mut().zip(rhs.iter().copied()) {
        let (sum, overflowed) = lhs_word.overflowing_add(rhs_word);
        let (sum, carried) = sum.overflowing_add(u64::from(carry));
        *lhs_word = sum;
        carry = overflowed | carried;
    }
}

pub(crate) fn sub_assign_words(lhs: &mut [u64], rhs: &[u64]) {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut borrow = false;
    for (lhs_word, rhs_word) in lhs.iter_mut().zip(rhs.iter().copied()) {
        let (diff, underflowed) = lhs_word.overflowing_sub(rhs_word);
        let (diff, borrowed) = diff.overflowing_sub(u64::from(borrow));
        *lhs_word = diff;
        borrow = underflowed | borrowed;
    }
}

/// Schoolbook multiplication over 32-bit half limbs, truncated to the width
/// of `lhs`.
///
/// Partial products whose weight falls beyond the full width are never
/// computed. Every product that does land in range is rippled through all
/// the remaining half limbs, so the carry chain is exhaustive even when
/// every half limb of both operands is at its maximum.
pub(crate) fn schoolbook_mul_assign(lhs: &mut [u64], rhs: &[u64]) {
    debug_assert_eq!(lhs.len(), rhs.len());
    let half_count = lhs.len() * 2;

    let mut acc = vec![0u64; half_count];
    for i in 0..half_count {
        let lhs_half = half_limb(lhs, i);
        for j in 0..half_count - i {
            // Both factors are below 2^32, the product fits a u64.
            let product = lhs_half * half_limb(rhs, j);
            add_half_limb_at(&mut acc, i + j, product & HALF_LIMB_MASK);
            add_half_limb_at(&mut acc, i + j + 1, product >> HALF_LIMB_BITS);
        }
    }

    for (k, word) in lhs.iter_mut().enumerate() {
        *word = acc[2 * k] | (acc[2 * k + 1] << HALF_LIMB_BITS);
    }
}

fn half_limb(words: &[u64], index: usize) -> u64 {
    let word = words[index / 2];
    if index % 2 == 0 {
        word & HALF_LIMB_MASK
    } else {
        word >> HALF_LIMB_BITS
    }
}

// `acc` holds one half limb per entry, each kept below 2^32 so additions
// cannot overflow the backing u64.
fn add_half_limb_at(acc: &mut [u64], mut index: usize, mut value: u64) {
    while index < acc.len() && value != 0 {
        let sum = acc[index] + value;
        acc[index] = sum & HALF_LIMB_MASK;
        value = sum >> HALF_LIMB_BITS;
        index += 1;
    }
}

/// In-place left shift. Shifting by the full width or more clears the
/// value. A native shift by 64 is never executed: when the shift amount is
/// a multiple of 64 the words are only relocated.
pub(crate) fn shl_assign(words: &mut [u64], shift: u32) {
    let bits = (words.len() * u64::BITS as usize) as u32;
    if shift == 0 {
        return;
    }
    if shift >= bits {
        words.fill(0);
        return;
    }

    let word_shift = (shift / u64::BITS) as usize;
    let bit_shift = shift % u64::BITS;
    for i in (0..words.len()).rev() {
        let mut word = if i >= word_shift {
            words[i - word_shift] << bit_shift
        } else {
            0
        };
        if bit_shift != 0 && i > word_shift {
            word |= words[i - word_shift - 1] >> (u64::BITS - bit_shift);
        }
        words[i] = word;
    }
}

/// In-place logical right shift, mirror of [`shl_assign`].
pub(crate) fn shr_assign(words: &mut [u64], shift: u32) {
    let bits = (words.len() * u64::BITS as usize) as u32;
    if shift == 0 {
        return;
    }
    if shift >= bits {
        words.fill(0);
        return;
    }

    let word_shift = (shift / u64::BITS) as usize;
    let bit_shift = shift % u64::BITS;
    let len = words.len();
    for i in 0..len {
        let mut word = if i + word_shift < len {
            words[i + word_shift] >> bit_shift
        } else {
            0
        };
        if bit_shift != 0 && i + word_shift + 1 < len {
            word |= words[i + word_shift + 1] << (u64::BITS - bit_shift);
        }
        words[i] = word;
    }
}

pub(crate) fn bitand_assign(lhs: &mut [u64], rhs: &[u64]) {
    for (lhs_word, rhs_word) in lhs.iter_mut().zip(rhs.iter()) {
        *lhs_word &= rhs_word;
    }
}

pub(crate) fn bitor_assign(lhs: &mut [u64], rhs: &[u64]) {
    for (lhs_word, rhs_word) in lhs.iter_mut().zip(rhs.iter()) {
        *lhs_word |= rhs_word;
    }
}

pub(crate) fn bitxor_assign(lhs: &mut [u64], rhs: &[u64]) {
    for (lhs_word, rhs_word) in lhs.iter_mut().zip(rhs.iter()) {
        *lhs_word ^= rhs_word;
    }
}

pub(crate) fn bitnot_assign(words: &mut [u64]) {
    for word in words.iter_mut() {
        *word = !*word;
    }
}

/// Unsigned comparison, most significant word first.
pub(crate) fn compare(lhs: &[u64], rhs: &[u64]) -> Ordering {
    debug_assert_eq!(lhs.len(), rhs.len());
    for (lhs_word, rhs_word) in lhs.iter().rev().zip(rhs.iter().rev()) {
        match lhs_word.cmp(rhs_word) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

pub(crate) fn leading_zeros(words: &[u64]) -> u32 {
    let mut count = 0;
    for word in words.iter().rev() {
        if *word == 0 {
            count += u64::BITS;
        } else {
            return count + word.leading_zeros();
        }
    }
    count
}

pub(crate) fn copy_from_le_byte_slice(words: &mut [u64], bytes: &[u8]) {
    assert_eq!(bytes.len(), words.len() * 8);
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        // chunks_exact guarantees 8-byte chunks
        *word = u64::from_le_bytes(chunk.try_into().unwrap());
    }
}

pub(crate) fn copy_from_be_byte_slice(words: &mut [u64], bytes: &[u8]) {
    assert_eq!(bytes.len(), words.len() * 8);
    for (word, chunk) in words.iter_mut().rev().zip(bytes.chunks_exact(8)) {
        *word = u64::from_be_bytes(chunk.try_into().unwrap());
    }
}

pub(crate) fn copy_to_le_byte_slice(words: &[u64], bytes: &mut [u8]) {
    assert_eq!(bytes.len(), words.len() * 8);
    for (word, chunk) in words.iter().zip(bytes.chunks_exact_mut(8)) {
        chunk.copy_from_slice(word.to_le_bytes().as_slice());
    }
}

pub(crate) fn copy_to_be_byte_slice(words: &[u64], bytes: &mut [u8]) {
    assert_eq!(bytes.len(), words.len() * 8);
    for (word, chunk) in words.iter().rev().zip(bytes.chunks_exact_mut(8)) {
        chunk.copy_from_slice(word.to_be_bytes().as_slice());
    }
}
