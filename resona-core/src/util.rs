// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `util` module provides a repository of commonly used utility functions sorted into distinct
//! categories.
//!
//! If a function is used all-over the codebase, and does not belong to specific top-level module,
//! it should be placed here.

pub mod bits {
    //! Utilities for bit manipulation.

    /// Bit manipulation primitives common to all unsigned integer types.
    pub trait UnsignedBits: Copy + PartialEq {
        /// The width of the type in bits.
        const BITS: u32;

        /// Returns the index of the highest set bit (`floor(log2(self))`), or 0 if no bit is set.
        fn count_bits(self) -> u32;

        /// Reverses the bit pattern over the full width of the type.
        fn reverse_bits_full(self) -> Self;

        /// Reverses the bit pattern of the low `width` bits. All other bits are discarded.
        ///
        /// # Panics
        ///
        /// Panics if `width` is 0, or greater than [`UnsignedBits::BITS`].
        fn reverse_bits_width(self, width: u32) -> Self;

        /// Returns true if exactly one bit is set.
        fn is_power_of_two(self) -> bool;
    }

    macro_rules! unsigned_bits_impl {
        ($t:ty) => {
            impl UnsignedBits for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn count_bits(self) -> u32 {
                    match self {
                        0 => 0,
                        _ => Self::BITS - 1 - self.leading_zeros(),
                    }
                }

                #[inline(always)]
                fn reverse_bits_full(self) -> Self {
                    self.reverse_bits()
                }

                #[inline(always)]
                fn reverse_bits_width(self, width: u32) -> Self {
                    assert!(width > 0 && width <= Self::BITS, "bit width out of range");
                    // Left-justify the low `width` bits, then reverse the full word so those bits
                    // land, reversed, in the low `width` bits of the result.
                    (self << (Self::BITS - width)).reverse_bits()
                }

                #[inline(always)]
                fn is_power_of_two(self) -> bool {
                    self != 0 && self & (self - 1) == 0
                }
            }
        };
    }

    unsigned_bits_impl!(u8);
    unsigned_bits_impl!(u16);
    unsigned_bits_impl!(u32);
    unsigned_bits_impl!(u64);
    unsigned_bits_impl!(usize);

    /// Returns `floor(log2(value))`, the index of the highest set bit. Returns 0 when `value` is 0.
    #[inline(always)]
    pub fn count_bits<T: UnsignedBits>(value: T) -> u32 {
        value.count_bits()
    }

    /// Reverses the bits of `value` over the full width of its type.
    #[inline(always)]
    pub fn reverse_bits<T: UnsignedBits>(value: T) -> T {
        value.reverse_bits_full()
    }

    /// Reverses the low `width` bits of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is 0 or exceeds the width of `T`.
    #[inline(always)]
    pub fn reverse_bits_width<T: UnsignedBits>(value: T, width: u32) -> T {
        value.reverse_bits_width(width)
    }

    /// Returns true if `value` is non-zero and has exactly one bit set.
    #[inline(always)]
    pub fn is_power_of_two<T: UnsignedBits>(value: T) -> bool {
        value.is_power_of_two()
    }

    /// Sign extends an arbitrary, 8-bit or less, signed two's complement integer stored within an
    /// u8 to a full width i8.
    #[inline(always)]
    pub fn sign_extend_leq8_to_i8(value: u8, width: u32) -> i8 {
        // Rust uses an arithmetic shift right (the original sign bit is repeatedly shifted on) for
        // signed integer types. Therefore, shift the value to the right-hand side of the integer,
        // then shift it back to extend the sign bit.
        (value.wrapping_shl(8 - width) as i8).wrapping_shr(8 - width)
    }

    /// Sign extends an arbitrary, 16-bit or less, signed two's complement integer stored within an
    /// u16 to a full width i16.
    #[inline(always)]
    pub fn sign_extend_leq16_to_i16(value: u16, width: u32) -> i16 {
        (value.wrapping_shl(16 - width) as i16).wrapping_shr(16 - width)
    }

    /// Sign extends an arbitrary, 32-bit or less, signed two's complement integer stored within an
    /// u32 to a full width i32.
    #[inline(always)]
    pub fn sign_extend_leq32_to_i32(value: u32, width: u32) -> i32 {
        (value.wrapping_shl(32 - width) as i32).wrapping_shr(32 - width)
    }

    /// Sign extends an arbitrary, 64-bit or less, signed two's complement integer stored within an
    /// u64 to a full width i64.
    #[inline(always)]
    pub fn sign_extend_leq64_to_i64(value: u64, width: u32) -> i64 {
        (value.wrapping_shl(64 - width) as i64).wrapping_shr(64 - width)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn verify_count_bits() {
            assert_eq!(count_bits(0u32), 0);
            assert_eq!(count_bits(1u32), 0);
            assert_eq!(count_bits(3u32), 1);
            assert_eq!(count_bits(255u8), 7);
            assert_eq!(count_bits(1000usize), 9);

            for k in 0..64 {
                assert_eq!(count_bits(1u64 << k), k);
            }
            for k in 0..16 {
                assert_eq!(count_bits(1u16 << k), k);
            }
        }

        #[test]
        fn verify_reverse_bits() {
            assert_eq!(reverse_bits(0b0000_0001u8), 0b1000_0000);
            assert_eq!(reverse_bits(0b1100_1010u8), 0b0101_0011);
            assert_eq!(reverse_bits(0x0000_0001u32), 0x8000_0000);
            assert_eq!(reverse_bits(0x0000_00f0u16), 0x0f00);

            for &x in &[0u64, 1, 0xdead_beef, 0x0123_4567_89ab_cdef, u64::MAX, 1 << 63] {
                assert_eq!(reverse_bits(reverse_bits(x)), x);
            }
            for x in 0..=u8::MAX {
                assert_eq!(reverse_bits(reverse_bits(x)), x);
            }
        }

        #[test]
        fn verify_reverse_bits_width() {
            assert_eq!(reverse_bits_width(0b001u32, 3), 0b100);
            assert_eq!(reverse_bits_width(0b110u32, 3), 0b011);
            assert_eq!(reverse_bits_width(0b1u8, 1), 0b1);
            assert_eq!(reverse_bits_width(0b0001u16, 4), 0b1000);
            // Bits above the width are discarded.
            assert_eq!(reverse_bits_width(0b1111_0001u8, 4), 0b1000);
            // A full width reverse is the same as reverse_bits.
            assert_eq!(reverse_bits_width(0x1234_5678u32, 32), reverse_bits(0x1234_5678u32));

            for width in 1..=10 {
                for x in 0..(1usize << width) {
                    assert_eq!(reverse_bits_width(reverse_bits_width(x, width), width), x);
                }
            }
        }

        #[test]
        #[should_panic]
        fn verify_reverse_bits_zero_width() {
            reverse_bits_width(1u32, 0);
        }

        #[test]
        #[should_panic]
        fn verify_reverse_bits_excess_width() {
            reverse_bits_width(1u8, 9);
        }

        #[test]
        fn verify_is_power_of_two() {
            for k in 0..=30 {
                assert!(is_power_of_two(1u32 << k));
            }
            for k in 1..=30 {
                assert!(!is_power_of_two((1u32 << k) + 1));
            }
            assert!(!is_power_of_two(0u32));
            assert!(!is_power_of_two(0usize));
            assert!(!is_power_of_two(6u8));
            assert!(is_power_of_two(1u64 << 63));
        }

        #[test]
        fn verify_sign_extend() {
            assert_eq!(sign_extend_leq8_to_i8(0b0000_0111, 3), -1);
            assert_eq!(sign_extend_leq8_to_i8(0b0000_0011, 3), 3);
            assert_eq!(sign_extend_leq16_to_i16(0x0800, 12), -2048);
            assert_eq!(sign_extend_leq32_to_i32(0x00ff_ffff, 24), -1);
            assert_eq!(sign_extend_leq32_to_i32(0x007f_ffff, 24), 8_388_607);
            assert_eq!(sign_extend_leq32_to_i32(0x0080_0000, 24), -8_388_608);
            assert_eq!(sign_extend_leq64_to_i64(0x1_0000_0000, 33), -4_294_967_296);
        }
    }
}
