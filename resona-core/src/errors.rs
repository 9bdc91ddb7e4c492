// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type.

use std::error;
use std::fmt;
use std::result;

/// `Error` provides an enumeration of all possible errors reported by Resona.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The buffer length given to a transform is not a power of two.
    NotPowerOfTwo(usize),
    /// The length of a buffer, or the ratio between the lengths of two buffers, is not what the
    /// operation requires.
    LengthMismatch(&'static str),
    /// The requested order is not strictly less than the number of samples.
    OrderTooLarge {
        /// The requested order.
        order: usize,
        /// The number of samples provided.
        len: usize,
    },
    /// An argument was out of its valid range.
    InvalidArgument(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::NotPowerOfTwo(len) => {
                write!(f, "length is not a power of two: {}", len)
            }
            Error::LengthMismatch(msg) => {
                write!(f, "length mismatch: {}", msg)
            }
            Error::OrderTooLarge { order, len } => {
                write!(f, "order {} must be less than the number of samples ({})", order, len)
            }
            Error::InvalidArgument(msg) => {
                write!(f, "invalid argument: {}", msg)
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

/// Convenience function to create a not-a-power-of-two error.
pub fn power_of_two_error<T>(len: usize) -> Result<T> {
    Err(Error::NotPowerOfTwo(len))
}

/// Convenience function to create a length mismatch error.
pub fn length_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::LengthMismatch(desc))
}

/// Convenience function to create an order too large error.
pub fn order_error<T>(order: usize, len: usize) -> Result<T> {
    Err(Error::OrderTooLarge { order, len })
}

/// Convenience function to create an invalid argument error.
pub fn invalid_argument_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::InvalidArgument(desc))
}

/// Returns an error if `len` is not a power of two.
#[inline]
pub(crate) fn check_power_of_two(len: usize) -> Result<()> {
    if crate::util::bits::is_power_of_two(len) {
        Ok(())
    }
    else {
        power_of_two_error(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_error_display() {
        assert_eq!(Error::NotPowerOfTwo(12).to_string(), "length is not a power of two: 12");
        assert_eq!(
            Error::OrderTooLarge { order: 8, len: 4 }.to_string(),
            "order 8 must be less than the number of samples (4)"
        );
        assert_eq!(
            Error::LengthMismatch("odd length").to_string(),
            "length mismatch: odd length"
        );
    }

    #[test]
    fn verify_check_power_of_two() {
        assert!(check_power_of_two(1).is_ok());
        assert!(check_power_of_two(1024).is_ok());
        assert_eq!(check_power_of_two(0), Err(Error::NotPowerOfTwo(0)));
        assert_eq!(check_power_of_two(96), Err(Error::NotPowerOfTwo(96)));
    }
}
