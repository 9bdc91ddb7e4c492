// Resona
// Copyright (c) 2026 The Project Resona Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::checksum::Monitor;
use crate::errors::{invalid_argument_error, Result};
use crate::util::bits::reverse_bits_width;

/// The parameters of a cyclic redundancy check, in the notation of the "Catalogue of parametrised
/// CRC algorithms".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CrcParams {
    /// The name of the algorithm.
    pub name: &'static str,
    /// The width of the CRC register in bits.
    pub width: u32,
    /// The generator polynomial, without the implicit leading term.
    pub poly: u32,
    /// The initial value of the register.
    pub init: u32,
    /// If true, each input byte is processed least-significant bit first.
    pub reflect_in: bool,
    /// If true, the final register value is bit-reversed before the output XOR.
    pub reflect_out: bool,
    /// The value XORed with the final register value.
    pub xor_out: u32,
    /// The checksum of the ASCII string "123456789".
    pub check: u32,
}

/// CRC-8 used by SMBus, and FLAC frame headers.
pub const CRC_8_SMBUS: CrcParams = CrcParams {
    name: "CRC-8/SMBUS",
    width: 8,
    poly: 0x07,
    init: 0x00,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
    check: 0xf4,
};

/// CRC-8 used by the Dallas/Maxim 1-Wire bus.
pub const CRC_8_MAXIM: CrcParams = CrcParams {
    name: "CRC-8/MAXIM-DOW",
    width: 8,
    poly: 0x31,
    init: 0x00,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x00,
    check: 0xa1,
};

/// CRC-16 also known as CRC-16/ANSI, or CRC-IBM.
pub const CRC_16_ARC: CrcParams = CrcParams {
    name: "CRC-16/ARC",
    width: 16,
    poly: 0x8005,
    init: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
    check: 0xbb3d,
};

/// CRC-16 also known as CRC-16/CCITT-FALSE.
pub const CRC_16_IBM_3740: CrcParams = CrcParams {
    name: "CRC-16/IBM-3740",
    width: 16,
    poly: 0x1021,
    init: 0xffff,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    check: 0x29b1,
};

/// CRC-16 used by the XMODEM protocol.
pub const CRC_16_XMODEM: CrcParams = CrcParams {
    name: "CRC-16/XMODEM",
    width: 16,
    poly: 0x1021,
    init: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    check: 0x31c3,
};

/// CRC-24 used by OpenPGP ASCII armor.
pub const CRC_24_OPENPGP: CrcParams = CrcParams {
    name: "CRC-24/OPENPGP",
    width: 24,
    poly: 0x86_4cfb,
    init: 0xb7_04ce,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00_0000,
    check: 0x21_cf02,
};

/// The ubiquitous CRC-32 used by Ethernet, zlib, and PNG.
pub const CRC_32_ISO_HDLC: CrcParams = CrcParams {
    name: "CRC-32/ISO-HDLC",
    width: 32,
    poly: 0x04c1_1db7,
    init: 0xffff_ffff,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xffff_ffff,
    check: 0xcbf4_3926,
};

/// CRC-32 used by bzip2, the unreflected form of CRC-32/ISO-HDLC.
pub const CRC_32_BZIP2: CrcParams = CrcParams {
    name: "CRC-32/BZIP2",
    width: 32,
    poly: 0x04c1_1db7,
    init: 0xffff_ffff,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0xffff_ffff,
    check: 0xfc89_1918,
};

/// CRC-32C (Castagnoli).
pub const CRC_32_ISCSI: CrcParams = CrcParams {
    name: "CRC-32/ISCSI",
    width: 32,
    poly: 0x1edc_6f41,
    init: 0xffff_ffff,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xffff_ffff,
    check: 0xe306_9283,
};

/// CRC-32 used by MPEG-2 transport streams, and Ogg pages (with a zero initial value).
pub const CRC_32_MPEG_2: CrcParams = CrcParams {
    name: "CRC-32/MPEG-2",
    width: 32,
    poly: 0x04c1_1db7,
    init: 0xffff_ffff,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000_0000,
    check: 0x0376_e6e7,
};

/// All catalogued CRC algorithms.
pub const CRC_CATALOG: &[CrcParams] = &[
    CRC_8_SMBUS,
    CRC_8_MAXIM,
    CRC_16_ARC,
    CRC_16_IBM_3740,
    CRC_16_XMODEM,
    CRC_24_OPENPGP,
    CRC_32_ISO_HDLC,
    CRC_32_BZIP2,
    CRC_32_ISCSI,
    CRC_32_MPEG_2,
];

/// A table-driven cyclic redundancy check of any width between 8 and 32 bits.
#[derive(Clone)]
pub struct Crc {
    params: CrcParams,
    table: [u32; 256],
    mask: u32,
    state: u32,
}

impl Crc {
    /// Instantiate a CRC from the given parameters.
    ///
    /// Use [`Crc::try_new`] for parameters that are not known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if the width is not between 8 and 32 bits, or if the polynomial, initial value, or
    /// output XOR value is wider than the width.
    pub fn new(params: &CrcParams) -> Self {
        match Crc::try_new(params) {
            Ok(crc) => crc,
            Err(err) => panic!("{}", err),
        }
    }

    /// Instantiate a CRC from the given parameters, or return an error if the parameters are
    /// invalid.
    pub fn try_new(params: &CrcParams) -> Result<Self> {
        if params.width < 8 || params.width > 32 {
            return invalid_argument_error("crc width must be between 8 and 32 bits");
        }

        let width = params.width;
        let mask = ((1u64 << width) - 1) as u32;

        if params.poly & !mask != 0 || params.init & !mask != 0 || params.xor_out & !mask != 0 {
            return invalid_argument_error("crc parameter exceeds the register width");
        }

        let mut table = [0u32; 256];

        if params.reflect_in {
            // The register is kept in reflected form. Therefore, the polynomial is reflected and
            // bits are shifted out of the least-significant end.
            let poly = reverse_bits_width(params.poly, width);

            for (byte, t) in table.iter_mut().enumerate() {
                let mut crc = byte as u32;
                for _ in 0..8 {
                    crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
                }
                *t = crc & mask;
            }
        }
        else {
            let top = 1u32 << (width - 1);

            for (byte, t) in table.iter_mut().enumerate() {
                let mut crc = (byte as u32) << (width - 8);
                for _ in 0..8 {
                    crc = if crc & top != 0 { (crc << 1) ^ params.poly } else { crc << 1 };
                }
                *t = crc & mask;
            }
        }

        let mut crc = Crc { params: *params, table, mask, state: 0 };
        crc.reset();
        Ok(crc)
    }

    /// Get the parameters of the CRC.
    pub fn params(&self) -> &CrcParams {
        &self.params
    }

    /// Reset the CRC to its initial state.
    pub fn reset(&mut self) {
        self.state = if self.params.reflect_in {
            reverse_bits_width(self.params.init, self.params.width)
        }
        else {
            self.params.init
        };
    }

    /// Returns the CRC computed so far.
    pub fn crc(&self) -> u32 {
        let mut crc = self.state;

        if self.params.reflect_in != self.params.reflect_out {
            crc = reverse_bits_width(crc, self.params.width);
        }

        (crc ^ self.params.xor_out) & self.mask
    }
}

impl Monitor for Crc {
    #[inline(always)]
    fn process_byte(&mut self, byte: u8) {
        if self.params.reflect_in {
            let idx = (self.state ^ u32::from(byte)) & 0xff;
            self.state = (self.state >> 8) ^ self.table[idx as usize];
        }
        else {
            let idx = ((self.state >> (self.params.width - 8)) ^ u32::from(byte)) & 0xff;
            self.state = ((self.state << 8) ^ self.table[idx as usize]) & self.mask;
        }
    }

    fn process_buf_bytes(&mut self, buf: &[u8]) {
        for &byte in buf {
            self.process_byte(byte);
        }
    }
}

/// Computes the CRC of `buf` in one shot, or returns an error if the parameters are invalid.
pub fn checksum(params: &CrcParams, buf: &[u8]) -> Result<u32> {
    let mut crc = Crc::try_new(params)?;
    crc.process_buf_bytes(buf);
    Ok(crc.crc())
}
