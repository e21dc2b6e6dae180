/* -----------------------------------------------------------------------------------
 * src/hresult.rs - Decoding of HRESULT status codes.
 * winpump - Rust-y wrapper around Win32 status codes and the message loop.
 * Copyright © 2020 not_a_seagull
 *
 * This project is licensed under either the Apache 2.0 license or the MIT license, at
 * your option. For more information, please consult the LICENSE-APACHE or LICENSE-MIT
 * files in the repository root.
 * -----------------------------------------------------------------------------------
 * MIT License:
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the “Software”), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in
 * all copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
 * THE SOFTWARE.
 * -----------------------------------------------------------------------------------
 * Apache 2.0 License Declaration:
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 * ----------------------------------------------------------------------------------
 */

//! `HRESULT` status codes.
//!
//! An `HRESULT` is a 32-bit word laid out as follows:
//!
//! ```text
//!  3 3 2 2 2 2 2 2 2 2 2 2 1 1 1 1 1 1 1 1 1 1
//!  1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0
//! +-+-+-+-+-+---------------------+-------------------------------+
//! |S|R|C|N|r|    Facility         |               Code            |
//! +-+-+-+-+-+---------------------+-------------------------------+
//! ```
//!
//! Only the severity bit, the 11-bit facility and the 16-bit facility status are decoded here. The
//! bits in between are kept in the value but never interpreted.

use core::{convert::TryFrom, fmt};

const SEVERITY_MASK: u32 = 0x8000_0000;
const SEVERITY_SHIFT: u32 = 31;
const FACILITY_MASK: u32 = 0x07FF_0000;
const FACILITY_SHIFT: u32 = 16;
const FACILITY_STATUS_MASK: u32 = 0x0000_FFFF;

/// Severity codes as defined by `winerror.h`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum SeverityCode {
    Success = 0,
    Fail = 1,
}

/// A status code returned by COM and most of the newer Win32 surface.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct HResult(u32);

impl HResult {
    pub const S_OK: HResult = HResult(0x0000_0000);
    pub const S_FALSE: HResult = HResult(0x0000_0001);
    pub const E_NOTIMPL: HResult = HResult(0x8000_4001);
    pub const E_NOINTERFACE: HResult = HResult(0x8000_4002);
    pub const E_POINTER: HResult = HResult(0x8000_4003);
    pub const E_ABORT: HResult = HResult(0x8000_4004);
    pub const E_FAIL: HResult = HResult(0x8000_4005);
    pub const E_UNEXPECTED: HResult = HResult(0x8000_FFFF);
    pub const E_ACCESSDENIED: HResult = HResult(0x8007_0005);
    pub const E_HANDLE: HResult = HResult(0x8007_0006);
    pub const E_OUTOFMEMORY: HResult = HResult(0x8007_000E);
    pub const E_INVALIDARG: HResult = HResult(0x8007_0057);
    pub const E_CANCELLED: HResult = HResult(0x8007_04C7);
    pub const RPC_E_CALL_CANCELED: HResult = HResult(0x8001_0002);
    pub const RPC_E_CALL_COMPLETE: HResult = HResult(0x8001_0117);
    pub const CO_E_CANCEL_DISABLED: HResult = HResult(0x8001_0140);

    /// Wrap a raw status word.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Build a status word out of its decoded fields. The facility is truncated to its 11 bits.
    #[inline]
    pub const fn from_parts(severity: SeverityCode, facility: u16, facility_status: u16) -> Self {
        Self(
            ((severity as u32) << SEVERITY_SHIFT)
                | (((facility as u32) << FACILITY_SHIFT) & FACILITY_MASK)
                | facility_status as u32,
        )
    }

    /// Get the full status word.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Get the severity of this status code.
    #[inline]
    pub const fn severity(self) -> SeverityCode {
        if (self.0 & SEVERITY_MASK) >> SEVERITY_SHIFT == 0 {
            SeverityCode::Success
        } else {
            SeverityCode::Fail
        }
    }

    /// Get the facility, which identifies the subsystem that produced the code.
    #[inline]
    pub const fn facility(self) -> u16 {
        ((self.0 & FACILITY_MASK) >> FACILITY_SHIFT) as u16
    }

    /// Get the facility's own status bits.
    #[inline]
    pub const fn facility_status(self) -> u16 {
        (self.0 & FACILITY_STATUS_MASK) as u16
    }

    #[inline]
    pub const fn succeeded(self) -> bool {
        matches!(self.severity(), SeverityCode::Success)
    }

    #[inline]
    pub const fn failed(self) -> bool {
        matches!(self.severity(), SeverityCode::Fail)
    }

    /// Turn a failing status code into an error.
    #[inline]
    pub fn ok(self) -> crate::Result<()> {
        if self.failed() {
            Err(crate::Error::HResult(self))
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for HResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("HResult")
            .field(&format_args!("{:#010X}", self.0))
            .finish()
    }
}

impl fmt::Display for HResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl fmt::LowerHex for HResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for HResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl From<u32> for HResult {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

// HRESULT is declared as a LONG in the headers
impl From<i32> for HResult {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value as u32)
    }
}

impl From<HResult> for u32 {
    #[inline]
    fn from(hr: HResult) -> Self {
        hr.0
    }
}

impl From<HResult> for i32 {
    #[inline]
    fn from(hr: HResult) -> Self {
        hr.0 as i32
    }
}

impl TryFrom<u32> for SeverityCode {
    type Error = u32;

    fn try_from(bit: u32) -> Result<Self, u32> {
        match bit {
            0 => Ok(Self::Success),
            1 => Ok(Self::Fail),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    quickcheck! {
        fn severity_is_top_bit(v: u32) -> bool {
            HResult::new(v).severity() as u32 == v >> 31
        }

        fn facility_is_bits_16_to_26(v: u32) -> bool {
            HResult::new(v).facility() as u32 == (v >> 16) & 0x7FF
        }

        fn facility_status_is_low_word(v: u32) -> bool {
            HResult::new(v).facility_status() as u32 == v & 0xFFFF
        }

        fn succeeded_is_not_failed(v: u32) -> bool {
            let hr = HResult::new(v);
            hr.succeeded() == !hr.failed()
        }

        fn fields_reassemble(v: u32) -> bool {
            // the reserved bits 27-30 are not part of any field
            let v = v & !0x7800_0000;
            let hr = HResult::new(v);
            HResult::from_parts(hr.severity(), hr.facility(), hr.facility_status()) == hr
        }

        fn ok_matches_severity(v: u32) -> bool {
            let hr = HResult::new(v);
            hr.ok().is_ok() == hr.succeeded()
        }
    }

    #[test]
    fn well_known_values_decode() {
        let successes = [HResult::S_OK, HResult::S_FALSE];
        for hr in successes.iter() {
            assert!(hr.succeeded(), "{} should succeed", hr);
        }

        let failures = [
            HResult::E_NOTIMPL,
            HResult::E_NOINTERFACE,
            HResult::E_POINTER,
            HResult::E_ABORT,
            HResult::E_FAIL,
            HResult::E_UNEXPECTED,
            HResult::E_ACCESSDENIED,
            HResult::E_HANDLE,
            HResult::E_OUTOFMEMORY,
            HResult::E_INVALIDARG,
            HResult::E_CANCELLED,
            HResult::RPC_E_CALL_CANCELED,
            HResult::RPC_E_CALL_COMPLETE,
            HResult::CO_E_CANCEL_DISABLED,
        ];
        for hr in failures.iter() {
            assert!(hr.failed(), "{} should fail", hr);
            assert_eq!(hr.ok(), Err(crate::Error::HResult(*hr)));
        }
    }

    #[test]
    fn win32_facility_codes() {
        // FACILITY_WIN32 wraps a plain Win32 error code
        assert_eq!(HResult::E_ACCESSDENIED.facility(), 7);
        assert_eq!(HResult::E_ACCESSDENIED.facility_status(), 5);
        assert_eq!(HResult::E_CANCELLED.facility_status(), 1223);
        assert_eq!(HResult::RPC_E_CALL_CANCELED.facility(), 1);
        assert_eq!(HResult::E_UNEXPECTED.facility(), 0);
        assert_eq!(HResult::E_UNEXPECTED.facility_status(), 0xFFFF);
    }

    #[test]
    fn from_parts_masks_facility() {
        let hr = HResult::from_parts(SeverityCode::Fail, 0xFFFF, 0x0005);
        assert_eq!(hr.value(), 0x87FF_0005);
        assert_eq!(
            HResult::from_parts(SeverityCode::Fail, 7, 5),
            HResult::E_ACCESSDENIED
        );
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{}", HResult::E_FAIL), "0x80004005");
        assert_eq!(format!("{}", HResult::S_FALSE), "0x00000001");
        assert_eq!(format!("{:x}", HResult::E_OUTOFMEMORY), "8007000e");
        assert_eq!(format!("{:?}", HResult::E_HANDLE), "HResult(0x80070006)");
    }

    #[test]
    fn signed_conversions() {
        assert_eq!(i32::from(HResult::E_FAIL), -2147467259);
        assert_eq!(HResult::from(-2147467259i32), HResult::E_FAIL);
        assert_eq!(SeverityCode::try_from(1), Ok(SeverityCode::Fail));
        assert_eq!(SeverityCode::try_from(2), Err(2));
    }
}
