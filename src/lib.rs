/* -----------------------------------------------------------------------------------
 * src/lib.rs - Root of the winpump library.
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

#![cfg_attr(not(feature = "std"), no_std)]

//! This is intended to be a Rust-y wrapper around the parts of Win32 that every message pump ends up
//! touching: `HRESULT` status codes, the `MSG` structure, and the `GetMessage` / `TranslateMessage` /
//! `DispatchMessage` loop.
//!
//! The status code decoder and the loop driver are platform independent. The driver is generic over
//! a [`MessageSource`] and a [`MessageDispatcher`], so it can be run against a scripted queue. The
//! [`win32`] module binds both traits to the thread's real message queue on Windows.

extern crate alloc;

#[cfg(windows)]
pub extern crate winapi;

mod error;
pub mod handle;
pub mod hresult;
pub mod msg;
pub mod msg_loop;
pub mod point;
pub mod queue_status;
pub mod vkey;
#[cfg(windows)]
pub mod win32;

pub use error::*;
pub use handle::*;
pub use hresult::*;
pub use msg::*;
pub use msg_loop::*;
pub use point::*;
pub use queue_status::*;
pub use vkey::*;

/// Get the low word (16 bits) of the least significant 32 bits.
#[inline]
pub const fn lo_word(dword: u32) -> u16 {
    (dword & 0xFFFF) as u16
}

/// Get the high word (16 bits) of the least significant 32 bits.
#[inline]
pub const fn hi_word(dword: u32) -> u16 {
    ((dword >> 16) & 0xFFFF) as u16
}

/// Get the low byte of a word.
#[inline]
pub const fn lo_byte(word: u16) -> u8 {
    (word & 0xFF) as u8
}

/// Get the high byte of a word.
#[inline]
pub const fn hi_byte(word: u16) -> u8 {
    ((word >> 8) & 0xFF) as u8
}

/// Pack two bytes into a word, the equivalent of `MAKEWORD`.
#[inline]
pub const fn make_word(low: u8, high: u8) -> u16 {
    (low as u16) | ((high as u16) << 8)
}

/// Pack two words into a signed 32-bit value, the equivalent of `MAKELONG`.
#[inline]
pub const fn make_long(low: u16, high: u16) -> i32 {
    make_dword(low, high) as i32
}

/// Pack two words into an unsigned 32-bit value.
#[inline]
pub const fn make_dword(low: u16, high: u16) -> u32 {
    (low as u32) | ((high as u32) << 16)
}

pub mod prelude {
    pub use super::{MessageDispatcher, MessageSource};
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn splits_known_words() {
        assert_eq!(lo_word(0x1234_5678), 0x5678);
        assert_eq!(hi_word(0x1234_5678), 0x1234);
        assert_eq!(lo_byte(0xABCD), 0xCD);
        assert_eq!(hi_byte(0xABCD), 0xAB);
        assert_eq!(make_long(0xFFFF, 0xFFFF), -1);
    }

    quickcheck! {
        fn dword_splits_and_rejoins(dword: u32) -> bool {
            make_dword(lo_word(dword), hi_word(dword)) == dword
        }

        fn word_splits_and_rejoins(word: u16) -> bool {
            make_word(lo_byte(word), hi_byte(word)) == word
        }

        fn make_long_reinterprets_bits(low: u16, high: u16) -> bool {
            make_long(low, high) as u32 == make_dword(low, high)
        }
    }
}
