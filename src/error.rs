/* -----------------------------------------------------------------------------------
 * src/error.rs - Common error type to keep things simple.
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

use crate::HResult;
use thiserror::Error;

/// The error used by the winpump API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The message source reported a platform error while retrieving a message.
    #[error("message retrieval failed with platform error code {code}")]
    PlatformCall { code: u32 },
    /// A status code was checked and found to describe a failure.
    #[error("operation failed with HRESULT {0}")]
    HResult(HResult),
}

impl Error {
    /// Get the raw platform error code carried by this error.
    #[inline]
    pub fn code(&self) -> u32 {
        match *self {
            Self::PlatformCall { code } => code,
            Self::HResult(hr) => hr.value(),
        }
    }
}

impl From<HResult> for Error {
    #[inline]
    fn from(hr: HResult) -> Self {
        Self::HResult(hr)
    }
}

impl From<Error> for core::fmt::Error {
    fn from(_f: Error) -> Self {
        Self
    }
}

/// A result, for conveinence.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_code() {
        assert_eq!(
            Error::PlatformCall { code: 5 }.to_string(),
            "message retrieval failed with platform error code 5"
        );
        assert_eq!(
            Error::HResult(HResult::E_FAIL).to_string(),
            "operation failed with HRESULT 0x80004005"
        );
    }

    #[test]
    fn code_is_raw_value() {
        assert_eq!(Error::PlatformCall { code: 1400 }.code(), 1400);
        assert_eq!(Error::from(HResult::E_ACCESSDENIED).code(), 0x8007_0005);
    }
}
