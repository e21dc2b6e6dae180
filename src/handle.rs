/* -----------------------------------------------------------------------------------
 * src/handle.rs - Value wrappers around native handles.
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

//! Opaque native handles.

use core::fmt;

macro_rules! handle_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(isize);

        impl $name {
            /// Wrap a raw handle value.
            #[inline]
            pub const fn new(raw: isize) -> Self {
                Self(raw)
            }

            /// The null handle.
            #[inline]
            pub const fn null() -> Self {
                Self(0)
            }

            #[inline]
            pub const fn is_null(self) -> bool {
                self.0 == 0
            }

            /// Get the raw handle value.
            #[inline]
            pub const fn raw(self) -> isize {
                self.0
            }
        }

        impl From<isize> for $name {
            #[inline]
            fn from(raw: isize) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for isize {
            #[inline]
            fn from(h: $name) -> Self {
                h.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "0x{:X}", self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&format_args!("0x{:X}", self.0))
                    .finish()
            }
        }
    };
}

handle_type! {
    /// A native handle of any kind.
    Handle
}

handle_type! {
    /// A handle to a window. The null window is used for thread messages and to mean "any window"
    /// when filtering the message queue.
    HWnd
}

impl From<HWnd> for Handle {
    #[inline]
    fn from(hwnd: HWnd) -> Self {
        Self(hwnd.0)
    }
}

#[cfg(windows)]
impl From<winapi::shared::windef::HWND> for HWnd {
    #[inline]
    fn from(hwnd: winapi::shared::windef::HWND) -> Self {
        Self(hwnd as isize)
    }
}

#[cfg(windows)]
impl HWnd {
    /// Convert back into the pointer that the Win32 API expects.
    #[inline]
    pub fn as_hwnd(self) -> winapi::shared::windef::HWND {
        self.0 as winapi::shared::windef::HWND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handles() {
        assert!(HWnd::null().is_null());
        assert!(HWnd::default().is_null());
        assert!(!Handle::new(0x1234).is_null());
    }

    #[test]
    fn hwnd_widens_to_handle() {
        let hwnd = HWnd::new(0xBEEF);
        assert_eq!(Handle::from(hwnd), Handle::new(0xBEEF));
        assert_eq!(isize::from(hwnd), 0xBEEF);
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{}", HWnd::new(0x1A2B)), "0x1A2B");
        assert_eq!(format!("{:?}", Handle::null()), "Handle(0x0)");
    }
}
