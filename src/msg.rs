/* -----------------------------------------------------------------------------------
 * src/msg.rs - The MSG structure and the message queue traits.
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

//! The message record and the collaborators that the message loop talks to.

use crate::{lo_word, HWnd, Point};

/// Message information pulled from a thread's message queue, laid out like the Win32 `MSG`
/// structure.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Msg {
    /// The window whose procedure receives the message. Null for thread messages.
    pub hwnd: HWnd,
    /// The message identifier. Only the low word belongs to the application, the high word is
    /// reserved by the system.
    pub message: u32,
    pub w_param: usize,
    pub l_param: isize,
    /// The time at which the message was posted.
    pub time: u32,
    /// The cursor position, in screen coordinates, when the message was posted.
    pub pt: Point,
}

impl Msg {
    /// Create a message with a target and an identifier. Everything else is zeroed.
    #[inline]
    pub fn new(hwnd: HWnd, message: u32) -> Self {
        Self {
            hwnd,
            message,
            ..Default::default()
        }
    }

    /// Get the logical kind of message, i.e. the low word of the identifier.
    #[inline]
    pub const fn kind(&self) -> u16 {
        lo_word(self.message)
    }

    /// Is this a thread message, i.e. one not addressed to any window?
    #[inline]
    pub const fn is_thread_message(&self) -> bool {
        self.hwnd.is_null()
    }
}

#[cfg(windows)]
impl From<winapi::um::winuser::MSG> for Msg {
    #[inline]
    fn from(m: winapi::um::winuser::MSG) -> Self {
        Self {
            hwnd: m.hwnd.into(),
            message: m.message,
            w_param: m.wParam,
            l_param: m.lParam,
            time: m.time,
            pt: m.pt.into(),
        }
    }
}

#[cfg(windows)]
impl From<&Msg> for winapi::um::winuser::MSG {
    #[inline]
    fn from(m: &Msg) -> Self {
        Self {
            hwnd: m.hwnd.as_hwnd(),
            message: m.message,
            wParam: m.w_param,
            lParam: m.l_param,
            time: m.time,
            pt: m.pt.into(),
        }
    }
}

/// Restricts which messages a [`MessageSource`] hands out.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct MessageFilter {
    /// Only retrieve messages for this window. The null window accepts everything.
    pub target: HWnd,
    pub id_range_min: u32,
    pub id_range_max: u32,
}

impl MessageFilter {
    /// A filter that accepts every message.
    pub const ANY: MessageFilter = MessageFilter {
        target: HWnd::null(),
        id_range_min: 0,
        id_range_max: 0,
    };

    /// Create a filter that only accepts identifiers in `min..=max`.
    #[inline]
    pub const fn with_range(min: u32, max: u32) -> Self {
        Self {
            target: HWnd::null(),
            id_range_min: min,
            id_range_max: max,
        }
    }

    /// Get the identifier range, or `None` when it is `(0, 0)` and therefore doesn't filter anything.
    #[inline]
    pub fn id_range(&self) -> Option<(u32, u32)> {
        match (self.id_range_min, self.id_range_max) {
            (0, 0) => None,
            range => Some(range),
        }
    }

    /// Does this filter let every message through?
    #[inline]
    pub fn is_unfiltered(&self) -> bool {
        self.target.is_null() && self.id_range().is_none()
    }

    /// Would a message with this target and identifier get through the filter?
    pub fn accepts(&self, msg: &Msg) -> bool {
        let target_ok = self.target.is_null() || self.target == msg.hwnd;
        let range_ok = match self.id_range() {
            None => true,
            Some((min, max)) => min <= msg.message && msg.message <= max,
        };

        target_ok && range_ok
    }
}

/// The outcome of asking a [`MessageSource`] for the next message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Fetch {
    /// A message was retrieved.
    Message(Msg),
    /// The quit message was retrieved; the loop should end.
    Quit,
    /// Retrieval failed with the given platform error code.
    Error(u32),
}

/// A blocking queue of pending messages.
pub trait MessageSource {
    /// Block until a message that passes `filter` is available, the quit message arrives, or an
    /// error occurs.
    fn fetch_next(&mut self, filter: &MessageFilter) -> Fetch;
}

/// Hands a retrieved message on to wherever it is supposed to go.
pub trait MessageDispatcher {
    /// Translate and route the message. Nothing is returned to the caller.
    fn dispatch(&mut self, msg: &Msg);
}

impl<F: FnMut(&Msg)> MessageDispatcher for F {
    #[inline]
    fn dispatch(&mut self, msg: &Msg) {
        (self)(msg)
    }
}

impl<S: MessageSource + ?Sized> MessageSource for &mut S {
    #[inline]
    fn fetch_next(&mut self, filter: &MessageFilter) -> Fetch {
        (**self).fetch_next(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ignores_high_word() {
        let m = Msg::new(HWnd::null(), 0xDEAD_0012);
        assert_eq!(m.kind(), 0x0012);
        assert!(m.is_thread_message());
    }

    #[test]
    fn zero_range_does_not_filter() {
        assert_eq!(MessageFilter::ANY.id_range(), None);
        assert!(MessageFilter::default().is_unfiltered());
        assert_eq!(MessageFilter::with_range(0, 0x0400).id_range(), Some((0, 0x0400)));
        assert_eq!(MessageFilter::with_range(7, 0).id_range(), Some((7, 0)));
    }

    #[test]
    fn accepts_by_target_and_range() {
        let window = HWnd::new(0x10);
        let filter = MessageFilter {
            target: window,
            ..MessageFilter::with_range(0x100, 0x108)
        };

        assert!(filter.accepts(&Msg::new(window, 0x100)));
        assert!(filter.accepts(&Msg::new(window, 0x108)));
        assert!(!filter.accepts(&Msg::new(window, 0x109)));
        assert!(!filter.accepts(&Msg::new(HWnd::new(0x20), 0x100)));
        assert!(MessageFilter::ANY.accepts(&Msg::new(HWnd::new(0x20), 0xFFFF)));
    }

    #[test]
    fn closures_dispatch() {
        let mut seen = 0;
        {
            let mut d = |m: &Msg| seen += m.message;
            d.dispatch(&Msg::new(HWnd::null(), 2));
            d.dispatch(&Msg::new(HWnd::null(), 3));
        }
        assert_eq!(seen, 5);
    }
}
