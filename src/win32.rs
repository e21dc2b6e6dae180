/* -----------------------------------------------------------------------------------
 * src/win32.rs - Binding of the message loop to the Win32 message queue.
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

//! The thread's real message queue.
//!
//! [`ThreadQueue`] retrieves messages with `GetMessageW` and [`WindowDispatcher`] hands them to
//! `TranslateMessage` and `DispatchMessageW`. Both are bound to the calling thread, since that is
//! where Windows keeps the queue.

use crate::{Fetch, MessageDispatcher, MessageFilter, MessageLoop, MessageSource, Msg, QueueStatus};
use alloc::{string::String, vec::Vec};
use core::{cmp::Ordering, marker::PhantomData, mem::MaybeUninit, ptr};
use cty::c_int;
use winapi::{
    shared::minwindef::DWORD,
    um::{errhandlingapi, winbase::*, winuser},
};

/// The calling thread's message queue, as a [`MessageSource`].
#[derive(Debug, Default)]
pub struct ThreadQueue {
    _thread_bound: PhantomData<*const ()>,
}

impl ThreadQueue {
    #[inline]
    pub fn new() -> Self {
        Self {
            _thread_bound: PhantomData,
        }
    }
}

impl MessageSource for ThreadQueue {
    fn fetch_next(&mut self, filter: &MessageFilter) -> Fetch {
        let mut m: MaybeUninit<winuser::MSG> = MaybeUninit::zeroed();

        match unsafe {
            winuser::GetMessageW(
                m.as_mut_ptr(),
                filter.target.as_hwnd(),
                filter.id_range_min,
                filter.id_range_max,
            )
        }
        .cmp(&0)
        {
            Ordering::Greater => {
                // if GetMessage is greater than zero, we've received a valid message
                Fetch::Message(unsafe { m.assume_init() }.into())
            }
            Ordering::Equal => {
                // if GetMessage is zero, this is the quit message
                Fetch::Quit
            }
            Ordering::Less => {
                // if GetMessage is less than zero, an error has occurred
                let code = unsafe { errhandlingapi::GetLastError() };
                match system_message(code) {
                    Some(text) => tracing::warn!(code, "GetMessageW failed: {}", text.trim_end()),
                    None => tracing::warn!(code, "GetMessageW failed"),
                }
                Fetch::Error(code)
            }
        }
    }
}

/// Translates virtual-key messages and sends every message to its window procedure.
#[derive(Debug, Default)]
pub struct WindowDispatcher {
    _thread_bound: PhantomData<*const ()>,
}

impl WindowDispatcher {
    #[inline]
    pub fn new() -> Self {
        Self {
            _thread_bound: PhantomData,
        }
    }
}

impl MessageDispatcher for WindowDispatcher {
    #[inline]
    fn dispatch(&mut self, msg: &Msg) {
        let raw: winuser::MSG = msg.into();

        // note: TranslateMessage does not fail, and DispatchMessage returns whatever the window
        //       procedure returned. Both should be ignored.
        unsafe {
            winuser::TranslateMessage(&raw);
            winuser::DispatchMessageW(&raw);
        }
    }
}

/// Run the standard message loop on the calling thread until `WM_QUIT` is retrieved.
///
/// Returns `0` on quit. If retrieving a message fails, this returns `-1`, or an error when
/// `throw_on_error` is set.
pub fn run_message_loop(throw_on_error: bool) -> crate::Result<c_int> {
    MessageLoop::new()
        .throw_on_error(throw_on_error)
        .run(&mut ThreadQueue::new(), &mut WindowDispatcher::new())
}

/// Post `WM_QUIT` to the calling thread's queue, which ends its message loop.
#[inline]
pub fn post_quit_message(exit_code: c_int) {
    unsafe { winuser::PostQuitMessage(exit_code) };
}

/// Get the kinds of messages currently in the calling thread's queue and the kinds added since
/// the last call, restricted to `flags`.
#[inline]
pub fn queue_status(flags: QueueStatus) -> (QueueStatus, QueueStatus) {
    QueueStatus::split_status(unsafe { winuser::GetQueueStatus(flags.bits()) })
}

/// Get the system's description of a Win32 error code, if it has one.
pub fn system_message(code: DWORD) -> Option<String> {
    const ERROR_BUFFER_SIZE: usize = 256;
    let mut error_buffer = Vec::with_capacity(ERROR_BUFFER_SIZE);

    let len = unsafe {
        FormatMessageA(
            FORMAT_MESSAGE_IGNORE_INSERTS | FORMAT_MESSAGE_FROM_SYSTEM,
            ptr::null(),
            code,
            0,
            error_buffer.as_mut_ptr(),
            ERROR_BUFFER_SIZE as DWORD,
            ptr::null_mut(),
        )
    };

    if len == 0 {
        return None;
    }

    unsafe { error_buffer.set_len(len as usize) };

    String::from_utf8(error_buffer.into_iter().map(|i| i as u8).collect()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_ends_the_loop() {
        post_quit_message(3);
        assert_eq!(run_message_loop(true), Ok(0));
    }

    #[test]
    fn quit_is_fetched() {
        post_quit_message(0);
        assert_eq!(
            ThreadQueue::new().fetch_next(&MessageFilter::ANY),
            Fetch::Quit
        );
    }

    #[test]
    fn access_denied_has_a_description() {
        assert!(system_message(5).map_or(false, |s| !s.is_empty()));
    }
}
