/* -----------------------------------------------------------------------------------
 * src/queue_status.rs - Queue status flags.
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

//! Message queue status flags, as used by `GetQueueStatus` and `MsgWaitForMultipleObjects`.

use bitflags::bitflags;

bitflags! {
    /// The kinds of messages that can be sitting in a thread's queue.
    pub struct QueueStatus: u32 {
        const KEY = 0x0001;
        const MOUSE_MOVE = 0x0002;
        const MOUSE_BUTTON = 0x0004;
        const POST_MESSAGE = 0x0008;
        const TIMER = 0x0010;
        const PAINT = 0x0020;
        const SEND_MESSAGE = 0x0040;
        const HOTKEY = 0x0080;
        const ALL_POST_MESSAGE = 0x0100;
        const RAW_INPUT = 0x0400;
        /// Windows 8 and later.
        const TOUCH = 0x0800;
        /// Windows 8 and later.
        const POINTER = 0x1000;

        const MOUSE = Self::MOUSE_MOVE.bits | Self::MOUSE_BUTTON.bits;
        const INPUT = Self::MOUSE.bits
            | Self::KEY.bits
            | Self::RAW_INPUT.bits
            | Self::TOUCH.bits
            | Self::POINTER.bits;
        const ALL_EVENTS = Self::INPUT.bits
            | Self::POST_MESSAGE.bits
            | Self::TIMER.bits
            | Self::PAINT.bits
            | Self::HOTKEY.bits;
        const ALL_INPUT = Self::ALL_EVENTS.bits | Self::SEND_MESSAGE.bits;
    }
}

impl QueueStatus {
    /// Split the return value of `GetQueueStatus` into the kinds of messages currently in the queue
    /// (the high word) and the kinds added since the last check (the low word).
    #[inline]
    pub fn split_status(status: u32) -> (Self, Self) {
        (
            Self::from_bits_truncate(crate::hi_word(status) as u32),
            Self::from_bits_truncate(crate::lo_word(status) as u32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composites() {
        assert_eq!(QueueStatus::MOUSE.bits(), 0x0006);
        assert_eq!(QueueStatus::INPUT.bits(), 0x1C07);
        assert_eq!(QueueStatus::ALL_EVENTS.bits(), 0x1CBF);
        assert_eq!(QueueStatus::ALL_INPUT.bits(), 0x1CFF);
        assert!(!QueueStatus::ALL_INPUT.contains(QueueStatus::ALL_POST_MESSAGE));
    }

    #[test]
    fn splits_queue_status() {
        let (current, added) = QueueStatus::split_status(0x0021_0001);
        assert_eq!(current, QueueStatus::PAINT | QueueStatus::KEY);
        assert_eq!(added, QueueStatus::KEY);

        // bits outside the known flags are dropped
        let (current, added) = QueueStatus::split_status(0x0200_0200);
        assert!(current.is_empty());
        assert!(added.is_empty());
    }
}
