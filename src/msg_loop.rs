/* -----------------------------------------------------------------------------------
 * src/msg_loop.rs - The retrieve, translate, dispatch loop.
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

//! The fetch, translate, dispatch cycle.
//!
//! A [`MessageLoop`] is configured up front and then run against a [`MessageSource`] and a
//! [`MessageDispatcher`]. It keeps going until the source reports either the quit message or an
//! error. A single error always ends the loop; there is no retry.

use crate::{Fetch, HWnd, MessageDispatcher, MessageFilter, MessageSource, Msg};
use core::fmt;
use cty::c_int;

/// Why a message loop stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LoopExit {
    /// The quit message was retrieved.
    Quit,
    /// The source failed with the given platform error code.
    Failed(u32),
}

impl LoopExit {
    /// The value that a non-throwing message loop returns for this exit: `0` on quit, `-1` on error.
    #[inline]
    pub const fn code(self) -> c_int {
        match self {
            Self::Quit => 0,
            Self::Failed(_) => -1,
        }
    }
}

/// A configurable message loop.
pub struct MessageLoop<'a> {
    throw_on_error: bool,
    peek_message: Option<&'a mut dyn FnMut(&Msg)>,
    filter: MessageFilter,
}

impl<'a> fmt::Debug for MessageLoop<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MessageLoop")
            .field("throw_on_error", &self.throw_on_error)
            .field("peek_message", &self.peek_message.is_some())
            .field("filter", &self.filter)
            .finish()
    }
}

impl<'a> Default for MessageLoop<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MessageLoop<'a> {
    /// Create a loop that accepts every message and reports errors through its return value.
    #[inline]
    pub fn new() -> Self {
        Self {
            throw_on_error: false,
            peek_message: None,
            filter: MessageFilter::ANY,
        }
    }

    /// Whether a retrieval error should be returned as an `Err` instead of the `-1` exit code.
    #[inline]
    pub fn throw_on_error(mut self, throw_on_error: bool) -> Self {
        self.throw_on_error = throw_on_error;
        self
    }

    /// Set a hook that sees every message before it is dispatched.
    #[inline]
    pub fn peek_message(mut self, hook: &'a mut dyn FnMut(&Msg)) -> Self {
        self.peek_message = Some(hook);
        self
    }

    /// Replace the whole message filter.
    #[inline]
    pub fn filter(mut self, filter: MessageFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Only retrieve messages addressed to `target`.
    #[inline]
    pub fn target(mut self, target: HWnd) -> Self {
        self.filter.target = target;
        self
    }

    /// Only retrieve messages with identifiers in `min..=max`. `(0, 0)` turns the range off.
    #[inline]
    pub fn id_range(mut self, min: u32, max: u32) -> Self {
        self.filter.id_range_min = min;
        self.filter.id_range_max = max;
        self
    }

    /// Get the filter that is passed to the source on every fetch.
    #[inline]
    pub fn current_filter(&self) -> &MessageFilter {
        &self.filter
    }

    /// Pump messages until the source quits or fails, and report which of the two happened.
    pub fn pump<S, D>(&mut self, source: &mut S, dispatcher: &mut D) -> LoopExit
    where
        S: MessageSource + ?Sized,
        D: MessageDispatcher + ?Sized,
    {
        tracing::debug!(
            throw_on_error = self.throw_on_error,
            filtered = !self.filter.is_unfiltered(),
            "message loop starting"
        );

        let mut dispatched: u64 = 0;
        let exit = loop {
            let msg = match source.fetch_next(&self.filter) {
                Fetch::Message(msg) => msg,
                Fetch::Quit => break LoopExit::Quit,
                Fetch::Error(code) => {
                    tracing::warn!(code, "message retrieval failed");
                    break LoopExit::Failed(code);
                }
            };

            tracing::trace!(kind = msg.kind(), hwnd = %msg.hwnd, "dispatching message");

            if let Some(ref mut hook) = self.peek_message {
                hook(&msg);
            }
            dispatcher.dispatch(&msg);
            dispatched += 1;
        };

        tracing::debug!(?exit, dispatched, "message loop exited");
        exit
    }

    /// Pump messages until the source quits or fails.
    ///
    /// Returns `0` when the quit message is retrieved. On a retrieval error this either returns
    /// `-1` or, if the loop was told to throw on errors, an [`Error::PlatformCall`] carrying the
    /// platform error code.
    ///
    /// [`Error::PlatformCall`]: crate::Error::PlatformCall
    pub fn run<S, D>(&mut self, source: &mut S, dispatcher: &mut D) -> crate::Result<c_int>
    where
        S: MessageSource + ?Sized,
        D: MessageDispatcher + ?Sized,
    {
        match self.pump(source, dispatcher) {
            LoopExit::Failed(code) if self.throw_on_error => Err(crate::Error::PlatformCall { code }),
            exit => Ok(exit.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::VecDeque};

    /// A source that plays back a fixed script and records the filter of every fetch.
    struct Scripted {
        script: VecDeque<Fetch>,
        filters: Vec<MessageFilter>,
    }

    impl Scripted {
        fn new(script: Vec<Fetch>) -> Self {
            Self {
                script: script.into(),
                filters: Vec::new(),
            }
        }
    }

    impl MessageSource for Scripted {
        fn fetch_next(&mut self, filter: &MessageFilter) -> Fetch {
            self.filters.push(*filter);
            self.script
                .pop_front()
                .expect("message loop fetched past the end of the script")
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Peeked(Msg),
        Dispatched(Msg),
    }

    fn msg(id: u32) -> Msg {
        Msg::new(HWnd::new(0x42), id)
    }

    #[test]
    fn quits_after_dispatching_in_order() {
        let (m1, m2) = (msg(0x0100), msg(0x0101));
        let mut source = Scripted::new(vec![Fetch::Message(m1), Fetch::Message(m2), Fetch::Quit]);
        let mut dispatched = Vec::new();

        let ret = MessageLoop::new()
            .run(&mut source, &mut |m: &Msg| dispatched.push(*m))
            .unwrap();

        assert_eq!(ret, 0);
        assert_eq!(dispatched, vec![m1, m2]);
        assert_eq!(source.filters.len(), 3);
    }

    #[test]
    fn error_returns_minus_one() {
        let mut source = Scripted::new(vec![Fetch::Error(5)]);
        let mut dispatches = 0;

        let ret = MessageLoop::new()
            .throw_on_error(false)
            .run(&mut source, &mut |_: &Msg| dispatches += 1);

        assert_eq!(ret, Ok(-1));
        assert_eq!(dispatches, 0);
    }

    #[test]
    fn error_is_thrown_when_asked() {
        let mut source = Scripted::new(vec![Fetch::Error(5), Fetch::Quit]);
        let mut dispatches = 0;

        let ret = MessageLoop::new()
            .throw_on_error(true)
            .run(&mut source, &mut |_: &Msg| dispatches += 1);

        assert_eq!(ret, Err(crate::Error::PlatformCall { code: 5 }));
        assert_eq!(dispatches, 0);
        // the loop must not fetch again after the error
        assert_eq!(source.script.len(), 1);
    }

    #[test]
    fn error_after_messages_stops_the_loop() {
        let mut source = Scripted::new(vec![
            Fetch::Message(msg(1)),
            Fetch::Error(1400),
            Fetch::Message(msg(2)),
        ]);
        let mut dispatched = Vec::new();

        let exit = MessageLoop::new().pump(&mut source, &mut |m: &Msg| dispatched.push(*m));

        assert_eq!(exit, LoopExit::Failed(1400));
        assert_eq!(exit.code(), -1);
        assert_eq!(dispatched, vec![msg(1)]);
    }

    #[test]
    fn peek_hook_runs_before_dispatch() {
        let m = msg(0x000F);
        let mut source = Scripted::new(vec![Fetch::Message(m), Fetch::Quit]);
        let events = RefCell::new(Vec::new());

        let mut hook = |m: &Msg| events.borrow_mut().push(Event::Peeked(*m));
        let mut dispatcher = |m: &Msg| events.borrow_mut().push(Event::Dispatched(*m));

        let ret = MessageLoop::new()
            .peek_message(&mut hook)
            .run(&mut source, &mut dispatcher);

        assert_eq!(ret, Ok(0));
        assert_eq!(
            events.into_inner(),
            vec![Event::Peeked(m), Event::Dispatched(m)]
        );
    }

    #[test]
    fn unfiltered_by_default() {
        let mut source = Scripted::new(vec![
            Fetch::Message(msg(1)),
            Fetch::Message(msg(2)),
            Fetch::Quit,
        ]);

        MessageLoop::new()
            .run(&mut source, &mut |_: &Msg| {})
            .unwrap();

        assert_eq!(source.filters.len(), 3);
        assert!(source.filters.iter().all(MessageFilter::is_unfiltered));
    }

    #[test]
    fn filter_passes_through_unchanged() {
        let target = HWnd::new(0x99);
        let mut source = Scripted::new(vec![
            Fetch::Message(msg(0x0200)),
            Fetch::Message(msg(0x0201)),
            Fetch::Quit,
        ]);

        let mut message_loop = MessageLoop::new().target(target).id_range(0x0200, 0x020E);
        message_loop
            .run(&mut source, &mut |_: &Msg| {})
            .unwrap();

        let expected = MessageFilter {
            target,
            id_range_min: 0x0200,
            id_range_max: 0x020E,
        };
        assert_eq!(message_loop.current_filter(), &expected);
        assert_eq!(source.filters, vec![expected; 3]);
    }

    #[test]
    fn loop_can_be_run_again() {
        let mut message_loop = MessageLoop::new().throw_on_error(true);

        let mut first = Scripted::new(vec![Fetch::Message(msg(1)), Fetch::Quit]);
        let mut second = Scripted::new(vec![Fetch::Error(6)]);
        let mut count = 0;

        assert_eq!(message_loop.run(&mut first, &mut |_: &Msg| count += 1), Ok(0));
        assert_eq!(
            message_loop.run(&mut second, &mut |_: &Msg| count += 1),
            Err(crate::Error::PlatformCall { code: 6 })
        );
        assert_eq!(count, 1);
    }
}
