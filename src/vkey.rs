/* -----------------------------------------------------------------------------------
 * src/vkey.rs - Virtual-key codes.
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

//! Virtual-key codes.
//!
//! Codes that Windows reserves, leaves unassigned or hands to OEMs have no variant and fail to
//! convert.

use core::{convert::TryFrom, fmt};

macro_rules! virtual_keys {
    ($($(#[$meta:meta])* $name:ident = $value:literal,)*) => {
        /// A virtual-key code, as found in the `wParam` of keyboard messages.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum VirtualKey {
            $($(#[$meta])* $name = $value,)*
        }

        impl VirtualKey {
            /// Every key, in ascending order of code.
            pub const ALL: &'static [VirtualKey] = &[$(VirtualKey::$name,)*];

            /// Look up the key with the given code.
            pub const fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($value => Some(Self::$name),)*
                    _ => None,
                }
            }
        }
    };
}

virtual_keys! {
    /// No key at all.
    NoKey = 0x00,
    LeftButton = 0x01,
    RightButton = 0x02,
    /// Control-break processing.
    Cancel = 0x03,
    MiddleButton = 0x04,
    XButton1 = 0x05,
    XButton2 = 0x06,
    /// Backspace.
    Back = 0x08,
    Tab = 0x09,
    Clear = 0x0C,
    Enter = 0x0D,
    Shift = 0x10,
    Control = 0x11,
    /// Either Alt key.
    Menu = 0x12,
    Pause = 0x13,
    /// Caps Lock.
    CapitalLock = 0x14,
    /// IME Kana mode. Shares its code with Hangul.
    Kana = 0x15,
    ImeOn = 0x16,
    Junja = 0x17,
    Final = 0x18,
    /// IME Hanja mode. Shares its code with Kanji.
    Hanja = 0x19,
    ImeOff = 0x1A,
    Escape = 0x1B,
    Convert = 0x1C,
    NonConvert = 0x1D,
    Accept = 0x1E,
    ModeChange = 0x1F,
    Space = 0x20,
    PageUp = 0x21,
    PageDown = 0x22,
    End = 0x23,
    Home = 0x24,
    Left = 0x25,
    Up = 0x26,
    Right = 0x27,
    Down = 0x28,
    Select = 0x29,
    Print = 0x2A,
    Execute = 0x2B,
    /// Print Screen.
    Snapshot = 0x2C,
    Insert = 0x2D,
    Delete = 0x2E,
    Help = 0x2F,
    Number0 = 0x30,
    Number1 = 0x31,
    Number2 = 0x32,
    Number3 = 0x33,
    Number4 = 0x34,
    Number5 = 0x35,
    Number6 = 0x36,
    Number7 = 0x37,
    Number8 = 0x38,
    Number9 = 0x39,
    A = 0x41,
    B = 0x42,
    C = 0x43,
    D = 0x44,
    E = 0x45,
    F = 0x46,
    G = 0x47,
    H = 0x48,
    I = 0x49,
    J = 0x4A,
    K = 0x4B,
    L = 0x4C,
    M = 0x4D,
    N = 0x4E,
    O = 0x4F,
    P = 0x50,
    Q = 0x51,
    R = 0x52,
    S = 0x53,
    T = 0x54,
    U = 0x55,
    V = 0x56,
    W = 0x57,
    X = 0x58,
    Y = 0x59,
    Z = 0x5A,
    LeftWindows = 0x5B,
    RightWindows = 0x5C,
    /// The context menu key.
    Application = 0x5D,
    Sleep = 0x5F,
    NumberPad0 = 0x60,
    NumberPad1 = 0x61,
    NumberPad2 = 0x62,
    NumberPad3 = 0x63,
    NumberPad4 = 0x64,
    NumberPad5 = 0x65,
    NumberPad6 = 0x66,
    NumberPad7 = 0x67,
    NumberPad8 = 0x68,
    NumberPad9 = 0x69,
    Multiply = 0x6A,
    Add = 0x6B,
    Separator = 0x6C,
    Subtract = 0x6D,
    Decimal = 0x6E,
    Divide = 0x6F,
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,
    F13 = 0x7C,
    F14 = 0x7D,
    F15 = 0x7E,
    F16 = 0x7F,
    F17 = 0x80,
    F18 = 0x81,
    F19 = 0x82,
    F20 = 0x83,
    F21 = 0x84,
    F22 = 0x85,
    F23 = 0x86,
    F24 = 0x87,
    /// Reserved for gamepad navigation.
    NavigationView = 0x88,
    NavigationMenu = 0x89,
    NavigationUp = 0x8A,
    NavigationDown = 0x8B,
    NavigationLeft = 0x8C,
    NavigationRight = 0x8D,
    NavigationAccept = 0x8E,
    NavigationCancel = 0x8F,
    NumberKeyLock = 0x90,
    Scroll = 0x91,
    LeftShift = 0xA0,
    RightShift = 0xA1,
    LeftControl = 0xA2,
    RightControl = 0xA3,
    LeftMenu = 0xA4,
    RightMenu = 0xA5,
    GoBack = 0xA6,
    GoForward = 0xA7,
    Refresh = 0xA8,
    Stop = 0xA9,
    Search = 0xAA,
    Favorites = 0xAB,
    GoHome = 0xAC,
    VolumeMute = 0xAD,
    VolumeDown = 0xAE,
    VolumeUp = 0xAF,
    MediaNextTrack = 0xB0,
    MediaPrevTrack = 0xB1,
    MediaStop = 0xB2,
    MediaPlayPause = 0xB3,
    LaunchMail = 0xB4,
    LaunchMediaSelect = 0xB5,
    LaunchApp1 = 0xB6,
    LaunchApp2 = 0xB7,
    /// `;:` on a US keyboard.
    Oem1 = 0xBA,
    OemPlus = 0xBB,
    OemComma = 0xBC,
    OemMinus = 0xBD,
    OemPeriod = 0xBE,
    /// `/?` on a US keyboard.
    Oem2 = 0xBF,
    /// `` `~ `` on a US keyboard.
    Oem3 = 0xC0,
    GamepadA = 0xC3,
    GamepadB = 0xC4,
    GamepadX = 0xC5,
    GamepadY = 0xC6,
    GamepadRightShoulder = 0xC7,
    GamepadLeftShoulder = 0xC8,
    GamepadLeftTrigger = 0xC9,
    GamepadRightTrigger = 0xCA,
    GamepadDPadUp = 0xCB,
    GamepadDPadDown = 0xCC,
    GamepadDPadLeft = 0xCD,
    GamepadDPadRight = 0xCE,
    GamepadMenu = 0xCF,
    GamepadView = 0xD0,
    GamepadLeftThumbstickButton = 0xD1,
    GamepadRightThumbstickButton = 0xD2,
    GamepadLeftThumbstickUp = 0xD3,
    GamepadLeftThumbstickDown = 0xD4,
    GamepadLeftThumbstickRight = 0xD5,
    GamepadLeftThumbstickLeft = 0xD6,
    GamepadRightThumbstickUp = 0xD7,
    GamepadRightThumbstickDown = 0xD8,
    GamepadRightThumbstickRight = 0xD9,
    GamepadRightThumbstickLeft = 0xDA,
    /// `[{` on a US keyboard.
    Oem4 = 0xDB,
    /// `\|` on a US keyboard.
    Oem5 = 0xDC,
    /// `]}` on a US keyboard.
    Oem6 = 0xDD,
    /// `'"` on a US keyboard.
    Oem7 = 0xDE,
    Oem8 = 0xDF,
    /// The angle bracket or backslash key on the RT 102-key keyboard.
    Oem102 = 0xE2,
    /// Sent instead of the real key while an IME is composing.
    ProcessKey = 0xE5,
    /// Passes Unicode characters as if they were keystrokes.
    Packet = 0xE7,
    Attn = 0xF6,
    CrSel = 0xF7,
    ExSel = 0xF8,
    EraseEOF = 0xF9,
    Play = 0xFA,
    Zoom = 0xFB,
    NoName = 0xFC,
    PA1 = 0xFD,
    OemClear = 0xFE,
}

impl VirtualKey {
    pub const HANGUL: VirtualKey = VirtualKey::Kana;
    pub const KANJI: VirtualKey = VirtualKey::Hanja;

    /// Get the raw code of this key.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Is this one of the mouse buttons?
    #[inline]
    pub fn is_mouse_button(self) -> bool {
        matches!(
            self,
            Self::LeftButton
                | Self::RightButton
                | Self::MiddleButton
                | Self::XButton1
                | Self::XButton2
        )
    }
}

impl From<VirtualKey> for u16 {
    #[inline]
    fn from(key: VirtualKey) -> Self {
        key.code()
    }
}

impl TryFrom<u16> for VirtualKey {
    type Error = u16;

    /// Convert a raw code, handing the code back if no key has it.
    #[inline]
    fn try_from(code: u16) -> Result<Self, u16> {
        Self::from_code(code).ok_or(code)
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_converts_back() {
        for key in VirtualKey::ALL.iter() {
            assert_eq!(VirtualKey::try_from(key.code()), Ok(*key));
        }
    }

    #[test]
    fn table_is_sorted_and_unique() {
        assert!(VirtualKey::ALL.windows(2).all(|w| w[0].code() < w[1].code()));
        assert_eq!(VirtualKey::ALL.len(), 205);
    }

    #[test]
    fn known_codes() {
        assert_eq!(VirtualKey::Escape.code(), 0x1B);
        assert_eq!(VirtualKey::A.code(), 0x41);
        assert_eq!(VirtualKey::F24.code(), 0x87);
        assert_eq!(VirtualKey::OemClear.code(), 0xFE);
        assert_eq!(VirtualKey::HANGUL.code(), 0x15);
        assert_eq!(VirtualKey::KANJI.code(), 0x19);
    }

    #[test]
    fn reserved_codes_do_not_convert() {
        for code in [0x07u16, 0x0A, 0x3A, 0x40, 0x5E, 0x92, 0xE0, 0xFF, 0x100].iter() {
            assert_eq!(VirtualKey::try_from(*code), Err(*code));
        }
    }

    #[test]
    fn mouse_buttons() {
        assert!(VirtualKey::XButton2.is_mouse_button());
        assert!(!VirtualKey::Cancel.is_mouse_button());
    }
}
