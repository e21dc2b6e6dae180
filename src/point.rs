/* -----------------------------------------------------------------------------------
 * src/point.rs - The POINT structure.
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

use core::fmt;
use euclid::default::Point2D;

/// The *x* and *y* coordinates of a point, laid out like the Win32 `POINT` structure.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Split the point into its coordinates.
    #[inline]
    pub const fn into_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        p.into_tuple()
    }
}

impl From<Point2D<i32>> for Point {
    #[inline]
    fn from(p: Point2D<i32>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for Point2D<i32> {
    #[inline]
    fn from(p: Point) -> Self {
        Point2D::new(p.x, p.y)
    }
}

#[cfg(windows)]
impl From<winapi::shared::windef::POINT> for Point {
    #[inline]
    fn from(p: winapi::shared::windef::POINT) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[cfg(windows)]
impl From<Point> for winapi::shared::windef::POINT {
    #[inline]
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_equality() {
        assert_eq!(Point::new(3, -4), Point::from((3, -4)));
        assert_ne!(Point::new(3, -4), Point::new(-4, 3));
        assert_eq!(Point::default(), Point::new(0, 0));
    }

    #[test]
    fn euclid_conversion() {
        let p: Point2D<i32> = Point::new(10, 20).into();
        assert_eq!(p, Point2D::new(10, 20));
        assert_eq!(Point::from(p).into_tuple(), (10, 20));
    }

    #[test]
    fn layout_matches_point() {
        assert_eq!(core::mem::size_of::<Point>(), 8);
        assert_eq!(core::mem::align_of::<Point>(), 4);
    }
}
