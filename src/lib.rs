// SPDX-License-Identifier: MPL-2.0
//! `iced_pan` pans oversized content inside a fixed viewport.
//!
//! The [`pan`] module holds the host-agnostic core: pointer drags, held
//! keyboard or button controls, a circular joystick control and centering on
//! an anchor. Hosts plug in through the [`pan::Surface`] trait. The [`ui`] and
//! [`app`] modules wire that core into an iced demo.

#![doc(html_root_url = "https://docs.rs/iced_pan/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod pan;
pub mod ui;

#[cfg(test)]
mod test_utils;
