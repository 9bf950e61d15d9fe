// SPDX-License-Identifier: MPL-2.0
//! iced rendering of the pan demo.
//!
//! - [`scene`] - Content, anchors and control widgets; implements the pan surface
//! - [`scene_view`] - Canvas program drawing a scene
//! - [`design_tokens`] - Colors, spacing and sizing constants

pub mod design_tokens;
pub mod scene;
pub mod scene_view;
