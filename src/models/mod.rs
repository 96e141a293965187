// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Core data model: rectangles and session interaction state.

pub mod rect;
pub mod session;
