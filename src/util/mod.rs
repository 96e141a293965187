// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shared utilities: geometry and overlay rendering.

pub mod geometry;
pub mod overlay;
