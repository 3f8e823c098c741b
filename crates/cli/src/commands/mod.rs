// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod access;
pub mod call;
pub mod filter;
pub mod present;
pub mod session;
pub mod status;
