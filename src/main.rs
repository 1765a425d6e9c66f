// Copyright 2025 the Specimen Authors
// SPDX-License-Identifier: Apache-2.0

//! Specimen: font family and variant picker with a persistent preview

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    specimen::run(EventLoop::with_user_event())
}
