// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure pipeline rules with ZERO external dependencies.
//!
//! This module contains the value objects that encode the pipeline's
//! business rules. It has no dependencies on external crates (except `std`)
//! to ensure testability and architectural purity.
//!
//! # Modules
//!
//! - [`editing`]: Adjustment types ([`SliderPercent`](editing::SliderPercent),
//!   [`AdjustmentParams`](editing::AdjustmentParams))

pub mod editing;
