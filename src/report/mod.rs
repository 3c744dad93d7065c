// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! What happens to a verdict after scoring: redaction for storage and the
//! notification decision.

mod anonymize;
mod notify;

pub use anonymize::{anonymize, sanitize_text, AnonymizedResult};
pub use notify::{should_notify, Notification};
