//! Vetrina Access Kernel Library
//!
//! Permission-gated navigation for the Vetrina store-management platform:
//! a static menu registry, a pure ANY/ALL access evaluator, an
//! order-preserving navigation filter, and point-query facades for guarding
//! single routes or UI fragments.
//!
//! Every ambiguous decision denies: unknown menu keys, unmapped paths, and
//! unrecognized access modes all resolve to "not accessible".

pub mod defaults;
pub mod error;
pub mod menu;
pub mod permissions;
