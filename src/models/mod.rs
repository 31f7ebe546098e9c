//! Data models for the Eshtrak API.
//!
//! This module contains the data structures exchanged with the remote
//! service:
//!
//! - `UserSnapshot`, `Profile`: account identity and editable profile
//! - `Plan`: subscription plans offered for purchase
//! - `Subscription`, `SubscriptionStatus`: the user's current subscription
//! - `CheckoutSession`, `CheckoutMode`: hosted-checkout hand-off

pub mod checkout;
pub mod plan;
pub mod subscription;
pub mod user;

pub use checkout::{CheckoutMode, CheckoutSession};
pub use plan::Plan;
pub use subscription::{Subscription, SubscriptionStatus};
pub use user::{Profile, ProfileUpdate, UserSnapshot};
