//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets take their data as props and report edits through callbacks;
//! only the nav bar and the decisions ring read context directly.

pub mod activity_chart;
pub mod ad_card;
pub mod categories_chart;
pub mod decisions_chart;
pub mod filter_bar;
pub mod image_gallery;
pub mod moderation_dialog;
pub mod nav_bar;
pub mod pagination;
pub mod stat_card;
