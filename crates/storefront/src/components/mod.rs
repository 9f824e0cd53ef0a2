//! Server-rendered UI components.

pub mod shoe_card;
pub mod spacer;

pub use shoe_card::{PriceTreatment, ShoeCard, VariantStyle, render_card};
pub use spacer::Spacer;
