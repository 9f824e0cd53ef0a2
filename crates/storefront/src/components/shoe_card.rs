//! Shoe card component.
//!
//! A card is a pure function of a [`Shoe`] and a reference time:
//!
//! 1. [`classify`] picks the [`Variant`].
//! 2. [`VariantStyle`] and [`PriceTreatment`] map the variant and sale state to
//!    labels and CSS modifiers.
//! 3. [`ShoeCard`] assembles the view and `components/shoe_card.html` renders
//!    it.
//!
//! Colors never appear in the markup; modifiers are resolved against the
//! theme in `/theme.css` and `static/css/main.css`.

use askama::Template;
use askama_web::WebTemplate;
use chrono::{DateTime, Utc};
use sole_core::{Shoe, Variant, classify, pluralize};

use super::spacer::Spacer;
use crate::theme::Accent;

/// Space between the image region and the text rows.
pub const CARD_SPACER_SIZE: u32 = 12;

/// Badge treatment for a non-default variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantStyle {
    /// Badge text.
    pub label: &'static str,
    /// CSS modifier class added next to `shoe-card__tag`.
    pub modifier: &'static str,
    /// Badge background.
    pub accent: Accent,
}

const ON_SALE_STYLE: VariantStyle = VariantStyle {
    label: "Sale",
    modifier: "shoe-card__tag--on-sale",
    accent: Accent::Primary,
};

const NEW_RELEASE_STYLE: VariantStyle = VariantStyle {
    label: "Just Released!",
    modifier: "shoe-card__tag--new-release",
    accent: Accent::Secondary,
};

impl VariantStyle {
    /// Badge style for a variant, `None` when the card shows no badge.
    #[must_use]
    pub const fn for_variant(variant: Variant) -> Option<Self> {
        match variant {
            Variant::OnSale => Some(ON_SALE_STYLE),
            Variant::NewRelease => Some(NEW_RELEASE_STYLE),
            Variant::Default => None,
        }
    }

    /// Every badge style, in variant priority order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[ON_SALE_STYLE, NEW_RELEASE_STYLE]
    }
}

/// How the regular price is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTreatment {
    /// Normal emphasis.
    Regular,
    /// Line-through in muted gray; a sale price is shown elsewhere.
    Struck,
}

impl PriceTreatment {
    #[must_use]
    pub const fn for_shoe(shoe: &Shoe) -> Self {
        if shoe.is_on_sale() {
            Self::Struck
        } else {
            Self::Regular
        }
    }

    /// Full class attribute for the price element.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Regular => "shoe-card__price",
            Self::Struck => "shoe-card__price shoe-card__price--struck",
        }
    }
}

/// Shoe card view, rendered by `components/shoe_card.html`.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "components/shoe_card.html")]
pub struct ShoeCard {
    pub href: String,
    pub image_src: String,
    pub name: String,
    pub price: String,
    pub price_treatment: PriceTreatment,
    pub badge: Option<VariantStyle>,
    pub spacer: Spacer,
    pub colors: String,
    pub sale_price: Option<String>,
}

impl ShoeCard {
    /// Assemble the card for a shoe as seen at `now`.
    #[must_use]
    pub fn new(shoe: &Shoe, now: DateTime<Utc>) -> Self {
        let variant = classify(shoe, now);

        // OnSale is exactly `sale_price.is_some()`, so the struck price and
        // the sale price row always appear together.
        let sale_price = match (variant, shoe.sale_price) {
            (Variant::OnSale, Some(sale_price)) => Some(sale_price.display()),
            _ => None,
        };

        Self {
            href: shoe.slug.href(),
            image_src: shoe.image_src.clone(),
            name: shoe.name.clone(),
            price: shoe.price.display(),
            price_treatment: PriceTreatment::for_shoe(shoe),
            badge: VariantStyle::for_variant(variant),
            spacer: Spacer::new(CARD_SPACER_SIZE),
            colors: pluralize("Color", shoe.num_of_colors),
            sale_price,
        }
    }
}

/// Render a shoe card to HTML.
///
/// # Errors
///
/// Returns the template error unchanged if rendering fails.
pub fn render_card(shoe: &Shoe, now: DateTime<Utc>) -> Result<String, askama::Error> {
    ShoeCard::new(shoe, now).render()
}
