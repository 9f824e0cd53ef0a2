//! Shoe listing record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Price, Slug, Variant, classify};

/// Length of the "recently released" window in milliseconds (one average
/// month, 365.25 / 12 days).
pub const NEW_RELEASE_WINDOW_MS: i64 = 2_628_000_000;

/// A shoe as listed in the catalog.
///
/// Field names follow the catalog JSON (`imageSrc`, `salePrice`,
/// `releaseDate`, `numOfColors`). `releaseDate` accepts an RFC 3339 string or
/// integer milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shoe {
    pub slug: Slug,
    pub name: String,
    pub image_src: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Price>,
    #[serde(with = "release_date")]
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl Shoe {
    /// Card variant for this shoe at the given reference time.
    #[must_use]
    pub fn variant(&self, now: DateTime<Utc>) -> Variant {
        classify(self, now)
    }

    /// Price actually charged: the sale price when present, otherwise the
    /// regular price.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        self.sale_price.unwrap_or(self.price)
    }

    /// Whether the shoe has a sale price.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }
}

/// Whether a release date falls inside the trailing "new release" window.
///
/// Release dates in the future count as new.
#[must_use]
pub fn is_new_shoe(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(release_date).num_milliseconds() < NEW_RELEASE_WINDOW_MS
}

/// Serde support for `releaseDate` as either RFC 3339 or epoch milliseconds.
mod release_date {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(DateTime<Utc>),
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Millis(ms) => DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| D::Error::custom(format!("releaseDate out of range: {ms}"))),
            Raw::Text(date) => Ok(date),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeDelta, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_is_new_shoe_within_window() {
        assert!(is_new_shoe(now() - TimeDelta::days(10), now()));
        assert!(is_new_shoe(now(), now()));
    }

    #[test]
    fn test_is_new_shoe_outside_window() {
        assert!(!is_new_shoe(now() - TimeDelta::days(31), now()));
        assert!(!is_new_shoe(now() - TimeDelta::days(730), now()));
    }

    #[test]
    fn test_is_new_shoe_window_boundary() {
        let edge = now() - TimeDelta::milliseconds(NEW_RELEASE_WINDOW_MS);
        assert!(!is_new_shoe(edge, now()));
        assert!(is_new_shoe(edge + TimeDelta::milliseconds(1), now()));
    }

    #[test]
    fn test_is_new_shoe_future_release() {
        assert!(is_new_shoe(now() + TimeDelta::days(3), now()));
    }

    #[test]
    fn test_deserialize_catalog_record() {
        let json = r#"{
            "slug": "tail-twister",
            "name": "Tail Twister",
            "imageSrc": "/assets/tail-twister.jpg",
            "price": 16500,
            "salePrice": 12000,
            "releaseDate": "2024-05-20T00:00:00Z",
            "numOfColors": 3
        }"#;

        let shoe: Shoe = serde_json::from_str(json).unwrap();
        assert_eq!(shoe.slug.as_str(), "tail-twister");
        assert_eq!(shoe.image_src, "/assets/tail-twister.jpg");
        assert_eq!(shoe.sale_price, Some(Price::from_cents(12000)));
        assert_eq!(
            shoe.release_date,
            Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap()
        );
        assert_eq!(shoe.num_of_colors, 3);
    }

    #[test]
    fn test_deserialize_epoch_millis_and_null_sale() {
        let json = r#"{
            "slug": "hi-tops",
            "name": "Hi-Tops",
            "imageSrc": "/assets/hi-tops.jpg",
            "price": 9000,
            "salePrice": null,
            "releaseDate": 1717243200000,
            "numOfColors": 1
        }"#;

        let shoe: Shoe = serde_json::from_str(json).unwrap();
        assert_eq!(shoe.sale_price, None);
        assert_eq!(shoe.release_date, now());
    }

    #[test]
    fn test_deserialize_rejects_bad_slug() {
        let json = r#"{
            "slug": "Hi Tops",
            "name": "Hi-Tops",
            "imageSrc": "/assets/hi-tops.jpg",
            "price": 9000,
            "releaseDate": 1717243200000,
            "numOfColors": 1
        }"#;

        assert!(serde_json::from_str::<Shoe>(json).is_err());
    }

    #[test]
    fn test_variant_uses_reference_time() {
        let mut shoe: Shoe = serde_json::from_str(
            r#"{"slug":"a","name":"A","imageSrc":"","price":9000,"releaseDate":1717243200000,"numOfColors":2}"#,
        )
        .unwrap();
        assert_eq!(shoe.variant(now()), Variant::NewRelease);
        assert_eq!(shoe.variant(now() + TimeDelta::days(31)), Variant::Default);

        shoe.sale_price = Some(Price::from_cents(7000));
        assert_eq!(shoe.variant(now()), Variant::OnSale);
    }

    #[test]
    fn test_effective_price() {
        let mut shoe: Shoe = serde_json::from_str(
            r#"{"slug":"a","name":"A","imageSrc":"","price":9000,"releaseDate":0,"numOfColors":2}"#,
        )
        .unwrap();
        assert_eq!(shoe.effective_price(), Price::from_cents(9000));
        assert!(!shoe.is_on_sale());

        shoe.sale_price = Some(Price::from_cents(7000));
        assert_eq!(shoe.effective_price(), Price::from_cents(7000));
        assert!(shoe.is_on_sale());
    }
}
