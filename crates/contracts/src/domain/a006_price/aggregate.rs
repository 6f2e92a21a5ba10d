use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AdminRecord, EditForm, NamedRef};
use crate::shared::api_path::Resource;
use crate::shared::search::Searchable;
use crate::shared::usage::{HasUsage, UsageCounts};
use crate::shared::validation::{require_positive, require_selected, Validate, ValidationError};

/// Current price of one product at one supermarket, with an optional promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: i64,
    pub product_id: i64,
    pub supermarket_id: i64,
    pub price: f64,
    #[serde(default)]
    pub promo_price: Option<f64>,
    #[serde(default)]
    pub promo_ends_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub product: Option<NamedRef>,
    #[serde(default)]
    pub supermarket: Option<NamedRef>,
    #[serde(rename = "_count", default)]
    pub counts: UsageCounts,
}

/// A promotion applies while it undercuts the regular price and has not ended.
fn promo_applies(
    price: f64,
    promo_price: Option<f64>,
    promo_ends_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    match promo_price {
        Some(promo) if promo > 0.0 && promo < price => promo_ends_at.map_or(true, |ends| ends > now),
        _ => false,
    }
}

impl Price {
    pub fn promo_active(&self, now: DateTime<Utc>) -> bool {
        promo_applies(self.price, self.promo_price, self.promo_ends_at, now)
    }

    pub fn effective_price(&self, now: DateTime<Utc>) -> f64 {
        if self.promo_active(now) {
            self.promo_price.unwrap_or(self.price)
        } else {
            self.price
        }
    }
}

impl HasUsage for Price {
    fn usage(&self) -> &UsageCounts {
        &self.counts
    }
}

impl Searchable for Price {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        if let Some(p) = &self.product {
            fields.push(p.name.as_str());
        }
        if let Some(s) = &self.supermarket {
            fields.push(s.name.as_str());
        }
        fields
    }
}

impl AdminRecord for Price {
    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        let product = self.product.as_ref().map(|p| p.name.as_str()).unwrap_or("?");
        let market = self.supermarket.as_ref().map(|s| s.name.as_str()).unwrap_or("?");
        format!("{} @ {}", product, market)
    }

    fn resource() -> Option<Resource> {
        Some(Resource::Prices)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    #[serde(skip)]
    pub id: Option<i64>,
    pub product_id: Option<i64>,
    pub supermarket_id: Option<i64>,
    pub price: f64,
    pub promo_price: Option<f64>,
    pub promo_ends_at: Option<DateTime<Utc>>,
}

impl PriceDto {
    /// New price with the product already chosen, as created from the product page.
    pub fn for_product(product_id: i64) -> Self {
        Self {
            product_id: Some(product_id),
            ..Self::default()
        }
    }

    /// Price a shopper would pay with the values currently in the form.
    pub fn effective_price(&self, now: DateTime<Utc>) -> f64 {
        if promo_applies(self.price, self.promo_price, self.promo_ends_at, now) {
            self.promo_price.unwrap_or(self.price)
        } else {
            self.price
        }
    }
}

impl From<&Price> for PriceDto {
    fn from(p: &Price) -> Self {
        Self {
            id: Some(p.id),
            product_id: Some(p.product_id),
            supermarket_id: Some(p.supermarket_id),
            price: p.price,
            promo_price: p.promo_price,
            promo_ends_at: p.promo_ends_at,
        }
    }
}

impl Validate for PriceDto {
    fn validate(&self) -> Result<(), ValidationError> {
        require_selected(self.product_id, "productId", "Producto")?;
        require_selected(self.supermarket_id, "supermarketId", "Supermercado")?;
        require_positive(self.price, "price", "Precio")?;
        if let Some(promo) = self.promo_price {
            require_positive(promo, "promoPrice", "Precio promocional")?;
            if promo >= self.price {
                return Err(ValidationError::new(
                    "promoPrice",
                    "Precio promocional",
                    "debe ser menor que el precio",
                ));
            }
        }
        Ok(())
    }
}

impl EditForm for PriceDto {
    fn record_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn price(promo: Option<f64>, ends: Option<DateTime<Utc>>) -> Price {
        Price {
            id: 1,
            product_id: 7,
            supermarket_id: 2,
            price: 2.0,
            promo_price: promo,
            promo_ends_at: ends,
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            product: None,
            supermarket: None,
            counts: UsageCounts::default(),
        }
    }

    #[test]
    fn promotion_rules() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();

        assert!(!price(None, None).promo_active(now));
        assert!(price(Some(1.5), None).promo_active(now));
        assert!(price(Some(1.5), Some(later)).promo_active(now));
        assert!(!price(Some(1.5), Some(earlier)).promo_active(now));
        assert!(!price(Some(2.5), None).promo_active(now));

        assert_eq!(price(Some(1.5), None).effective_price(now), 1.5);
        assert_eq!(price(Some(1.5), Some(earlier)).effective_price(now), 2.0);
    }

    #[test]
    fn parses_rfc3339_dates() {
        let p: Price = serde_json::from_str(
            r#"{"id":1,"productId":7,"supermarketId":2,"price":1.2,
                "promoPrice":null,"updatedAt":"2024-03-10T08:30:00Z",
                "product":{"id":7,"name":"Agua"},"supermarket":{"id":2,"name":"Dia"}}"#,
        )
        .unwrap();
        assert_eq!(p.updated_at, Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap());
        assert_eq!(p.display_name(), "Agua @ Dia");
        assert!(p.can_delete());
    }

    #[test]
    fn promo_must_undercut_price() {
        let mut dto = PriceDto::for_product(7);
        dto.supermarket_id = Some(2);
        dto.price = 2.0;
        assert!(dto.is_valid());
        dto.promo_price = Some(2.0);
        assert_eq!(dto.validate().unwrap_err().field, "promoPrice");
        dto.promo_price = Some(0.0);
        assert_eq!(dto.validate().unwrap_err().field, "promoPrice");
        dto.promo_price = Some(1.8);
        assert!(dto.is_valid());
    }

    #[test]
    fn form_preview_uses_promotion() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut dto = PriceDto::for_product(7);
        dto.price = 3.0;
        assert_eq!(dto.effective_price(now), 3.0);
        dto.promo_price = Some(2.5);
        assert_eq!(dto.effective_price(now), 2.5);
        dto.promo_ends_at = Some(Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap());
        assert_eq!(dto.effective_price(now), 3.0);
    }
}
