//! Point-of-sale settings payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::ids::validate_object_id;
use crate::schema::{BodySchema, FieldKind, FieldSpec};

/// Body of `PATCH /api/pos/settings`. Every field is optional; only the
/// fields present in the request are applied.
///
/// `paymentMethods`, `fiscalization` and `receiptTemplate` must be JSON
/// objects but their contents are not checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePosSettingsDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(
        function = "validate_object_id",
        message = "facility must be a mongodb id"
    ))]
    pub facility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tax_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_negative_price: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_number_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscalization: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_template: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(
        function = "validate_object_id",
        message = "tenant must be a mongodb id"
    ))]
    pub tenant: Option<String>,
}

impl BodySchema for UpdatePosSettingsDto {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("facility", FieldKind::String),
        FieldSpec::optional("paymentMethods", FieldKind::Object),
        FieldSpec::optional("defaultTaxRate", FieldKind::Number),
        FieldSpec::optional("maxDiscountPercent", FieldKind::Number),
        FieldSpec::optional("allowNegativePrice", FieldKind::Boolean),
        FieldSpec::optional("receiptNumberFormat", FieldKind::String),
        FieldSpec::optional("fiscalization", FieldKind::Object),
        FieldSpec::optional("receiptTemplate", FieldKind::Object),
        FieldSpec::optional("tenant", FieldKind::String),
    ];
}

impl UpdatePosSettingsDto {
    /// True when the request carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
