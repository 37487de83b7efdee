use crate::model::{Invoice, PaymentMethod, PaymentStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    #[validate(range(min = 1, message = "Order ID is required"))]
    #[schema(example = 1)]
    pub order_id: i32,

    pub payment_method: PaymentMethod,

    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceRequest {
    pub payment_method: Option<PaymentMethod>,

    pub payment_status: Option<PaymentStatus>,
}

impl UpdateInvoiceRequest {
    pub fn apply_to(&self, invoice: &mut Invoice) {
        if let Some(method) = self.payment_method {
            invoice.payment_method = method;
        }
        if let Some(status) = self.payment_status {
            invoice.payment_status = status;
        }
    }
}
