//! Catalog of reference categories and the task kinds valid for each.

use super::{ParseReferenceTypeError, ParseTaskKindError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of business object a task is performed on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    /// A customer order.
    Order,
    /// A business entity such as a customer account.
    Entity,
}

impl ReferenceType {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Entity => "entity",
        }
    }
}

impl TryFrom<&str> for ReferenceType {
    type Error = ParseReferenceTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "order" => Ok(Self::Order),
            "entity" => Ok(Self::Entity),
            _ => Err(ParseReferenceTypeError(value.to_owned())),
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of work a task represents, scoped to specific reference categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Produce an invoice for an order.
    CreateInvoice,
    /// Arrange pickup of an order.
    ArrangePickup,
    /// Collect payment for an order.
    CollectPayment,
    /// Assign a customer entity to a sales person.
    AssignCustomerToSalesPerson,
}

impl TaskKind {
    /// Returns the fixed set of task kinds meaningful for a reference
    /// category. The assignment reconciler iterates this catalog when an
    /// assignee is applied to a reference.
    #[must_use]
    pub const fn for_reference(reference_type: ReferenceType) -> &'static [Self] {
        match reference_type {
            ReferenceType::Order => &[Self::CreateInvoice, Self::ArrangePickup, Self::CollectPayment],
            ReferenceType::Entity => &[Self::AssignCustomerToSalesPerson],
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateInvoice => "create_invoice",
            Self::ArrangePickup => "arrange_pickup",
            Self::CollectPayment => "collect_payment",
            Self::AssignCustomerToSalesPerson => "assign_customer_to_sales_person",
        }
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "create_invoice" => Ok(Self::CreateInvoice),
            "arrange_pickup" => Ok(Self::ArrangePickup),
            "collect_payment" => Ok(Self::CollectPayment),
            "assign_customer_to_sales_person" => Ok(Self::AssignCustomerToSalesPerson),
            _ => Err(ParseTaskKindError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
