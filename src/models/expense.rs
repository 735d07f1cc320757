use rust_decimal::Decimal;

use super::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub name: String,
    pub amount: Decimal,
    pub category: Category,
}

impl Expense {
    pub fn new(name: String, amount: Decimal, category: Category) -> Self {
        Self {
            name,
            amount,
            category,
        }
    }
}
