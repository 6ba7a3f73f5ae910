use super::errors::BasketError;

/// A single line in a shopping cart. Lines are kept in insertion order and
/// never deduplicated; merging is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub quantity: i32,
    pub product_id: String,
    pub product_name: String,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingCart {
    pub user_name: String,
    pub items: Vec<CartItem>,
}

impl ShoppingCart {
    pub fn new(user_name: String, items: Vec<CartItem>) -> Result<Self, BasketError> {
        if user_name.trim().is_empty() {
            return Err(BasketError::UserNameEmpty);
        }

        Ok(Self { user_name, items })
    }

    /// Empty cart substituted by the transport layer when no entry exists
    /// for the user. Never persisted by itself.
    pub fn empty(user_name: String) -> Self {
        Self {
            user_name,
            items: Vec::new(),
        }
    }

    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.unit_price * f64::from(item.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: i32, unit_price: f64) -> CartItem {
        CartItem {
            quantity,
            product_id: "602d2149e773f2a3990b47f5".to_string(),
            product_name: name.to_string(),
            unit_price,
        }
    }

    #[test]
    fn should_create_cart_when_user_name_valid() {
        let result = ShoppingCart::new("swn".to_string(), vec![item("IPhone X", 2, 500.0)]);

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert_eq!(cart.user_name, "swn");
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn should_reject_when_user_name_empty() {
        let result = ShoppingCart::new("".to_string(), vec![]);

        assert!(matches!(result.unwrap_err(), BasketError::UserNameEmpty));
    }

    #[test]
    fn should_reject_when_user_name_only_whitespace() {
        let result = ShoppingCart::new("   ".to_string(), vec![]);

        assert!(matches!(result.unwrap_err(), BasketError::UserNameEmpty));
    }

    #[test]
    fn should_sum_total_price_over_items() {
        let cart = ShoppingCart::new(
            "swn".to_string(),
            vec![item("IPhone X", 2, 500.0), item("Samsung 10", 1, 400.0)],
        )
        .unwrap();

        assert_eq!(cart.total_price(), 1400.0);
    }

    #[test]
    fn should_substitute_empty_cart_with_no_items() {
        let cart = ShoppingCart::empty("new-user".to_string());

        assert_eq!(cart.user_name, "new-user");
        assert!(cart.items.is_empty());
    }
}
