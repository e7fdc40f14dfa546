//! Customer orders with missing prices and repeat customers.

use crate::generator::GeneratorError;
use crate::generators::uuid::generate_hex_id;
use crate::generators::{biased_coin, int_in, pick};
use messy_core::OrdersConfig;
use rand::Rng;
use std::collections::HashSet;

/// Column names of the orders file.
pub const ORDER_COLUMNS: [&str; 5] = ["customer_id", "age", "continent", "price", "order_id"];

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub customer_id: String,
    pub age: i64,
    pub continent: String,
    /// `None` is a missing price
    pub price: Option<f64>,
    pub order_id: String,
}

impl Order {
    /// CSV cells in [`ORDER_COLUMNS`] order; a missing price is an empty cell.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.customer_id.clone(),
            self.age.to_string(),
            self.continent.clone(),
            self.price.map(|p| format!("{p:.2}")).unwrap_or_default(),
            self.order_id.clone(),
        ]
    }
}

fn draw_price<R: Rng>(rng: &mut R, config: &OrdersConfig) -> f64 {
    let price = rng.gen_range(config.price.min..=config.price.max);
    (price * 100.0).round() / 100.0
}

/// Draw one fresh order.
pub fn generate_order<R: Rng>(rng: &mut R, config: &OrdersConfig) -> Result<Order, GeneratorError> {
    let customer_id = generate_hex_id(rng);
    let order_id = generate_hex_id(rng);
    let age = int_in(rng, config.age);

    let mut price = Some(draw_price(rng, config));
    if biased_coin(rng, config.missing_probability) {
        price = None;
    }

    let continent = pick(rng, &config.continents, "orders.continents")?.to_string();
    if continent == config.biased_continent && biased_coin(rng, config.biased_missing_probability)
    {
        price = None;
    }

    Ok(Order {
        customer_id,
        age,
        continent,
        price,
        order_id,
    })
}

/// Run one duplication pass and return the number of appended orders.
///
/// Every distinct customer, in order of first appearance, may place one
/// more order. The new order copies the age and continent of the customer's
/// first order; its price and order id are fresh.
pub fn duplicate_orders<R: Rng>(
    rng: &mut R,
    orders: &mut Vec<Order>,
    config: &OrdersConfig,
) -> Result<usize, GeneratorError> {
    let mut repeats = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for first in orders.iter() {
        if !seen.insert(first.customer_id.as_str()) {
            continue;
        }
        if !biased_coin(rng, config.duplicate_probability) {
            continue;
        }

        // The continent draw only steers which missing-price rule applies.
        let continent = pick(rng, &config.continents, "orders.continents")?;
        let mut price = Some(draw_price(rng, config));
        if continent == config.biased_continent {
            if biased_coin(rng, config.biased_missing_probability) {
                price = None;
            }
        } else if biased_coin(rng, config.missing_probability) {
            price = None;
        }

        repeats.push(Order {
            customer_id: first.customer_id.clone(),
            age: first.age,
            continent: first.continent.clone(),
            price,
            order_id: generate_hex_id(rng),
        });
    }

    let appended = repeats.len();
    orders.extend(repeats);
    Ok(appended)
}

/// Draw `config.rows` orders and apply every duplication pass.
pub fn generate_orders<R: Rng>(
    rng: &mut R,
    config: &OrdersConfig,
) -> Result<Vec<Order>, GeneratorError> {
    let mut orders = (0..config.rows)
        .map(|_| generate_order(rng, config))
        .collect::<Result<Vec<_>, _>>()?;

    for _ in 0..config.duplicate_passes {
        duplicate_orders(rng, &mut orders, config)?;
    }

    Ok(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn small_config() -> OrdersConfig {
        OrdersConfig {
            rows: 500,
            ..OrdersConfig::default()
        }
    }

    #[test]
    fn test_order_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = small_config();

        for _ in 0..500 {
            let order = generate_order(&mut rng, &config).unwrap();
            assert!((18..=84).contains(&order.age));
            assert!(config.continents.contains(&order.continent));
            if let Some(price) = order.price {
                assert!((49.99..=499.99).contains(&price));
                assert_eq!((price * 100.0).round() / 100.0, price);
            }
            assert_ne!(order.customer_id, order.order_id);
        }
    }

    #[test]
    fn test_missing_price_is_empty_cell() {
        let order = Order {
            customer_id: "c".to_string(),
            age: 30,
            continent: "Asia".to_string(),
            price: None,
            order_id: "o".to_string(),
        };
        assert_eq!(order.to_record(), vec!["c", "30", "Asia", "", "o"]);

        let priced = Order {
            price: Some(50.5),
            ..order
        };
        assert_eq!(priced.to_record()[3], "50.50");
    }

    #[test]
    fn test_biased_continent_misses_more() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = OrdersConfig {
            rows: 20_000,
            duplicate_passes: 0,
            ..OrdersConfig::default()
        };
        let orders = generate_orders(&mut rng, &config).unwrap();

        let rate = |biased: bool| {
            let group: Vec<&Order> = orders
                .iter()
                .filter(|o| (o.continent == config.biased_continent) == biased)
                .collect();
            group.iter().filter(|o| o.price.is_none()).count() as f64 / group.len() as f64
        };
        assert!(rate(true) > rate(false) + 0.1);
    }

    #[test]
    fn test_duplicates_reuse_known_customers() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = small_config();

        let mut orders = (0..config.rows)
            .map(|_| generate_order(&mut rng, &config).unwrap())
            .collect::<Vec<_>>();
        let originals: HashMap<String, Order> = orders
            .iter()
            .map(|o| (o.customer_id.clone(), o.clone()))
            .collect();

        let appended = duplicate_orders(&mut rng, &mut orders, &config).unwrap();
        assert!(appended > 0);
        assert_eq!(orders.len(), config.rows as usize + appended);

        for repeat in &orders[config.rows as usize..] {
            let first = &originals[&repeat.customer_id];
            assert_eq!(repeat.age, first.age);
            assert_eq!(repeat.continent, first.continent);
            assert_ne!(repeat.order_id, first.order_id);
        }
    }

    #[test]
    fn test_passes_grow_dataset() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = small_config();
        let orders = generate_orders(&mut rng, &config).unwrap();

        assert!(orders.len() > config.rows as usize);
        let customers: HashSet<&str> = orders.iter().map(|o| o.customer_id.as_str()).collect();
        assert_eq!(customers.len(), config.rows as usize);
    }

    #[test]
    fn test_no_duplicates_when_disabled() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = OrdersConfig {
            rows: 100,
            duplicate_probability: 0.0,
            ..OrdersConfig::default()
        };
        assert_eq!(generate_orders(&mut rng, &config).unwrap().len(), 100);
    }
}
