//! Customer, item and purchase tables for the analysis exercises.

use crate::generator::GeneratorError;
use crate::generators::uuid::generate_hex_id;
use crate::generators::{clamp_unit, int_in, normal, pick};
use messy_core::RetailConfig;
use rand::Rng;
use std::collections::HashMap;

pub const CUSTOMER_COLUMNS: [&str; 7] = [
    "customer_id",
    "location",
    "days_since_joined",
    "joined_on_sale",
    "email_subscription",
    "membership_level",
    "satisfaction_score",
];

pub const ITEM_COLUMNS: [&str; 3] = ["item_id", "sku", "colour"];

pub const PURCHASE_COLUMNS: [&str; 3] = ["customer_id", "day", "item"];

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub location: String,
    pub days_since_joined: i64,
    pub joined_on_sale: bool,
    pub email_subscription: bool,
    pub membership_level: i64,
    pub satisfaction_score: i64,
}

impl Customer {
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.location.clone(),
            self.days_since_joined.to_string(),
            u8::from(self.joined_on_sale).to_string(),
            u8::from(self.email_subscription).to_string(),
            self.membership_level.to_string(),
            self.satisfaction_score.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Article name followed by a per-article counter, e.g. `shirt3`
    pub item_id: String,
    pub sku: u64,
    pub colour: String,
}

impl Item {
    pub fn to_record(&self) -> Vec<String> {
        vec![self.item_id.clone(), self.sku.to_string(), self.colour.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub customer_id: String,
    pub day: i64,
    pub item: String,
}

impl Purchase {
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.customer_id.clone(),
            self.day.to_string(),
            self.item.clone(),
        ]
    }
}

/// All three retail tables.
#[derive(Debug, Clone, Default)]
pub struct RetailTables {
    pub customers: Vec<Customer>,
    pub items: Vec<Item>,
    pub purchases: Vec<Purchase>,
}

pub fn generate_customers<R: Rng>(
    rng: &mut R,
    config: &RetailConfig,
) -> Result<Vec<Customer>, GeneratorError> {
    if config.locations.is_empty() {
        return Err(GeneratorError::EmptyVocabulary("retail.locations"));
    }

    let mut customers = Vec::with_capacity(config.customers as usize);
    for _ in 0..config.customers {
        let id = generate_hex_id(rng);
        let location = config.locations[rng.gen_range(0..config.locations.len())]
            .name
            .clone();
        customers.push(Customer {
            id,
            location,
            days_since_joined: int_in(rng, config.days_since_joined),
            joined_on_sale: rng.gen_bool(0.5),
            email_subscription: rng.gen_bool(0.5),
            membership_level: int_in(rng, config.membership_level),
            satisfaction_score: int_in(rng, config.satisfaction_score),
        });
    }
    Ok(customers)
}

pub fn generate_items<R: Rng>(
    rng: &mut R,
    config: &RetailConfig,
) -> Result<Vec<Item>, GeneratorError> {
    let mut counters: HashMap<&str, u64> = HashMap::new();
    let mut items = Vec::with_capacity(config.items as usize);

    for sku in 0..config.items {
        let article = pick(rng, &config.articles, "retail.articles")?;
        let counter = counters.entry(article).or_insert(0);
        let item_id = format!("{article}{counter}");
        *counter += 1;

        let colour = pick(rng, &config.colours, "retail.colours")?.to_string();
        items.push(Item {
            item_id,
            sku,
            colour,
        });
    }
    Ok(items)
}

/// Purchase frequency factor in [0, 1] for one customer.
pub fn purchase_factor<R: Rng>(
    rng: &mut R,
    customer: &Customer,
    config: &RetailConfig,
) -> Result<f64, GeneratorError> {
    let w = &config.weights;
    let location_effect = config
        .locations
        .iter()
        .find(|l| l.name == customer.location)
        .map_or(0.0, |l| l.effect);

    let factor = w.days_since_joined * customer.days_since_joined as f64
        + w.satisfaction * customer.satisfaction_score as f64
        + w.membership * customer.membership_level as f64
        + w.email_subscription * f64::from(u8::from(customer.email_subscription))
        + w.location * location_effect
        + normal(rng, 0.0, w.noise_std_dev)?;

    Ok(clamp_unit(factor))
}

pub fn generate_purchases<R: Rng>(
    rng: &mut R,
    customers: &[Customer],
    items: &[Item],
    config: &RetailConfig,
) -> Result<Vec<Purchase>, GeneratorError> {
    if items.is_empty() && !customers.is_empty() {
        return Err(GeneratorError::EmptyVocabulary("retail.items"));
    }

    let last_day = config.days_since_joined.max;
    let mut purchases = Vec::new();

    for customer in customers {
        let factor = purchase_factor(rng, customer, config)?;
        let count = ((factor * f64::from(config.max_purchases)).round() as u64).max(1);

        // Purchases happen between the join day and the end of the window.
        let first_day = (last_day + 1 - customer.days_since_joined).min(last_day);
        for _ in 0..count {
            let day = rng.gen_range(first_day..=last_day);
            let item = &items[rng.gen_range(0..items.len())];
            purchases.push(Purchase {
                customer_id: customer.id.clone(),
                day,
                item: item.item_id.clone(),
            });
        }
    }
    Ok(purchases)
}

/// Generate customers, items and purchases in that order.
pub fn generate_retail<R: Rng>(
    rng: &mut R,
    config: &RetailConfig,
) -> Result<RetailTables, GeneratorError> {
    let customers = generate_customers(rng, config)?;
    let items = generate_items(rng, config)?;
    let purchases = generate_purchases(rng, &customers, &items, config)?;
    Ok(RetailTables {
        customers,
        items,
        purchases,
    })
}
