//! Pharmacy screens: dashboard figures, inventory, and order handling.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::info;

use healthverse_contracts::error::{HealthverseError, HealthverseResult};

use super::{matches_query, next_id, not_found, require};
use crate::mock_data;
use crate::models::{InventoryItem, ItemCategory, Order, OrderStatus};

// ── Inventory ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Category,
    Stock,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortKey {
    fn default() -> Self {
        Self { field: SortField::Name, direction: SortDirection::Asc }
    }
}

impl SortKey {
    fn compare(&self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        let ord = match self.field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Category => a.category.label().cmp(b.category.label()),
            SortField::Stock => a.stock.cmp(&b.stock),
            SortField::Price => a.price_cents.cmp(&b.price_cents),
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub category: ItemCategory,
    pub stock: u32,
    pub price_cents: u64,
    pub reorder_level: u32,
}

#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<InventoryItem>,
    sort: SortKey,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            items: mock_data::pharmacy_inventory(),
            sort: SortKey::default(),
        }
    }
}

impl Inventory {
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    /// Choosing the active field again flips direction; a new field starts ascending.
    pub fn set_sort(&mut self, field: SortField) {
        self.sort = if self.sort.field == field {
            SortKey {
                field,
                direction: match self.sort.direction {
                    SortDirection::Asc => SortDirection::Desc,
                    SortDirection::Desc => SortDirection::Asc,
                },
            }
        } else {
            SortKey { field, direction: SortDirection::Asc }
        };
    }

    /// Items whose name matches `query`, in the current sort order.
    pub fn search(&self, query: &str) -> Vec<&InventoryItem> {
        let mut hits: Vec<&InventoryItem> = self
            .items
            .iter()
            .filter(|i| matches_query(&i.name, query))
            .collect();
        hits.sort_by(|a, b| self.sort.compare(a, b));
        hits
    }

    pub fn by_category(&self, category: ItemCategory) -> Vec<&InventoryItem> {
        self.items.iter().filter(|i| i.category == category).collect()
    }

    pub fn low_stock(&self) -> Vec<&InventoryItem> {
        self.items.iter().filter(|i| i.is_low_stock()).collect()
    }

    pub fn add_item(&mut self, item: NewItem) -> HealthverseResult<&InventoryItem> {
        require("item name", &item.name)?;
        if item.price_cents == 0 {
            return Err(HealthverseError::Validation {
                reason: "price must be greater than zero".to_string(),
            });
        }

        let id = next_id("i", self.items.iter().map(|i| i.id.as_str()));
        info!(item = %id, name = %item.name.trim(), "inventory item added");
        self.items.push(InventoryItem {
            id,
            name: item.name.trim().to_string(),
            category: item.category,
            stock: item.stock,
            price_cents: item.price_cents,
            reorder_level: item.reorder_level,
        });
        Ok(&self.items[self.items.len() - 1])
    }

    /// Adjust stock by `delta`, never going below zero. Returns the new level.
    pub fn update_stock(&mut self, id: &str, delta: i64) -> HealthverseResult<u32> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| not_found("item", id))?;
        let level = (i64::from(item.stock) + delta).clamp(0, i64::from(u32::MAX));
        item.stock = u32::try_from(level).unwrap_or(u32::MAX);
        Ok(item.stock)
    }
}

// ── Orders ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self { orders: mock_data::pharmacy_orders() }
    }
}

impl OrderBook {
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Orders not yet picked up; the same set the dashboard counts.
    pub fn pending(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .collect()
    }

    pub fn completed(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .collect()
    }

    pub fn update_status(&mut self, id: &str, status: OrderStatus) -> HealthverseResult<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| not_found("order", id))?;
        info!(order = %id, from = ?order.status, to = ?status, "order status updated");
        order.status = status;
        Ok(())
    }
}

// ── Dashboard ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_revenue_cents: u64,
    pub pending_orders: usize,
    pub low_stock_items: usize,
    pub total_products: usize,
}

impl DashboardStats {
    pub fn compute(items: &[InventoryItem], orders: &[Order]) -> Self {
        Self {
            total_revenue_cents: orders.iter().map(|o| o.total_cents).sum(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            low_stock_items: items.iter().filter(|i| i.is_low_stock()).count(),
            total_products: items.len(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use healthverse_contracts::error::HealthverseError;

    use super::*;

    fn names(items: Vec<&InventoryItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn inventory_sorting_toggles_direction() {
        let mut page = Inventory::default();
        assert_eq!(
            names(page.search("")),
            ["Amoxicillin", "Ibuprofen", "Lisinopril", "Metformin", "Vitamin D"]
        );

        page.set_sort(SortField::Name);
        assert_eq!(page.sort_key().direction, SortDirection::Desc);
        assert_eq!(names(page.search(""))[0], "Vitamin D");

        page.set_sort(SortField::Price);
        assert_eq!(page.sort_key(), SortKey { field: SortField::Price, direction: SortDirection::Asc });
        assert_eq!(names(page.search("")), ["Ibuprofen", "Vitamin D", "Lisinopril", "Metformin", "Amoxicillin"]);

        page.set_sort(SortField::Stock);
        page.set_sort(SortField::Stock);
        assert_eq!(names(page.search(""))[0], "Metformin");

        page.set_sort(SortField::Category);
        assert_eq!(page.sort_key(), SortKey { field: SortField::Category, direction: SortDirection::Asc });
        assert_eq!(
            names(page.search("")),
            ["Vitamin D", "Ibuprofen", "Lisinopril", "Metformin", "Amoxicillin"]
        );
        page.set_sort(SortField::Category);
        assert_eq!(
            names(page.search("")),
            ["Lisinopril", "Metformin", "Amoxicillin", "Vitamin D", "Ibuprofen"]
        );
    }

    #[test]
    fn inventory_search_and_category() {
        let page = Inventory::default();
        assert_eq!(
            names(page.search("IN")),
            ["Amoxicillin", "Lisinopril", "Metformin", "Vitamin D"]
        );
        assert_eq!(page.by_category(ItemCategory::OverTheCounter).len(), 2);
        assert!(page.low_stock().is_empty());
    }

    #[test]
    fn stock_updates_saturate_at_zero() {
        let mut page = Inventory::default();
        assert_eq!(page.update_stock("i5", -60).unwrap(), 15);
        assert_eq!(page.low_stock().len(), 1);
        assert_eq!(page.update_stock("i5", -100).unwrap(), 0);
        assert_eq!(page.update_stock("i5", 40).unwrap(), 40);
        assert!(matches!(page.update_stock("i9", 1), Err(HealthverseError::NotFound { .. })));
    }

    #[test]
    fn add_item_validates_and_numbers() {
        let mut page = Inventory::default();
        let new = |name: &str, price_cents| NewItem {
            name: name.to_string(),
            category: ItemCategory::OverTheCounter,
            stock: 10,
            price_cents,
            reorder_level: 20,
        };

        assert!(page.add_item(new("  ", 499)).is_err());
        assert!(page.add_item(new("Aspirin", 0)).is_err());

        let added = page.add_item(new(" Aspirin ", 499)).unwrap();
        assert_eq!(added.id, "i6");
        assert_eq!(added.name, "Aspirin");
        assert!(added.is_low_stock());
    }

    #[test]
    fn order_status_flow() {
        let mut book = OrderBook::default();
        assert_eq!(book.pending().len(), 1);

        book.update_status("o1", OrderStatus::Processing).unwrap();
        assert!(book.pending().is_empty());
        assert_eq!(book.completed().len(), 1);
        let stats = DashboardStats::compute(&mock_data::pharmacy_inventory(), book.orders());
        assert_eq!(stats.pending_orders, book.pending().len());

        book.update_status("o1", OrderStatus::Completed).unwrap();
        assert_eq!(book.completed().len(), 2);
        assert!(book.update_status("o7", OrderStatus::Pending).is_err());
    }

    #[test]
    fn dashboard_stats_from_fixtures() {
        let stats = DashboardStats::compute(
            &mock_data::pharmacy_inventory(),
            &mock_data::pharmacy_orders(),
        );
        assert_eq!(
            stats,
            DashboardStats {
                total_revenue_cents: 3797,
                pending_orders: 1,
                low_stock_items: 0,
                total_products: 5,
            }
        );
    }
}
