use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Course, CourseSelection};

/// A single dish on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub course: Course,
    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    /// Create a new dish with a generated ID and creation timestamp
    pub fn new(name: String, description: String, price: Decimal, course: Course) -> Self {
        Self {
            id: format!("D{}", Uuid::new_v4().simple()),
            name,
            description,
            price,
            course,
            created_at: Utc::now(),
        }
    }
}

/// The in-memory menu: an ordered collection of dishes.
///
/// Insertion order is preserved; new dishes append to the end and all
/// projections read the sequence in that order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

/// One course grouping for the sectioned home display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub course: Course,
    pub title: String,
    pub dishes: Vec<MenuItem>,
    pub average_price: String,
}

impl Menu {
    /// Create a new empty menu
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All dishes in insertion order
    pub fn dishes(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of dishes on the menu
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the menu has no dishes
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if a dish with the given ID is on the menu
    pub fn contains_dish(&self, dish_id: &str) -> bool {
        self.items.iter().any(|dish| dish.id == dish_id)
    }

    /// Append a dish to the end of the menu
    pub fn add_dish(&mut self, dish: MenuItem) {
        self.items.push(dish);
    }

    /// Remove the dish with the given ID.
    ///
    /// Returns whether a dish was removed; an absent ID is a no-op, so the
    /// operation is idempotent.
    pub fn remove_dish(&mut self, dish_id: &str) -> bool {
        let original_len = self.items.len();
        self.items.retain(|dish| dish.id != dish_id);
        self.items.len() != original_len
    }

    /// Dishes matching the selected course, in insertion order.
    ///
    /// An unselected course yields no dishes, not the full menu.
    pub fn dishes_by_course(&self, selection: CourseSelection) -> Vec<MenuItem> {
        match selection.course() {
            Some(course) => self
                .items
                .iter()
                .filter(|dish| dish.course == course)
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// The menu grouped into the three courses in fixed display order.
    ///
    /// A course with no dishes still appears, with an empty group and an
    /// average of "0.00".
    pub fn course_sections(&self) -> Vec<MenuSection> {
        Course::ALL
            .iter()
            .map(|&course| MenuSection {
                course,
                title: course.label().to_string(),
                dishes: self.dishes_by_course(CourseSelection::Selected(course)),
                average_price: self.average_price(course),
            })
            .collect()
    }

    /// Mean price over dishes in the given course, half-up rounded and
    /// rendered with exactly two fraction digits. "0.00" when the course
    /// has no dishes.
    pub fn average_price(&self, course: Course) -> String {
        let prices: Vec<Decimal> = self
            .items
            .iter()
            .filter(|dish| dish.course == course)
            .map(|dish| dish.price)
            .collect();

        if prices.is_empty() {
            return "0.00".to_string();
        }

        let total: Decimal = prices.iter().copied().sum();
        let mean = total / Decimal::from(prices.len() as u64);

        format!(
            "{:.2}",
            mean.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        )
    }
}

/// Request model for adding a dish to the menu.
///
/// The price arrives as entered text and the course as an optional picker
/// value; both are validated by the service before a dish is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDishRequest {
    pub name: String,
    pub description: String,
    pub price: String,
    pub course: Option<Course>,
}

/// Response model for menu listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuListResponse {
    pub dishes: Vec<MenuItem>,
    pub total_count: usize,
}

/// Response model for the grouped home display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSectionsResponse {
    pub sections: Vec<MenuSection>,
    pub total_count: usize,
}

/// Response model for the course filter view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterMenuResponse {
    pub course: Option<Course>,
    pub dishes: Vec<MenuItem>,
    pub total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response model for a single course average
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AveragePriceResponse {
    pub course: Course,
    pub average_price: String,
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn cents_to_decimal(cents: u64) -> Decimal {
        Decimal::new(cents as i64, 2)
    }

    fn course_strategy() -> impl Strategy<Value = Course> {
        prop::sample::select(Course::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn dish_ids_are_pairwise_distinct(count in 1usize..50) {
            let mut menu = Menu::new();
            for i in 0..count {
                menu.add_dish(MenuItem::new(
                    format!("Dish {}", i),
                    "test".to_string(),
                    cents_to_decimal(100),
                    Course::Mains,
                ));
            }

            let mut ids: Vec<&str> = menu.dishes().iter().map(|d| d.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), count);
        }

        #[test]
        fn filters_partition_the_menu(courses in prop::collection::vec(course_strategy(), 0..30)) {
            let mut menu = Menu::new();
            for (i, course) in courses.iter().enumerate() {
                menu.add_dish(MenuItem::new(
                    format!("Dish {}", i),
                    "test".to_string(),
                    cents_to_decimal(500),
                    *course,
                ));
            }

            // Every dish lands in exactly one course projection, and each
            // projection preserves insertion order.
            let mut seen = 0usize;
            for course in Course::ALL {
                let filtered = menu.dishes_by_course(CourseSelection::Selected(course));
                seen += filtered.len();

                let expected: Vec<&MenuItem> = menu
                    .dishes()
                    .iter()
                    .filter(|d| d.course == course)
                    .collect();
                prop_assert_eq!(filtered.iter().collect::<Vec<_>>(), expected);
            }
            prop_assert_eq!(seen, menu.len());
        }

        #[test]
        fn average_price_matches_half_up_mean(
            prices in prop::collection::vec(0u64..1_000_000, 1..20)
        ) {
            let mut menu = Menu::new();
            for (i, cents) in prices.iter().enumerate() {
                menu.add_dish(MenuItem::new(
                    format!("Dish {}", i),
                    "test".to_string(),
                    cents_to_decimal(*cents),
                    Course::Desserts,
                ));
            }

            // Half-up mean computed independently in integer cents.
            let sum: u64 = prices.iter().sum();
            let n = prices.len() as u64;
            let mean_cents = (2 * sum + n) / (2 * n);
            let expected = format!("{}.{:02}", mean_cents / 100, mean_cents % 100);

            prop_assert_eq!(menu.average_price(Course::Desserts), expected);
        }
    }
}
