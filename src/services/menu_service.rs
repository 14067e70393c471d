use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::models::{
    AveragePriceResponse, Course, CourseSelection, CreateDishRequest, FilterMenuResponse,
    MenuItem, MenuListResponse, MenuSectionsResponse, ServiceError, ServiceResult,
};
use crate::repositories::MenuRepository;

/// Service for managing the menu
pub struct MenuService {
    repository: Arc<dyn MenuRepository>,
}

impl MenuService {
    /// Create a new MenuService
    pub fn new(repository: Arc<dyn MenuRepository>) -> Self {
        Self { repository }
    }

    /// Add a dish to the menu.
    ///
    /// This is the authoritative required-fields check: callers may pre-check
    /// input, but an invalid request is refused here and the menu is left
    /// untouched.
    #[instrument(skip(self, request), fields(dish_name = %request.name))]
    pub async fn add_dish(&self, request: CreateDishRequest) -> ServiceResult<MenuItem> {
        info!("Adding dish to menu");

        let (price, course) = self.validate_create_dish_request(&request)?;

        let dish = MenuItem::new(request.name, request.description, price, course);
        let dish = self.repository.add_dish(dish).await?;

        info!(dish_id = %dish.id, "Dish added to menu");
        Ok(dish)
    }

    /// Remove a dish from the menu.
    ///
    /// Removal is idempotent: an ID that is not on the menu is a no-op,
    /// never an error.
    #[instrument(skip(self), fields(dish_id = %dish_id))]
    pub async fn remove_dish(&self, dish_id: &str) -> ServiceResult<()> {
        info!("Removing dish from menu");

        let removed = self.repository.remove_dish(dish_id).await?;
        if removed {
            info!("Dish removed from menu");
        } else {
            info!("Dish not on menu, nothing to remove");
        }

        Ok(())
    }

    /// The full menu in insertion order
    #[instrument(skip(self))]
    pub async fn list_menu(&self) -> ServiceResult<MenuListResponse> {
        let menu = self.repository.get_menu().await?;
        let dishes = menu.dishes().to_vec();
        let total_count = dishes.len();

        Ok(MenuListResponse {
            dishes,
            total_count,
        })
    }

    /// The menu grouped by course with per-course average prices
    #[instrument(skip(self))]
    pub async fn course_sections(&self) -> ServiceResult<MenuSectionsResponse> {
        let menu = self.repository.get_menu().await?;

        Ok(MenuSectionsResponse {
            sections: menu.course_sections(),
            total_count: menu.len(),
        })
    }

    /// Dishes for the selected course, with the prompt the filter view
    /// shows when nothing is selected or nothing matches
    #[instrument(skip(self))]
    pub async fn filter_by_course(
        &self,
        selection: CourseSelection,
    ) -> ServiceResult<FilterMenuResponse> {
        let menu = self.repository.get_menu().await?;
        let dishes = menu.dishes_by_course(selection);

        let message = match selection.course() {
            None => Some("Please select a course".to_string()),
            Some(course) if dishes.is_empty() => {
                Some(format!("No dishes found for {}", course.label()))
            }
            Some(_) => None,
        };

        Ok(FilterMenuResponse {
            course: selection.course(),
            total_count: dishes.len(),
            dishes,
            message,
        })
    }

    /// Average price over the given course
    #[instrument(skip(self))]
    pub async fn average_price(&self, course: Course) -> ServiceResult<AveragePriceResponse> {
        let menu = self.repository.get_menu().await?;

        Ok(AveragePriceResponse {
            course,
            average_price: menu.average_price(course),
        })
    }

    fn validate_create_dish_request(
        &self,
        request: &CreateDishRequest,
    ) -> ServiceResult<(Decimal, Course)> {
        if request.name.trim().is_empty() {
            return Err(ServiceError::ValidationError {
                message: "Dish name cannot be empty".to_string(),
            });
        }

        if request.description.trim().is_empty() {
            return Err(ServiceError::ValidationError {
                message: "Dish description cannot be empty".to_string(),
            });
        }

        let price = Decimal::from_str(request.price.trim()).map_err(|_| {
            ServiceError::ValidationError {
                message: format!("Dish price '{}' is not a valid amount", request.price),
            }
        })?;
        if price.is_sign_negative() {
            return Err(ServiceError::ValidationError {
                message: "Dish price cannot be negative".to_string(),
            });
        }

        let course = request.course.ok_or_else(|| ServiceError::ValidationError {
            message: "A course must be selected".to_string(),
        })?;

        Ok((price, course))
    }
}
