use async_trait::async_trait;
use std::sync::RwLock;

use crate::models::{Menu, MenuItem, RepositoryError, RepositoryResult};

/// Data access abstraction for the menu
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Snapshot of the current menu
    async fn get_menu(&self) -> RepositoryResult<Menu>;

    /// Append a dish to the menu
    async fn add_dish(&self, dish: MenuItem) -> RepositoryResult<MenuItem>;

    /// Remove the dish with the given ID; returns whether anything was removed
    async fn remove_dish(&self, dish_id: &str) -> RepositoryResult<bool>;
}

/// In-memory menu storage.
///
/// The menu lives behind a single RwLock, so every add or remove is atomic
/// with respect to readers: a snapshot never observes a half-applied
/// mutation. Nothing is persisted across restarts.
#[derive(Debug, Default)]
pub struct InMemoryMenuRepository {
    menu: RwLock<Menu>,
}

impl InMemoryMenuRepository {
    pub fn new() -> Self {
        Self {
            menu: RwLock::new(Menu::new()),
        }
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn get_menu(&self) -> RepositoryResult<Menu> {
        let menu = self.menu.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(menu.clone())
    }

    async fn add_dish(&self, dish: MenuItem) -> RepositoryResult<MenuItem> {
        let mut menu = self
            .menu
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        menu.add_dish(dish.clone());
        Ok(dish)
    }

    async fn remove_dish(&self, dish_id: &str) -> RepositoryResult<bool> {
        let mut menu = self
            .menu
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(menu.remove_dish(dish_id))
    }
}
