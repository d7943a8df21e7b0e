//! Application state for shared services

use std::sync::Arc;

use crate::domain::{HashProvider, UserRepository};
use crate::infrastructure::user::{UpdateProfileService, UserService};

pub type DynUserService = UserService<dyn UserRepository, dyn HashProvider>;
pub type DynUpdateProfileService = UpdateProfileService<dyn UserRepository, dyn HashProvider>;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<DynUserService>,
    pub update_profile: Arc<DynUpdateProfileService>,
}

impl AppState {
    /// Wire services over the given collaborators
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn HashProvider>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository.clone(), hasher.clone())),
            update_profile: Arc::new(UpdateProfileService::new(repository, hasher)),
        }
    }
}
