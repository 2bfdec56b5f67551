//! Per-session directory state carried in the page address.

use common::{filter_query::FilterSelection, geo::UserCoordinate, restaurant::Area};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryState {
    pub area: Area,
    pub selection: FilterSelection,
    pub user_coordinate: Option<UserCoordinate>,
}

impl DirectoryState {
    /// Switching area clears facets, since their options come from the area's records.
    pub fn with_area(&self, area: Area) -> Self {
        if area == self.area {
            return self.clone();
        }
        Self { area, selection: FilterSelection::default(), user_coordinate: self.user_coordinate }
    }

    pub fn with_selection(&self, selection: FilterSelection) -> Self {
        Self { selection, ..self.clone() }
    }

    pub fn with_user_coordinate(&self, user_coordinate: UserCoordinate) -> Self {
        Self { user_coordinate: Some(user_coordinate), ..self.clone() }
    }

    pub fn reset_filters(&self) -> Self {
        self.with_selection(FilterSelection::default())
    }
}
