use common::{filter_query::FilterSelection, geo::{GeoQueryParam, UserCoordinate}, restaurant::Area};
use dioxus::prelude::*;

use crate::components::directory_header::DirectoryHeader;
use crate::data_definitions::directory_state::DirectoryState;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::directory_page::DirectoryPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DirectoryHeader)]


    #[route("/?:area&:selection&:user_lat&:user_lng")]
    DirectoryPage {
        area: Area,
        selection: UrlParam<FilterSelection>,
        user_lat: GeoQueryParam,
        user_lng: GeoQueryParam,
    },

}

impl Route {
    pub fn directory(state: DirectoryState) -> Self {
        let (user_lat, user_lng) = match state.user_coordinate {
            Some(coordinate) => coordinate.to_query_params(),
            None => (GeoQueryParam::default(), GeoQueryParam::default()),
        };
        Self::DirectoryPage {
            area: state.area,
            selection: UrlParam::from(state.selection),
            user_lat,
            user_lng,
        }
    }
}

/// Reads the session state back out of the page parameters. A partial or invalid coordinate is dropped.
pub fn directory_state_from_params(
    area: Area,
    selection: &UrlParam<FilterSelection>,
    user_lat: &GeoQueryParam,
    user_lng: &GeoQueryParam,
) -> DirectoryState {
    DirectoryState {
        area,
        selection: selection.0.clone(),
        user_coordinate: UserCoordinate::from_query_params(user_lat, user_lng),
    }
}
