//! Restaurant filtering API and module exports.

mod restaurants_in_area;
pub use restaurants_in_area::restaurants_in_area;

mod apply_filters;
pub use apply_filters::apply_filters;

mod facet_options;
pub use facet_options::{facet_options, restaurant_facet_options};

mod proximity;
pub use proximity::annotate_distances;

mod map_view;
pub use map_view::build_map_view;

mod filter_restaurants;
pub use filter_restaurants::{filter_restaurants, filter_restaurants_in};

#[cfg(test)]
pub(crate) mod test_fixtures;
