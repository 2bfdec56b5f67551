pub mod area_toggle;
pub mod facet_sidebar;
pub mod geolocation_button;
pub mod restaurant_map;
pub mod restaurant_columns;
pub mod restaurant_card;
pub mod card_action_buttons;
