pub mod restaurant_dataset;
