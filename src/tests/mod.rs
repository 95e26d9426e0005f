mod iterator;
mod ordered_strategy;
mod utils;
