mod data;
mod utils;
