#![allow(non_snake_case)]
mod card;

pub use card::CardView;
