pub mod admin;
pub mod health;
pub mod member;
pub mod navigation;

use chrono::{Local, NaiveDate};

fn today() -> NaiveDate {
    Local::now().date_naive()
}
