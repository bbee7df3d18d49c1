mod helpers;

mod catalog_test;
mod repository_test;
mod token_test;
mod user_test;
