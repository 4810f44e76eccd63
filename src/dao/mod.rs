/// Document registry the UI reads its API definitions from.
pub mod registry;
