pub mod a001_category;
pub mod a002_product_type;
pub mod a003_brand;
pub mod a004_supermarket;
pub mod a005_product;
pub mod a006_price;
pub mod a007_lookup;
