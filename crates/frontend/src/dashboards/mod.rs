pub mod d410_supermarket_sales;

pub use d410_supermarket_sales::ui::SupermarketSalesDashboard;
