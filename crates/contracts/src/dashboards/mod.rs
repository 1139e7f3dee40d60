pub mod d410_supermarket_sales;
