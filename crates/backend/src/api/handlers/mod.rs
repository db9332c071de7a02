pub mod d400_business_dashboard;
