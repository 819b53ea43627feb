pub mod d400_insurance_analytics;
