pub mod d400_insurance_analytics;

pub use d400_insurance_analytics::ui::InsuranceDashboard;
