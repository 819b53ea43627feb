mod dashboard;
mod sidebar;
mod tabular;

pub use dashboard::InsuranceDashboard;
