pub mod gad7;
pub mod phq_a;
