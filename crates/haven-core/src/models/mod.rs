pub mod answer;
pub mod assessment;
pub mod history;
pub mod phase;
pub mod question;
pub mod turn;
