pub mod bills;
pub mod debt;
pub mod emis;
pub mod history;
pub mod profile;
pub mod score;

pub use bills::BillsSection;
pub use debt::DebtSection;
pub use emis::EmisSection;
pub use history::HistorySection;
pub use profile::ProfileSection;
pub use score::ScoreSection;
