pub mod accrual;
pub mod day_hours;
