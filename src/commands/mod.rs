pub mod agenda;
pub mod check;
pub mod day;
pub mod expand;
