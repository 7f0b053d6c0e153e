pub mod aggregate;
pub mod errors;
pub mod filtering;
pub mod introns;
pub mod io;
pub mod read;
pub mod run;
pub mod stranding;
