pub mod alias;
pub mod ray;
pub(crate) mod axis;
