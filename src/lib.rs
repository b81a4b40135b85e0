pub mod dataset;
pub mod mnist;
pub mod vectorize;
